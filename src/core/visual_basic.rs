//! Visual Basic runtime metadata.

use serde::{Deserialize, Serialize};

use crate::core::digests::Digests;
use crate::core::numeric::dec_str;

/// A Visual Basic object (form, module, class) and its method names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualBasicObject {
    pub name: String,
    pub methods: Vec<String>,
}

/// An external API declared through `Declare Function`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualBasicExtern {
    pub module_name: String,
    pub api_name: String,
}

/// COM object information of an ActiveX project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComObjectInfo {
    pub name: String,
    pub description: String,
    pub clsid: String,
    pub interface_clsid: String,
    pub events_clsid: String,
    pub object_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualBasicInfo {
    pub used: bool,
    pub is_pcode: bool,
    pub language_dll: String,
    pub backup_language_dll: String,
    pub project_exe_name: String,
    pub project_description: String,
    pub project_help_file: String,
    pub project_name: String,
    pub project_path: String,
    pub language_dll_primary_lcid: Option<u32>,
    pub language_dll_secondary_lcid: Option<u32>,
    pub project_primary_lcid: Option<u32>,
    pub project_secondary_lcid: Option<u32>,
    objects: Vec<VisualBasicObject>,
    externs: Vec<VisualBasicExtern>,
    pub object_table_guid: String,
    pub typelib_clsid: String,
    pub typelib_major_version: Option<u16>,
    pub typelib_minor_version: Option<u16>,
    pub typelib_lcid: Option<u32>,
    pub com_object: ComObjectInfo,
    pub extern_table_hashes: Digests,
    pub object_table_hashes: Digests,
}

impl VisualBasicInfo {
    pub fn add_object(&mut self, object: VisualBasicObject) {
        self.objects.push(object);
    }

    pub fn add_extern(&mut self, ext: VisualBasicExtern) {
        self.externs.push(ext);
    }

    pub fn objects(&self) -> &[VisualBasicObject] {
        &self.objects
    }

    pub fn externs(&self) -> &[VisualBasicExtern] {
        &self.externs
    }

    pub fn number_of_objects(&self) -> usize {
        self.objects.len()
    }

    pub fn number_of_externs(&self) -> usize {
        self.externs.len()
    }

    /// # Panics
    /// `position` must be below [`Self::number_of_externs`].
    pub fn extern_module_name(&self, position: usize) -> &str {
        &self.externs[position].module_name
    }

    pub fn extern_api_name(&self, position: usize) -> &str {
        &self.externs[position].api_name
    }

    pub fn language_dll_primary_lcid_str(&self) -> String {
        dec_str(self.language_dll_primary_lcid)
    }
    pub fn language_dll_secondary_lcid_str(&self) -> String {
        dec_str(self.language_dll_secondary_lcid)
    }
    pub fn project_primary_lcid_str(&self) -> String {
        dec_str(self.project_primary_lcid)
    }
    pub fn project_secondary_lcid_str(&self) -> String {
        dec_str(self.project_secondary_lcid)
    }
    pub fn typelib_major_version_str(&self) -> String {
        dec_str(self.typelib_major_version)
    }
    pub fn typelib_minor_version_str(&self) -> String {
        dec_str(self.typelib_minor_version)
    }
    pub fn typelib_lcid_str(&self) -> String {
        dec_str(self.typelib_lcid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_externs_and_objects() {
        let mut vb = VisualBasicInfo {
            used: true,
            project_name: "Project1".into(),
            project_primary_lcid: Some(1033),
            ..Default::default()
        };
        vb.add_extern(VisualBasicExtern {
            module_name: "kernel32".into(),
            api_name: "GetTickCount".into(),
        });
        vb.add_object(VisualBasicObject {
            name: "Form1".into(),
            methods: vec!["Form_Load".into(), "Command1_Click".into()],
        });

        assert_eq!(vb.number_of_externs(), 1);
        assert_eq!(vb.extern_module_name(0), "kernel32");
        assert_eq!(vb.extern_api_name(0), "GetTickCount");
        assert_eq!(vb.number_of_objects(), 1);
        assert_eq!(vb.objects()[0].methods.len(), 2);
        assert_eq!(vb.project_primary_lcid_str(), "1033");
        assert_eq!(vb.project_secondary_lcid_str(), "");
        assert_eq!(vb.typelib_major_version_str(), "");
    }
}
