//! .NET (CLR) metadata.

use serde::{Deserialize, Serialize};

use crate::core::digests::Digests;
use crate::core::numeric::{num_str, Radix};

/// Offset and size of one metadata stream (`#~`, `#Strings`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamInfo {
    pub offset: u64,
    pub size: u64,
}

impl StreamInfo {
    pub fn new(offset: u64, size: u64) -> Self {
        Self { offset, size }
    }
}

/// A defined or referenced type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotnetClass {
    pub name: String,
    /// Name including enclosing classes, e.g. `Outer+Inner`
    pub nested_name: String,
    pub name_space: String,
    /// Referenced assembly for imported classes
    pub library_name: String,
    pub parent_index: Option<u64>,
}

impl DotnetClass {
    pub fn new<N: Into<String>, S: Into<String>>(name_space: S, name: N) -> Self {
        let name = name.into();
        Self {
            nested_name: name.clone(),
            name,
            name_space: name_space.into(),
            ..Default::default()
        }
    }

    pub fn full_name(&self) -> String {
        if self.name_space.is_empty() {
            self.nested_name.clone()
        } else {
            format!("{}.{}", self.name_space, self.nested_name)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotnetInfo {
    pub used: bool,
    pub runtime_version_major: Option<u64>,
    pub runtime_version_minor: Option<u64>,
    pub metadata_header_address: Option<u64>,
    pub metadata_stream: Option<StreamInfo>,
    pub string_stream: Option<StreamInfo>,
    pub blob_stream: Option<StreamInfo>,
    pub guid_stream: Option<StreamInfo>,
    pub user_string_stream: Option<StreamInfo>,
    pub module_version_id: String,
    pub type_lib_id: String,
    defined_classes: Vec<DotnetClass>,
    imported_classes: Vec<DotnetClass>,
    pub typeref_hashes: Digests,
}

impl DotnetInfo {
    pub fn set_runtime_version(&mut self, major: u64, minor: u64) {
        self.runtime_version_major = Some(major);
        self.runtime_version_minor = Some(minor);
    }

    /// `major.minor`, empty when the version is unknown.
    pub fn runtime_version(&self) -> String {
        match (self.runtime_version_major, self.runtime_version_minor) {
            (Some(major), Some(minor)) => format!("{}.{}", major, minor),
            _ => String::new(),
        }
    }

    pub fn set_defined_classes(&mut self, classes: Vec<DotnetClass>) {
        self.defined_classes = classes;
    }

    pub fn set_imported_classes(&mut self, classes: Vec<DotnetClass>) {
        self.imported_classes = classes;
    }

    pub fn defined_classes(&self) -> &[DotnetClass] {
        &self.defined_classes
    }

    pub fn imported_classes(&self) -> &[DotnetClass] {
        &self.imported_classes
    }

    pub fn number_of_imported_classes(&self) -> usize {
        self.imported_classes.len()
    }

    /// # Panics
    /// `position` must be below [`Self::number_of_imported_classes`].
    pub fn imported_class(&self, position: usize) -> &DotnetClass {
        &self.imported_classes[position]
    }

    pub fn has_type_lib_id(&self) -> bool {
        !self.type_lib_id.is_empty()
    }

    pub fn has_typeref_records(&self) -> bool {
        !self.imported_classes.is_empty()
    }

    pub fn metadata_header_address_str(&self, radix: Radix) -> String {
        num_str(self.metadata_header_address, radix)
    }

    pub fn stream_offset_str(stream: Option<StreamInfo>, radix: Radix) -> String {
        num_str(stream.map(|s| s.offset), radix)
    }

    pub fn stream_size_str(stream: Option<StreamInfo>, radix: Radix) -> String {
        num_str(stream.map(|s| s.size), radix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_version() {
        let mut info = DotnetInfo::default();
        assert_eq!(info.runtime_version(), "");
        info.set_runtime_version(2, 5);
        assert_eq!(info.runtime_version(), "2.5");
    }

    #[test]
    fn test_streams_and_classes() {
        let mut info = DotnetInfo {
            used: true,
            metadata_stream: Some(StreamInfo::new(0x6c, 0x1a4)),
            ..Default::default()
        };
        let mut console = DotnetClass::new("System", "Console");
        console.library_name = "mscorlib".into();
        info.set_imported_classes(vec![console]);

        assert!(info.has_typeref_records());
        assert_eq!(info.imported_class(0).full_name(), "System.Console");
        assert_eq!(
            DotnetInfo::stream_offset_str(info.metadata_stream, Radix::HexWithPrefix),
            "0x6c"
        );
        assert_eq!(DotnetInfo::stream_size_str(info.blob_stream, Radix::Dec), "");
        assert!(!info.has_type_lib_id());
    }
}
