//! Resource table, version-info resources and icon digests.

use serde::{Deserialize, Serialize};

use crate::core::numeric::{dec_str, num_str, Radix};

/// One leaf of the resource tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub resource_type: String,
    pub language: String,
    pub name_id: Option<u64>,
    pub type_id: Option<u64>,
    pub language_id: Option<u64>,
    pub sublanguage_id: Option<u64>,
    pub offset: Option<u64>,
    pub size: Option<u64>,
    pub crc32: String,
    pub md5: String,
    pub sha256: String,
}

/// Language entry of a `VS_VERSIONINFO` translation table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionLanguage {
    pub lcid: String,
    pub code_page: String,
}

/// Key/value pair of a `StringFileInfo` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionString {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTable {
    resources: Vec<Resource>,
    version_languages: Vec<VersionLanguage>,
    version_strings: Vec<VersionString>,
    pub icon_crc32: String,
    pub icon_md5: String,
    pub icon_sha256: String,
    /// Perceptual average hash of the main icon
    pub icon_avg_hash: String,
}

impl ResourceTable {
    pub fn add_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    pub fn add_version_language<L: Into<String>, C: Into<String>>(
        &mut self,
        lcid: L,
        code_page: C,
    ) {
        self.version_languages.push(VersionLanguage {
            lcid: lcid.into(),
            code_page: code_page.into(),
        });
    }

    pub fn add_version_string<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.version_strings.push(VersionString {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn number_of_resources(&self) -> usize {
        self.resources.len()
    }

    pub fn has_records(&self) -> bool {
        !self.resources.is_empty()
    }

    /// # Panics
    /// `position` must be below [`Self::number_of_resources`].
    pub fn resource(&self, position: usize) -> &Resource {
        &self.resources[position]
    }

    pub fn resource_name(&self, position: usize) -> &str {
        &self.resources[position].name
    }

    pub fn resource_type(&self, position: usize) -> &str {
        &self.resources[position].resource_type
    }

    pub fn resource_language(&self, position: usize) -> &str {
        &self.resources[position].language
    }

    pub fn resource_name_id_str(&self, position: usize) -> String {
        dec_str(self.resources[position].name_id)
    }

    pub fn resource_type_id_str(&self, position: usize) -> String {
        dec_str(self.resources[position].type_id)
    }

    pub fn resource_language_id_str(&self, position: usize) -> String {
        dec_str(self.resources[position].language_id)
    }

    pub fn resource_sublanguage_id_str(&self, position: usize) -> String {
        dec_str(self.resources[position].sublanguage_id)
    }

    pub fn resource_offset_str(&self, position: usize, radix: Radix) -> String {
        num_str(self.resources[position].offset, radix)
    }

    pub fn resource_size_str(&self, position: usize, radix: Radix) -> String {
        num_str(self.resources[position].size, radix)
    }

    pub fn number_of_version_languages(&self) -> usize {
        self.version_languages.len()
    }

    pub fn version_language(&self, position: usize) -> &VersionLanguage {
        &self.version_languages[position]
    }

    pub fn number_of_version_strings(&self) -> usize {
        self.version_strings.len()
    }

    pub fn version_string(&self, position: usize) -> &VersionString {
        &self.version_strings[position]
    }

    /// Look up a version string by key, e.g. `CompanyName`.
    pub fn version_value(&self, name: &str) -> Option<&str> {
        self.version_strings
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value.as_str())
    }
}
