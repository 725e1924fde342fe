//! Strings reported by the string-extraction collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::numeric::{num_str, Radix};

/// Encoding the string was found in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StringFormat {
    #[default]
    Ascii,
    Utf16Le,
    Utf16Be,
    Utf32,
}

impl fmt::Display for StringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringFormat::Ascii => write!(f, "ASCII"),
            StringFormat::Utf16Le => write!(f, "UTF-16LE"),
            StringFormat::Utf16Be => write!(f, "UTF-16BE"),
            StringFormat::Utf32 => write!(f, "UTF-32"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedString {
    pub format: StringFormat,
    pub section_name: String,
    pub offset: Option<u64>,
    pub content: String,
}

impl ExtractedString {
    pub fn new<S: Into<String>>(format: StringFormat, offset: u64, content: S) -> Self {
        Self {
            format,
            offset: Some(offset),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn offset_str(&self, radix: Radix) -> String {
        num_str(self.offset, radix)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringSet {
    strings: Vec<ExtractedString>,
}

impl StringSet {
    pub fn add(&mut self, string: ExtractedString) {
        self.strings.push(string);
    }

    pub fn extend<I: IntoIterator<Item = ExtractedString>>(&mut self, strings: I) {
        self.strings.extend(strings);
    }

    pub fn strings(&self) -> &[ExtractedString] {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// # Panics
    /// `position` must be below [`Self::len`].
    pub fn get(&self, position: usize) -> &ExtractedString {
        &self.strings[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_set_order() {
        let mut set = StringSet::default();
        assert!(set.is_empty());
        set.add(ExtractedString::new(StringFormat::Ascii, 0x400, "kernel32.dll"));
        set.extend(vec![ExtractedString {
            format: StringFormat::Utf16Le,
            section_name: ".rdata".into(),
            offset: Some(0x820),
            content: "Software\\Acme".into(),
        }]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).content, "kernel32.dll");
        assert_eq!(set.get(1).format.to_string(), "UTF-16LE");
        assert_eq!(set.get(1).offset_str(Radix::HexWithPrefix), "0x820");
    }
}
