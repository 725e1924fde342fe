//! Compiler, packer and installer detection results plus entry-point facts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::numeric::{dec_str, num_str, Radix};

/// Kind of detected tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    Compiler,
    Linker,
    Installer,
    Packer,
    Library,
    Other,
    Unknown,
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolKind::Compiler => write!(f, "compiler"),
            ToolKind::Linker => write!(f, "linker"),
            ToolKind::Installer => write!(f, "installer"),
            ToolKind::Packer => write!(f, "packer"),
            ToolKind::Library => write!(f, "library"),
            ToolKind::Other => write!(f, "tool"),
            ToolKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// How a tool was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectionSource {
    /// Byte signature match
    Signature,
    /// Heuristic over headers, sections or strings
    Heuristic,
    /// Tool-specific metadata (e.g. Rich header, comment section)
    Metadata,
}

/// One compiler/packer detection result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedTool {
    pub kind: ToolKind,
    pub name: String,
    pub version: String,
    pub additional_info: String,
    pub source: DetectionSource,
    /// Number of signature nibbles that matched, for signature detections
    pub agreement: Option<u64>,
    pub total: Option<u64>,
}

impl DetectedTool {
    pub fn new<N: Into<String>>(kind: ToolKind, name: N, source: DetectionSource) -> Self {
        Self {
            kind,
            name: name.into(),
            version: String::new(),
            additional_info: String::new(),
            source,
            agreement: None,
            total: None,
        }
    }

    pub fn with_version<V: Into<String>>(mut self, version: V) -> Self {
        self.version = version.into();
        self
    }

    pub fn is_heuristic(&self) -> bool {
        self.source == DetectionSource::Heuristic
    }

    /// Share of matched signature nibbles in percent, when known.
    pub fn agreement_ratio(&self) -> Option<f64> {
        match (self.agreement, self.total) {
            (Some(a), Some(t)) if t > 0 => Some(a as f64 * 100.0 / t as f64),
            _ => None,
        }
    }

    /// `name (version)` or just `name`.
    pub fn display_name(&self) -> String {
        if self.version.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.version)
        }
    }
}

/// Tool detections and the entry-point facts gathered while detecting them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolInfo {
    detected: Vec<DetectedTool>,
    pub image_base: Option<u64>,
    pub ep_address: Option<u64>,
    pub ep_offset: Option<u64>,
    /// Hex dump of the bytes at the entry point
    pub ep_bytes: String,
    pub ep_section_index: Option<u64>,
    pub ep_section_name: String,
}

impl ToolInfo {
    pub fn add_tool(&mut self, tool: DetectedTool) {
        self.detected.push(tool);
    }

    pub fn detected(&self) -> &[DetectedTool] {
        &self.detected
    }

    pub fn number_of_detected_tools(&self) -> usize {
        self.detected.len()
    }

    /// Number of detected compilers; other tool kinds are not counted.
    pub fn number_of_detected_compilers(&self) -> usize {
        self.detected
            .iter()
            .filter(|t| t.kind == ToolKind::Compiler)
            .count()
    }

    pub fn is_packed(&self) -> bool {
        self.detected.iter().any(|t| t.kind == ToolKind::Packer)
    }

    pub fn image_base_str(&self, radix: Radix) -> String {
        num_str(self.image_base, radix)
    }
    pub fn ep_address_str(&self, radix: Radix) -> String {
        num_str(self.ep_address, radix)
    }
    pub fn ep_offset_str(&self, radix: Radix) -> String {
        num_str(self.ep_offset, radix)
    }
    pub fn ep_section_index_str(&self) -> String {
        dec_str(self.ep_section_index)
    }
}
