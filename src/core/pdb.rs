//! Debug database (PDB) reference taken from the CodeView debug record.

use serde::{Deserialize, Serialize};

use crate::core::numeric::{num_str, Radix};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdbInfo {
    /// CodeView signature, e.g. `RSDS` or `NB10`
    pub pdb_type: String,
    pub path: String,
    pub guid: String,
    pub age: Option<u64>,
    pub timestamp: Option<u64>,
}

impl PdbInfo {
    pub fn age_str(&self, radix: Radix) -> String {
        num_str(self.age, radix)
    }

    pub fn timestamp_str(&self, radix: Radix) -> String {
        num_str(self.timestamp, radix)
    }

    pub fn is_present(&self) -> bool {
        !self.pdb_type.is_empty() || !self.path.is_empty()
    }
}
