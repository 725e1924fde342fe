//! Authenticode certificate table.
//!
//! The table is produced by the format parser and shared with the result
//! model through an `Arc`; the model never mutates it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub subject: String,
    pub issuer: String,
    pub serial_number: String,
    pub valid_since: String,
    pub valid_until: String,
    pub public_key_algorithm: String,
    pub signature_algorithm: String,
    pub sha1_digest: String,
    pub sha256_digest: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateTable {
    certificates: Vec<Certificate>,
    /// Index of the signer's certificate
    pub signer_index: Option<usize>,
    /// Index of the counter-signer's (timestamping) certificate
    pub counter_signer_index: Option<usize>,
}

impl CertificateTable {
    pub fn new(certificates: Vec<Certificate>) -> Self {
        Self {
            certificates,
            ..Default::default()
        }
    }

    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    pub fn number_of_certificates(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    /// # Panics
    /// `position` must be below [`Self::number_of_certificates`].
    pub fn certificate(&self, position: usize) -> &Certificate {
        &self.certificates[position]
    }

    pub fn signer(&self) -> Option<&Certificate> {
        self.signer_index.and_then(|i| self.certificates.get(i))
    }

    pub fn counter_signer(&self) -> Option<&Certificate> {
        self.counter_signer_index
            .and_then(|i| self.certificates.get(i))
    }
}
