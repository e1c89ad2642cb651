//! Credential Catalog
//!
//! Read-only credential data supplied by the dApp backend: on-chain
//! credentials plus the parallel database records used to resolve
//! document/share links and issuance history. This program never creates,
//! persists, or validates any of it.

use std::fs;
use std::path::Path;

use chrono::DateTime;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An issued credential as exposed by the GlobalStorage contract.
#[derive(Debug, Clone, Deserialize)]
pub struct Credential {
    pub token_id: u64,
    pub degree: String,
    pub institution: String,
    /// Unix seconds, as emitted on-chain.
    pub issue_date: i64,
    pub ipfs_hash: String,
    pub student_address: String,
    #[serde(default)]
    pub revoked: bool,
}

impl Credential {
    pub fn issue_date_display(&self) -> String {
        DateTime::from_timestamp(self.issue_date, 0)
            .map(|dt| dt.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    pub fn short_hash(&self) -> String {
        abbreviate(&self.ipfs_hash, 20, 10)
    }

    pub fn short_address(&self) -> String {
        abbreviate(&self.student_address, 10, 8)
    }
}

fn abbreviate(s: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= head + tail {
        return s.to_string();
    }
    let front: String = chars[..head].iter().collect();
    let back: String = chars[chars.len() - tail..].iter().collect();
    format!("{}...{}", front, back)
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryEvent {
    /// Unix seconds.
    pub at: i64,
    pub action: String,
    #[serde(default)]
    pub details: Option<String>,
}

impl HistoryEvent {
    pub fn at_display(&self) -> String {
        DateTime::from_timestamp(self.at, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Backend database record paired with a credential by token id.
///
/// Only consulted when resolving the explicit card actions; a credential
/// with no matching record simply has those actions disabled.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    pub token_id: u64,
    pub document_url: String,
    pub share_url: String,
    #[serde(default)]
    pub history: Vec<HistoryEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub credentials: Vec<Credential>,
    #[serde(default)]
    pub records: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn record_for(&self, token_id: u64) -> Option<&CatalogRecord> {
        self.records.iter().find(|r| r.token_id == token_id)
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.credentials.iter().filter(|c| !c.revoked).count()
    }

    pub fn revoked_count(&self) -> usize {
        self.credentials.iter().filter(|c| c.revoked).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_json() -> &'static str {
        r#"{
            "credentials": [
                {
                    "token_id": 1,
                    "degree": "BSc Computer Science",
                    "institution": "Royal University",
                    "issue_date": 1719792000,
                    "ipfs_hash": "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG",
                    "student_address": "0x9f8b2c4d6e8fa1b3c5d7e9fb1a3c5d7e9fb1a3c5",
                    "revoked": false
                },
                {
                    "token_id": 2,
                    "degree": "MSc Cryptography",
                    "institution": "Royal University",
                    "issue_date": 1722470400,
                    "ipfs_hash": "QmT78zSuBmuS4z925WZfrqQ1qHaJ56DQaTfyMUF7F8ff5w",
                    "student_address": "0x1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b",
                    "revoked": true
                }
            ],
            "records": [
                {
                    "id": "rec-1",
                    "token_id": 1,
                    "document_url": "https://gateway.pinata.cloud/ipfs/QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG",
                    "share_url": "https://storium.app/c/rec-1",
                    "history": [
                        { "at": 1719792000, "action": "issued", "details": "minted on Sepolia" }
                    ]
                }
            ]
        }"#
    }

    #[test]
    fn test_load_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_json().as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.active_count(), 1);
        assert_eq!(catalog.revoked_count(), 1);
        assert_eq!(catalog.credentials[0].degree, "BSc Computer Science");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_load_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(matches!(
            Catalog::load(file.path()),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_record_lookup() {
        let catalog: Catalog = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(catalog.record_for(1).unwrap().id, "rec-1");
        assert!(catalog.record_for(2).is_none());
        assert!(catalog.record_for(99).is_none());
    }

    #[test]
    fn test_abbreviations() {
        let catalog: Catalog = serde_json::from_str(sample_json()).unwrap();
        let cred = &catalog.credentials[0];
        let hash = cred.short_hash();
        assert!(hash.starts_with("QmYwAPJzv5CZsnA625s3"));
        assert!(hash.contains("..."));
        assert!(hash.ends_with("79ojWnPbdG"));

        let addr = cred.short_address();
        assert!(addr.starts_with("0x9f8b2c4d"));
        assert!(addr.ends_with("9fb1a3c5"));
    }

    #[test]
    fn test_abbreviate_short_input() {
        assert_eq!(abbreviate("short", 20, 10), "short");
    }
}
