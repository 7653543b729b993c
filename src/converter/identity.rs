// file: src/converter/identity.rs
// description: synthetic record identifier and hash generation
// reference: https://docs.rs/uuid, https://docs.rs/sha2

use chrono::Utc;
use sha2::{Digest, Sha256};
use uuid::Uuid;

pub const RECORD_ID_PREFIX: &str = "rec";
const RECORD_ID_HEX_LEN: usize = 13;
pub const RECORD_HASH_LEN: usize = 32;

/// `rec` followed by 13 hex characters of a random v4 UUID.
pub fn generate_record_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}{}", RECORD_ID_PREFIX, &hex[..RECORD_ID_HEX_LEN])
}

/// Cosmetic digest of the current time and a random UUID. Not derived from
/// record content and never verified.
pub fn generate_record_hash() -> String {
    let seed = format!("{}{}", Utc::now().to_rfc3339(), Uuid::new_v4());
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..RECORD_HASH_LEN].to_string()
}
