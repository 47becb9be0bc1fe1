//! Output attribute names.

// Record envelope
pub const DATA_SOURCE: &str = "DATA_SOURCE";
pub const RECORD_ID: &str = "RECORD_ID";
pub const FEATURES: &str = "FEATURES";

/// Keys owned by the record envelope; payload merges never touch them.
pub const RESERVED_KEYS: [&str; 3] = [DATA_SOURCE, RECORD_ID, FEATURES];

pub const RECORD_TYPE: &str = "RECORD_TYPE";

// Names
pub const NAME_FULL: &str = "NAME_FULL";
pub const NAME_TYPE: &str = "NAME_TYPE";
pub const NAME_FIRST: &str = "NAME_FIRST";
pub const NAME_LAST: &str = "NAME_LAST";
pub const NAME_MIDDLE: &str = "NAME_MIDDLE";
pub const NAME_SUFFIX: &str = "NAME_SUFFIX";
pub const NAME_PREFIX: &str = "NAME_PREFIX";

// Identifiers
pub const OTHER_ID_TYPE: &str = "OTHER_ID_TYPE";
pub const OTHER_ID_NUMBER: &str = "OTHER_ID_NUMBER";
pub const OTHER_ID_COUNTRY: &str = "OTHER_ID_COUNTRY";
pub const ACCOUNT_DOMAIN: &str = "ACCOUNT_DOMAIN";

// Relationships
pub const REL_ANCHOR_DOMAIN: &str = "REL_ANCHOR_DOMAIN";
pub const REL_ANCHOR_KEY: &str = "REL_ANCHOR_KEY";
pub const REL_POINTER_DOMAIN: &str = "REL_POINTER_DOMAIN";
pub const REL_POINTER_KEY: &str = "REL_POINTER_KEY";
pub const REL_POINTER_ROLE: &str = "REL_POINTER_ROLE";

// Payload
pub const SANCTIONS_LIST: &str = "SANCTIONS_LIST";
pub const SANCTIONS_DATE: &str = "SANCTIONS_DATE";
pub const SANCTIONS_PROGRAMS: &str = "SANCTIONS_PROGRAMS";
pub const SANCTIONS_TYPE: &str = "SANCTIONS_TYPE";
pub const SANCTIONS_REMARKS: &str = "SANCTIONS_REMARKS";
pub const IS_PRIMARY: &str = "IS_PRIMARY";
pub const DATA_QUALITY_SCORE: &str = "DATA_QUALITY_SCORE";

/// Suffix marking an attribute that carries an identifier number.
pub const NUMBER_SUFFIX: &str = "_NUMBER";

/// Returns true for keys owned by the record envelope.
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}
