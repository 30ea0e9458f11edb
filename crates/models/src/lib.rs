//! Wire and in-memory record types for the back-office API.
//! - `blog`: blog posts with publish status and view counters.
//! - `proposal`: client project proposals captured from the public site.
//!
//! Create inputs restrict bodies to known fields and fill defaults; patch
//! structs carry only the fields the caller wants to overwrite.

pub mod blog;
pub mod proposal;

use chrono::Utc;

/// Calendar-date stamp used for `date` fields (`YYYY-MM-DD`).
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
