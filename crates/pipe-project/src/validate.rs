//! Snapshot validation logic.
//!
//! Only structural problems are errors here. References to unknown ids are
//! tolerated and dropped during conversion.

use crate::schema::Snapshot;
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Empty ID in {context}")]
    EmptyId { context: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_snapshot(snapshot: &Snapshot) -> Result<(), ValidationError> {
    if snapshot.version == 0 || snapshot.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: snapshot.version,
        });
    }

    check_ids(snapshot.segments.iter().map(|s| s.id.as_str()), "segments")?;
    check_ids(snapshot.fittings.iter().map(|f| f.id.as_str()), "fittings")?;
    Ok(())
}

fn check_ids<'a>(ids: impl Iterator<Item = &'a str>, context: &str) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId {
                context: context.to_string(),
            });
        }
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateId {
                id: id.to_string(),
                context: context.to_string(),
            });
        }
    }
    Ok(())
}
