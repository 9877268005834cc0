//! Snapshot schema definitions.
//!
//! A snapshot is what the CAD extraction step hands over: every pipe and
//! fitting in the selection, keyed by the host's element ids, with the
//! connections each element reports.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub segments: Vec<SegmentDef>,
    #[serde(default)]
    pub fittings: Vec<FittingDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SegmentDef {
    pub id: String,
    pub length_ft: f64,
    pub diameter_in: f64,
    #[serde(default)]
    pub connected_fittings: Vec<String>,
    #[serde(default)]
    pub connected_pipes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FittingDef {
    pub id: String,
    /// Explicit classification; when absent the kind is derived from
    /// `family` and `type_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FittingKindDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub connection_count: u32,
    #[serde(default)]
    pub connected_pipes: Vec<String>,
    #[serde(default)]
    pub connected_fittings: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FittingKindDef {
    Tee,
    Elbow,
    Coupling,
    Cap,
    Generic,
}

impl Snapshot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: crate::validate::LATEST_VERSION,
            name: name.into(),
            segments: Vec::new(),
            fittings: Vec::new(),
        }
    }
}
