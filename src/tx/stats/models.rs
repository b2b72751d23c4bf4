//! Statistics data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::tx::ids::LocaleCode;

/// Per-locale statistics for one resource, keyed by locale code
///
/// The metric objects are opaque API payloads (translated counts, completion
/// strings, timestamps); they are carried through untouched.
pub type ResourceStats = BTreeMap<String, serde_json::Value>;

/// Per-resource statistics for a whole project, keyed by resource slug
pub type ProjectStats = BTreeMap<String, ResourceStats>;

/// One locale's slice of the project statistics, keyed by resource slug
pub type LocaleStats = BTreeMap<String, serde_json::Value>;

/// Translation detail for one project language, with a client-side
/// completion percentage
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LocaleDetails {
    pub language_code: Option<LocaleCode>,
    pub translated_segments: u64,
    #[serde(default)]
    pub untranslated_segments: Option<u64>,
    #[serde(default)]
    pub reviewed_segments: Option<u64>,
    pub total_segments: u64,
    #[serde(default)]
    pub translated_words: Option<u64>,
    #[serde(default)]
    pub coordinators: Vec<String>,
    #[serde(default)]
    pub translators: Vec<String>,
    #[serde(default)]
    pub reviewers: Vec<String>,
    /// Derived client-side; never present in the API response
    #[serde(skip_deserializing)]
    pub completed_percentage: u32,
}

impl LocaleDetails {
    /// Attach `completed_percentage = round(translated * 100 / total)`
    ///
    /// A project with no segments reports 0 rather than dividing by zero.
    pub(crate) fn with_completed_percentage(mut self) -> Self {
        self.completed_percentage = if self.total_segments == 0 {
            0
        } else {
            ((self.translated_segments as f64) * 100.0 / (self.total_segments as f64)).round()
                as u32
        };
        self
    }
}
