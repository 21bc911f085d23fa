//! Business profile accumulated during discovery

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Information gathered about the business during the discovery stage
///
/// A few descriptive fields are fixed; everything else the coach marks
/// complete lands in `extensions`, keyed by discovery area name. The
/// extension map is flattened on the wire, so stored records look like the
/// open-ended key/value shape the coaches have always written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessProfile {
    /// Quick 2-3 sentence business description
    pub snapshot: String,

    /// Top goals for the next 6-12 months
    pub goals: Vec<String>,

    /// Where they feel stuck or frustrated
    pub challenges: Vec<String>,

    /// Current products/services/offers
    pub offers: Vec<String>,

    /// Team size, time available, budget, etc.
    pub constraints: String,

    /// Coach-specific discovery findings keyed by area name
    /// (e.g. "business_model", "audience", "brand_perception")
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Vec<String>>,
}

impl BusinessProfile {
    /// Record key findings for a discovery area. The last write for an
    /// area wins; findings replace, they do not accumulate.
    ///
    /// Areas matching a fixed list-valued field update that field; any
    /// other area name goes to the extension map.
    pub fn record_findings(&mut self, area: &str, key_findings: Vec<String>) {
        debug!(%area, finding_count = key_findings.len(), "record_findings: called");
        match area {
            "goals" => self.goals = key_findings,
            "challenges" => self.challenges = key_findings,
            "offers" => self.offers = key_findings,
            _ => {
                self.extensions.insert(area.to_string(), key_findings);
            }
        }
    }

    /// Findings recorded for an area, if any
    pub fn findings(&self, area: &str) -> Option<&[String]> {
        match area {
            "goals" => Some(&self.goals),
            "challenges" => Some(&self.challenges),
            "offers" => Some(&self.offers),
            _ => self.extensions.get(area).map(|v| v.as_slice()),
        }
    }
}
