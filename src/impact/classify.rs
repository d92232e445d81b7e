//! Severity tiers used to pick which damage effects a renderer shows.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    CATASTROPHIC_DIAMETER_KM, CATASTROPHIC_ENERGY_MT, REGIONAL_DIAMETER_KM, REGIONAL_ENERGY_MT,
};

/// Coarse impact severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// City-scale damage.
    Local,
    /// Country-scale damage.
    Regional,
    /// Global consequences.
    Catastrophic,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Local => "Local",
            Severity::Regional => "Regional",
            Severity::Catastrophic => "Catastrophic",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an impact. Rules are checked in order, first match wins:
/// - diameter > 10 km or energy > 10 000 Mt → Catastrophic
/// - diameter > 1 km or energy > 100 Mt → Regional
/// - otherwise Local
pub fn classify(diameter_km: f64, energy_megatons: f64) -> Severity {
    if diameter_km > CATASTROPHIC_DIAMETER_KM || energy_megatons > CATASTROPHIC_ENERGY_MT {
        Severity::Catastrophic
    } else if diameter_km > REGIONAL_DIAMETER_KM || energy_megatons > REGIONAL_ENERGY_MT {
        Severity::Regional
    } else {
        Severity::Local
    }
}
