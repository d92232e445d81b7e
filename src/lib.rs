//! Asteroid Impact - Impact & Orbit Physics
//!
//! A library crate computing asteroid orbits and impact consequences for
//! visualization: Kepler solving, orbital-plane transforms, renderable orbit
//! paths, impact energy, damage scaling and severity classification.
//!
//! ```
//! use asteroid_impact::impact::{Severity, assess_impact};
//! use asteroid_impact::config::ScalingConfig;
//! use asteroid_impact::types::{AsteroidParameters, Composition, ImpactParameters};
//!
//! let asteroid = AsteroidParameters::new(0.37, 12.6, Composition::Rock)?;
//! let impact = ImpactParameters::head_on(&asteroid);
//! let assessment = assess_impact(&asteroid, &impact, &ScalingConfig::default())?;
//! assert_eq!(assessment.severity, Severity::Regional);
//! # Ok::<(), asteroid_impact::error::InvalidParameterError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod geography;
pub mod impact;
pub mod mitigation;
pub mod orbit;
pub mod trajectory;
pub mod types;

pub use config::{ImpactPhysicsPlugin, ScalingConfig};
pub use error::InvalidParameterError;

#[cfg(test)]
pub mod test_utils;
