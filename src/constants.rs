//! Visualization calibration constants for the damage scaling laws.
//!
//! These are not physical law. They were tuned so that the rendered crater,
//! blast and tsunami effects look plausible for asteroids between tens of
//! meters and tens of kilometers. [`crate::config::ScalingConfig`] uses them as
//! its defaults; changing them changes every visual downstream.

// ── Crater ──────────────────────────────────────────────────────────────────
/// Crater diameter (km) per megaton^0.294.
pub const CRATER_COEFFICIENT_KM: f64 = 1.2;
pub const CRATER_ENERGY_EXPONENT: f64 = 0.294;
/// Exponent applied to sin(impact angle).
pub const CRATER_ANGLE_EXPONENT: f64 = 0.5;
/// Depth-to-diameter ratio of a simple crater.
pub const CRATER_DEPTH_RATIO: f64 = 0.2;

// ── Blast / thermal ─────────────────────────────────────────────────────────
/// Blast radius (km) per megaton^(1/3).
pub const BLAST_COEFFICIENT_KM: f64 = 1.8;
pub const BLAST_ENERGY_EXPONENT: f64 = 1.0 / 3.0;
pub const THERMAL_TO_BLAST_RATIO: f64 = 0.3;

// ── Seismic ─────────────────────────────────────────────────────────────────
/// Gutenberg-Richter energy relation: M = (log10(E) - 4.8) / 1.5
pub const SEISMIC_LOG_OFFSET: f64 = 4.8;
pub const SEISMIC_LOG_DIVISOR: f64 = 1.5;

// ── Tsunami ─────────────────────────────────────────────────────────────────
pub const TSUNAMI_COEFFICIENT_M: f64 = 100.0;
pub const TSUNAMI_REFERENCE_ENERGY_J: f64 = 1e15;
pub const TSUNAMI_ENERGY_EXPONENT: f64 = 0.3;
/// Deep-ocean tsunami propagation speed (m/s).
pub const TSUNAMI_DEEP_OCEAN_SPEED_M_S: f64 = 200.0;
/// Typical coastal slope used for inundation distance.
pub const COASTAL_SLOPE: f64 = 0.01;

// ── Atmosphere ──────────────────────────────────────────────────────────────
/// Dust lofted per megaton (metric tons).
pub const DUST_TONS_PER_MEGATON: f64 = 1000.0;
pub const ATMOSPHERIC_THRESHOLD_MT: f64 = 1.0;
pub const MAX_COOLING_C: f64 = 10.0;
pub const OZONE_DEPLETION_THRESHOLD_MT: f64 = 10.0;
pub const ACID_RAIN_THRESHOLD_MT: f64 = 5.0;
pub const IMPACT_WINTER_THRESHOLD_MT: f64 = 1000.0;

// ── Severity tiers ──────────────────────────────────────────────────────────
pub const CATASTROPHIC_DIAMETER_KM: f64 = 10.0;
pub const CATASTROPHIC_ENERGY_MT: f64 = 10_000.0;
pub const REGIONAL_DIAMETER_KM: f64 = 1.0;
pub const REGIONAL_ENERGY_MT: f64 = 100.0;

// ── Mitigation ──────────────────────────────────────────────────────────────
/// Closing speed of a kinetic impactor (km/s).
pub const KINETIC_IMPACTOR_VELOCITY_KM_S: f64 = 12.0;
/// Fraction of impactor momentum delivered to the asteroid.
pub const DEFLECTION_EFFICIENCY: f64 = 0.5;
/// Station-keeping distance of a gravity tractor (m).
pub const GRAVITY_TRACTOR_DISTANCE_M: f64 = 100.0;
/// Heliocentric speed of Earth used for approach velocity (km/s).
pub const EARTH_ORBITAL_VELOCITY_KM_S: f64 = 30.0;
