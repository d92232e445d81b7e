//! Integration tests for catalog parsing and conversion.

use asteroid_impact::catalog::{catalog_or_fallback, fallback_catalog, find_known, parse_catalog};
use asteroid_impact::config::ScalingConfig;
use asteroid_impact::impact::{Severity, assess_impact};
use asteroid_impact::trajectory::generate_orbit;
use asteroid_impact::types::{Composition, ImpactParameters};

const NEO_FEED: &str = r#"{
  "asteroids": [
    {
      "designation": "2023 DW",
      "diameter_km": 0.05,
      "velocity_km_s": 24.6,
      "is_potentially_hazardous": false,
      "absolute_magnitude": 24.3,
      "spectral_type": "unknown"
    },
    {
      "designation": "29075",
      "name": "1950 DA",
      "diameter_km": 1.3,
      "velocity_km_s": 15.0,
      "is_potentially_hazardous": true,
      "spectral_type": "M",
      "orbital_elements": {
        "semi_major_axis": 1.698,
        "eccentricity": 0.508,
        "inclination": 12.17,
        "argument_of_perihelion": 224.5,
        "longitude_of_ascending_node": 356.7,
        "mean_anomaly": 40.0
      }
    }
  ]
}"#;

#[test]
fn test_feed_converts_to_parameters_and_orbits() {
    let entries = parse_catalog(NEO_FEED).unwrap();
    assert_eq!(entries.len(), 2);

    let small = entries[0].to_parameters().unwrap();
    assert_eq!(small.composition, Composition::Rock);

    let da = &entries[1];
    assert_eq!(da.display_name(), "1950 DA");
    let params = da.to_parameters().unwrap();
    assert_eq!(params.composition, Composition::Iron);
    assert_eq!(params.density_kg_m3, 8000.0);

    let elements = da.to_orbital_elements().unwrap();
    assert_eq!(elements.eccentricity, 0.508);
    assert_eq!(generate_orbit(&elements, 64).unwrap().count(), 65);
}

#[test]
fn test_unbound_catalog_orbit_is_rejected() {
    let json = r#"[{"designation": "Oumuamua", "diameter_km": 0.1, "velocity_km_s": 26.0,
                    "orbital_elements": {"eccentricity": 1.2}}]"#;
    let entry = &parse_catalog(json).unwrap()[0];
    assert!(entry.to_parameters().is_ok());
    assert!(entry.to_orbital_elements().is_err());
}

#[test]
fn test_every_fallback_body_can_be_assessed() {
    let config = ScalingConfig::default();
    for entry in fallback_catalog() {
        let asteroid = entry.to_parameters().unwrap();
        let impact = ImpactParameters::head_on(&asteroid);
        let assessment = assess_impact(&asteroid, &impact, &config).unwrap();
        assert!(assessment.energy.tnt_equivalent_megatons > 0.0);
    }
}

#[test]
fn test_eros_is_catastrophic() {
    let eros = find_known("Eros").unwrap().to_entry();
    let asteroid = eros.to_parameters().unwrap();
    let impact = ImpactParameters::head_on(&asteroid);
    let assessment = assess_impact(&asteroid, &impact, &ScalingConfig::default()).unwrap();
    assert_eq!(assessment.severity, Severity::Catastrophic);
}

#[test]
fn test_unavailable_catalog_falls_back() {
    let entries = catalog_or_fallback(Some("<html>503 Service Unavailable</html>"));
    let names: Vec<&str> = entries.iter().map(|e| e.display_name()).collect();
    assert_eq!(
        names,
        vec!["Bennu", "Apophis", "Didymos", "Ryugu", "Itokawa", "Eros"]
    );
}
