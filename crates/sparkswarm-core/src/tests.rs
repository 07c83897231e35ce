//! Tests for core types, settings, and serialization round-trips.

use crate::components::Projectile;
use crate::config::{SimConfig, SimSettings};
use crate::constants::{DT, TICK_RATE};
use crate::enums::{ArenaKind, CastShape};
use crate::state::SimSnapshot;
use crate::types::{is_unlimited, SimTime, UNLIMITED_DURATION};

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..TICK_RATE {
        time.advance();
    }
    assert_eq!(time.tick, TICK_RATE as u64);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
}

#[test]
fn test_unlimited_duration_sentinel() {
    assert!(is_unlimited(UNLIMITED_DURATION));
    assert!(is_unlimited(-0.5));
    assert!(!is_unlimited(0.0));
    assert!(!is_unlimited(2.0));

    let settings = SimSettings::default().with_unlimited_duration();
    assert!(is_unlimited(settings.duration_secs));
}

#[test]
fn test_projectile_expiry_boundary() {
    let proj = Projectile {
        cast_id: 0,
        heading: 0.0,
        speed: 100.0,
        spawned_at: 1.0,
        duration_secs: 2.0,
        pierce_remaining: 0,
        fork_remaining: 0,
        chain_remaining: 0,
        split_capacity: 0,
        has_split: false,
    };
    // Removal is strictly-greater-than, so age == duration survives.
    assert!(!proj.is_expired(3.0));
    assert!(proj.is_expired(3.0 + DT));

    let immortal = Projectile {
        duration_secs: UNLIMITED_DURATION,
        ..proj
    };
    assert!(!immortal.is_expired(1e9));
}

#[test]
fn test_projectile_velocity_from_heading() {
    let proj = Projectile {
        cast_id: 0,
        heading: std::f64::consts::FRAC_PI_2,
        speed: 10.0,
        spawned_at: 0.0,
        duration_secs: UNLIMITED_DURATION,
        pierce_remaining: 0,
        fork_remaining: 0,
        chain_remaining: 0,
        split_capacity: 0,
        has_split: false,
    };
    let v = proj.velocity();
    assert!(v.x.abs() < 1e-9);
    assert!((v.y - 10.0).abs() < 1e-9);
}

#[test]
fn test_cast_interval() {
    let mut settings = SimSettings {
        cast_rate: 4.0,
        ..Default::default()
    };
    assert_eq!(settings.cast_interval(), Some(0.25));

    settings.cast_rate = 0.0;
    assert_eq!(settings.cast_interval(), None);

    settings.cast_rate = -1.0;
    assert_eq!(settings.cast_interval(), None);
}

#[test]
fn test_settings_serde_round_trip() {
    let settings = SimSettings {
        arena: ArenaKind::Corridor,
        cast_shape: CastShape::Cone,
        pierce: 3,
        fork: 2,
        split: 5,
        fork_extra_chance_pct: 40.0,
        ..Default::default()
    };
    let json = serde_json::to_string(&settings).unwrap();
    let back: SimSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(settings, back);
}

#[test]
fn test_settings_partial_json_uses_defaults() {
    // Hosts may supply sparse settings files; missing fields default.
    let settings: SimSettings = serde_json::from_str(r#"{"pierce": 2, "arena": "square"}"#).unwrap();
    assert_eq!(settings.pierce, 2);
    assert_eq!(settings.arena, ArenaKind::Square);
    assert_eq!(settings.projectile_count, SimSettings::default().projectile_count);
}

#[test]
fn test_snapshot_serializes() {
    let snapshot = SimSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("total_hits"));
}

#[test]
fn test_sim_config_default_canvas() {
    let config = SimConfig::default();
    assert!(config.canvas_width > 0.0);
    assert!(config.canvas_height > 0.0);
    assert_eq!(config.seed, 42);
}
