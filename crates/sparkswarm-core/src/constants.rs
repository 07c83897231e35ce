//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 120;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Maximum wall-clock delta accepted per frame (seconds).
/// Excess time from a stalled host is dropped, not queued.
pub const MAX_FRAME_DT: f64 = 0.05;

// --- Entities ---

/// Collision radius of a projectile (world units).
pub const PROJECTILE_RADIUS: f64 = 4.0;

/// Display/drag radius of the caster.
pub const CASTER_RADIUS: f64 = 12.0;

/// Default target radius.
pub const DEFAULT_TARGET_RADIUS: f64 = 30.0;

/// Base projectile speed at multiplier 1.0 (world units per second).
pub const BASE_PROJECTILE_SPEED: f64 = 160.0;

// --- Continuous collision detection ---

/// Maximum distance a projectile may cover in one substep (world units).
/// The tick is subdivided until every substep is under this bound.
pub const CCD_MAX_STEP: f64 = 4.0;

/// Distance past the target surface a piercing projectile is nudged
/// along the outward normal, to avoid immediate re-collision.
pub const PIERCE_EXIT_EPS: f64 = 0.5;

// --- Hit resolution ---

/// Per-(cast, target) cooldown between registered hits (seconds).
pub const HIT_COOLDOWN_SECS: f64 = 0.66;

/// Fork branch angle off the current velocity direction (radians, 60 degrees).
pub const FORK_ANGLE: f64 = std::f64::consts::PI / 3.0;

// --- Wander model ---

/// Poisson arrival rate of discrete heading-change events (events/sec).
pub const WANDER_EVENT_RATE: f64 = 3.0;

/// Continuous micro-jitter sigma (radians per sqrt-second).
/// Scaled by sqrt(dt) so angular variance accumulates linearly in time.
pub const WANDER_MICRO_SIGMA: f64 = 0.35;

/// Probability a heading-change event is in the large regime.
pub const WANDER_P_LARGE: f64 = 0.25;

/// Small-regime heading delta sigma (radians).
pub const WANDER_SMALL_SIGMA: f64 = 0.25;

/// Small-regime heading delta cap (radians).
pub const WANDER_SMALL_MAX: f64 = 0.6;

/// Large-regime heading delta sigma (radians).
pub const WANDER_LARGE_SIGMA: f64 = 1.1;

/// Large-regime heading delta cap (radians).
pub const WANDER_LARGE_MAX: f64 = 2.4;

/// Probability that consuming a base event enqueues a correction burst.
pub const WANDER_P_BURST: f64 = 0.3;

/// Burst event offset range after the triggering event (seconds).
pub const WANDER_BURST_MIN_OFFSET: f64 = 0.02;
pub const WANDER_BURST_MAX_OFFSET: f64 = 0.08;

/// Rejection-sampling attempts for a truncated-normal draw before clamping.
pub const WANDER_TRUNC_TRIES: u32 = 8;

// --- Metrics ---

/// Trailing window for hit-rate and DPS (seconds).
pub const METRICS_WINDOW_SECS: f64 = 5.0;

// --- Arena geometry ---

/// Default canvas size the arenas are built against (world units).
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Margin between the canvas edge and the arena boundary.
pub const ARENA_MARGIN: f64 = 20.0;

/// Corridor width of the T-junction arena as a fraction of the
/// smaller canvas dimension.
pub const CORRIDOR_WIDTH_FRACTION: f64 = 0.28;
