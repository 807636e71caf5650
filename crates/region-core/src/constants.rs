// Interaction and readout tuning shared by the core and the web front-end.

// Size readout ("12.5% x 40%")
pub const SIZE_READOUT_DECIMALS: i32 = 2;
pub const PERCENT_SCALE: f64 = 100.0;

// Normalized space bounds
pub const UV_MIN: f64 = 0.0;
pub const UV_MAX: f64 = 1.0;

// Most setups carry a handful of lights; previews beyond this spill to the heap
pub const PREVIEW_INLINE_CAPACITY: usize = 8;
