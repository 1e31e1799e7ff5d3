pub mod export;
pub mod logging;
pub mod runner;
pub mod summary;

/// Longest run the demo page offers.
pub const MAX_DEMO_STEPS: u32 = 100;
