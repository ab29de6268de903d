//! Application-wide constants.
//!
//! Scoring rule values and configuration paths used throughout scoretab.

// === Application Metadata ===

/// Application name (from Cargo.toml); doubles as the config subdirectory name.
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

// === Scoring Rule ===

/// Points awarded to the winner of a match.
pub const WIN_POINTS: u32 = 3;
/// Points awarded to both teams of a drawn match.
pub const DRAW_POINTS: u32 = 1;
/// Points awarded to the loser of a match.
pub const LOSS_POINTS: u32 = 0;

// === Path Configuration ===

/// Name of the configuration file inside the app config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
