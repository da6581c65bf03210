//! Input/output: errors, configuration, palettes, rendering and the CLI

/// Command-line parsing and run orchestration
pub mod cli;
/// Defaults, limits and run configuration
pub mod configuration;
/// Error taxonomy shared by the crate
pub mod error;
/// PNG rendering of colored tilings
pub mod image;
/// Subscriber setup for structured logging
pub mod logging;
/// Color palettes for finished tilings
pub mod palette;
/// Terminal progress reporting
pub mod progress;
/// Animated replay of the subdivision
pub mod visualization;
