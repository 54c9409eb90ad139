//! Input/output operations, configuration and error handling

/// Command-line interface and batch corpus processing
pub mod cli;
/// Analysis defaults and report file names
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Progress display for batch runs
pub mod progress;
/// CSV and JSON report writing
pub mod report;
