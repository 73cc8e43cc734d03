// ============================================================================
// Domain Models Module
// Configuration values shared by the driver and binary
// ============================================================================

pub mod config;

pub use config::{DriverConfig, EchoMode, DEFAULT_ADDEND};
