// ============================================================================
// Driver Module
// Line-oriented input processing on top of the numeric core
// ============================================================================

mod line_processor;

pub use line_processor::{LineProcessor, ProcessSummary};
