//! Module metadata extraction.
//!
//! ## Module Structure
//!
//! - `module_scanner`: single-declaration scan (the core algorithm)
//! - `pipeline`: multi-graph driver with skip diagnostics
//! - `graph_files`: graph file discovery under the configured root

pub mod graph_files;
pub mod module_scanner;
pub mod pipeline;

pub use module_scanner::{ModuleScan, ModuleScanner, SkipReason, SkippedMember};
pub use pipeline::{GraphScan, ScanDiagnostic, ScanOptions};
