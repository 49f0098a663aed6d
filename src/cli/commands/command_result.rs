use crate::metadata::ModuleIndex;
use crate::scanner::ScanDiagnostic;

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub graph_files_scanned: usize,
    /// Extracted modules across all graphs, in scan order.
    pub modules: Vec<ModuleIndex>,
    pub diagnostics: Vec<ScanDiagnostic>,
    /// Emit the metadata as JSON instead of the text report.
    pub json: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running modscan commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when warning_count > 0.
    pub exit_on_warnings: bool,
}
