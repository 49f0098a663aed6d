use std::env;

use anyhow::Result;

use super::{CommandResult, CommandSummary, ScanSummary};
use crate::cli::args::ScanCommand;
use crate::config::load_config;
use crate::scanner::{ScanOptions, graph_files, pipeline};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let cwd = env::current_dir()?;
    let config = load_config(&cwd)?.config;

    let graphs_root = cmd
        .args
        .common
        .graphs_root
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or(config.graphs_root);
    let options = ScanOptions {
        module_annotation: cmd
            .args
            .common
            .module_annotation
            .unwrap_or(config.module_annotation),
        extra_scope_annotations: config.extra_scope_annotations,
    };

    // Explicit file arguments bypass discovery.
    let files: Vec<String> = if cmd.files.is_empty() {
        graph_files::scan_graph_files(
            &graphs_root,
            &config.includes,
            &config.ignores,
            cmd.args.common.verbose,
        )
        .files
    } else {
        cmd.files
            .iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect()
    };

    let scans = pipeline::run(&files, &options)?;

    let graph_files_scanned = scans.len();
    let mut modules = Vec::new();
    let mut diagnostics = Vec::new();
    for graph_scan in scans {
        modules.extend(graph_scan.indexes);
        diagnostics.extend(graph_scan.diagnostics);
    }

    let warning_count = diagnostics.len();
    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            graph_files_scanned,
            modules,
            diagnostics,
            json: cmd.args.json,
        }),
        warning_count,
        exit_on_warnings: cmd.args.deny_warnings,
    })
}
