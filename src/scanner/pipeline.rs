//! Multi-graph scan driver.
//!
//! Coordinates a scan across symbol graph files:
//! 1. Parse each graph file (serde_json)
//! 2. Scan every declaration carrying the module annotation
//! 3. Collect per-member skip diagnostics for reporting
//!
//! Graph files are independent, so they are scanned in parallel with rayon;
//! each `scan_module` call reads the graph immutably and builds a fresh
//! module record.

use std::fs;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::debug;

use super::module_scanner::{ModuleScanner, SkipReason};
use crate::metadata::ModuleIndex;
use crate::symbols::{Introspection, SymbolGraph, SymbolRef};

/// Scan configuration resolved from config file and CLI overrides.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Annotation name marking a module declaration.
    pub module_annotation: String,
    /// Scope-marker annotation names recognized in addition to the built-in
    /// keyword set.
    pub extra_scope_annotations: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            module_annotation: "Module".to_string(),
            extra_scope_annotations: vec!["Scoped".to_string()],
        }
    }
}

/// A member that matched the keyword filter but produced no definition.
#[derive(Debug, Clone)]
pub struct ScanDiagnostic {
    pub file_path: String,
    pub module: String,
    pub member: String,
    pub reason: SkipReason,
}

/// Scan results for one graph file.
#[derive(Debug)]
pub struct GraphScan {
    pub file_path: String,
    /// Modules in declaration order, each paired with its effective package.
    pub indexes: Vec<ModuleIndex>,
    pub diagnostics: Vec<ScanDiagnostic>,
}

/// Scan all graph files. Results keep the input file order.
pub fn run(files: &[String], options: &ScanOptions) -> Result<Vec<GraphScan>> {
    files
        .par_iter()
        .map(|file_path| scan_graph_file(file_path, options))
        .collect()
}

/// Load and scan one graph file.
pub fn scan_graph_file(file_path: &str, options: &ScanOptions) -> Result<GraphScan> {
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read symbol graph: {}", file_path))?;
    let graph = SymbolGraph::from_json(&content)
        .with_context(|| format!("Failed to parse symbol graph: {}", file_path))?
        .with_extra_scope_annotations(options.extra_scope_annotations.clone());
    Ok(scan_graph(&graph, options, file_path))
}

/// Scan every module-annotated declaration in an already-loaded graph.
pub fn scan_graph(graph: &SymbolGraph, options: &ScanOptions, file_path: &str) -> GraphScan {
    let scanner = ModuleScanner::new(graph);
    let mut indexes = Vec::new();
    let mut diagnostics = Vec::new();

    for declaration in graph.declaration_ids() {
        let is_module = graph
            .annotations(SymbolRef::Declaration(declaration))
            .iter()
            .any(|node| node.name == options.module_annotation);
        if !is_module {
            continue;
        }

        let scan = scanner.scan_module(declaration);
        for skipped in &scan.skipped {
            diagnostics.push(ScanDiagnostic {
                file_path: file_path.to_string(),
                module: scan.index.module.name.clone(),
                member: graph.member_name(skipped.member),
                reason: skipped.reason,
            });
        }
        indexes.push(scan.index);
    }

    debug!(
        "graph({file_path}) -> {} modules, {} diagnostics",
        indexes.len(),
        diagnostics.len()
    );
    GraphScan {
        file_path: file_path.to_string(),
        indexes,
        diagnostics,
    }
}
