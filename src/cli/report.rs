//! Report formatting and printing utilities.
//!
//! Displays scan results in a cargo-style text format, or as JSON when the
//! emitter stage is the consumer. Separate from core logic to allow modscan
//! to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary, ScanSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::metadata::{Definition, ModuleIndex};
use crate::scanner::ScanDiagnostic;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout.
pub fn print(result: &CommandResult) {
    let _ = print_to(result, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) -> io::Result<()> {
    match &result.summary {
        CommandSummary::Scan(summary) => print_scan(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) -> io::Result<()> {
    if summary.created {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        )?;
    }
    Ok(())
}

fn print_scan<W: Write>(summary: &ScanSummary, writer: &mut W) -> io::Result<()> {
    if summary.json {
        let json = serde_json::to_string_pretty(&summary.modules).map_err(io::Error::other)?;
        return writeln!(writer, "{}", json);
    }

    for index in &summary.modules {
        print_module(index, writer)?;
    }
    for diagnostic in &summary.diagnostics {
        print_diagnostic(diagnostic, writer)?;
    }
    print_summary(summary, writer)
}

fn print_module<W: Write>(index: &ModuleIndex, writer: &mut W) -> io::Result<()> {
    let module = &index.module;
    writeln!(
        writer,
        "{} {}",
        "module".bold(),
        qualified_name(&module.package, &module.name).bold()
    )?;
    if module.component_scan.is_some() {
        // The effective package already resolves an empty target to the
        // module's own package.
        writeln!(writer, "  componentScan -> {}", index.package)?;
    }

    let width = keyword_column_width(&module.definitions);
    for definition in &module.definitions {
        print_definition(definition, width, writer)?;
    }
    Ok(())
}

fn print_definition<W: Write>(
    definition: &Definition,
    keyword_width: usize,
    writer: &mut W,
) -> io::Result<()> {
    let keyword = definition.keyword.to_string();
    let padding = " ".repeat(keyword_width.saturating_sub(keyword.width()));
    let mut line = format!(
        "  {}{} {}",
        keyword.cyan(),
        padding,
        definition.function_name
    );
    if let Some(qualifier) = &definition.qualifier {
        line.push_str(&format!(" ({})", qualifier));
    }
    if !definition.bindings.is_empty() {
        let names: Vec<&str> = definition
            .bindings
            .iter()
            .map(|binding| binding.name())
            .collect();
        line.push_str(&format!(" binds {}", names.join(", ")));
    }
    if let Some(scope) = &definition.scope {
        line.push_str(&format!(" in scope {}", scope));
    }
    writeln!(writer, "{}", line)
}

fn print_diagnostic<W: Write>(diagnostic: &ScanDiagnostic, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{} {}.{} skipped: {} ({})",
        "warning:".bold().yellow(),
        diagnostic.module,
        diagnostic.member,
        diagnostic.reason,
        diagnostic.file_path
    )
}

fn print_summary<W: Write>(summary: &ScanSummary, writer: &mut W) -> io::Result<()> {
    let definition_count: usize = summary
        .modules
        .iter()
        .map(|index| index.module.definitions.len())
        .sum();
    let message = format!(
        "Scanned {} graph {} - {} {}, {} {}",
        summary.graph_files_scanned,
        if summary.graph_files_scanned == 1 {
            "file"
        } else {
            "files"
        },
        summary.modules.len(),
        if summary.modules.len() == 1 {
            "module"
        } else {
            "modules"
        },
        definition_count,
        if definition_count == 1 {
            "definition"
        } else {
            "definitions"
        },
    );

    if summary.diagnostics.is_empty() {
        writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green())
    } else {
        writeln!(
            writer,
            "{} {} ({} skipped)",
            FAILURE_MARK.yellow(),
            message,
            summary.diagnostics.len()
        )
    }
}

/// Fully qualified display name; just the name when the package is unknown.
fn qualified_name(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    }
}

fn keyword_column_width(definitions: &[Definition]) -> usize {
    definitions
        .iter()
        .map(|definition| definition.keyword.to_string().width())
        .max()
        .unwrap_or(0)
}
