//! Modscan - dependency-injection module metadata scanner
//!
//! Modscan is a CLI tool and library that scans annotated declarations in
//! exported compiler symbol graphs and extracts dependency-injection module
//! metadata (definitions, bindings, scope assignments) for a downstream code
//! emitter.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `metadata`: Output data model consumed by the emitter
//! - `scanner`: Metadata extraction engine
//! - `symbols`: Symbol introspection trait and in-memory symbol graph

pub mod cli;
pub mod config;
pub mod metadata;
pub mod scanner;
pub mod symbols;
