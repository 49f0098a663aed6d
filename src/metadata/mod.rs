//! Module metadata produced by the scanner.
//!
//! This module defines the output data model consumed by a downstream code
//! emitter:
//!
//! - `Module`: one scanned module declaration with its definitions
//! - `Definition`: one provider entry (factory function + lifecycle keyword)
//! - `ModuleIndex`: a module paired with its effective package
//! - `annotation`: definition keyword and scope descriptor types
//!
//! All types are plain value records. A `Module` owns its definitions;
//! definitions carry no back-reference to their module.

use serde::{Deserialize, Serialize};

pub mod annotation;

pub use annotation::{DefinitionAnnotation, ScopeDescriptor};

/// A type reference by declared name, e.g. `Repository`.
///
/// The scanner never resolves types itself; it carries the names the
/// introspection layer reports.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(pub String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of the scanned module declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleKind {
    Class,
    Object,
}

/// Component-scan directive attached to a module declaration.
///
/// The target package is used by the emitter to pull in externally-discovered
/// annotated classes. An empty package means "scan the module's own package".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScan {
    pub package: String,
}

/// One scanned module declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Package of the declaration's source location; empty if unknown.
    pub package: String,
    /// Declared name of the module class/object.
    pub name: String,
    pub kind: ModuleKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_scan: Option<ComponentScan>,
    /// Definitions in member enumeration order.
    pub definitions: Vec<Definition>,
}

/// A constructor parameter of a definition function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterRef {
    pub name: String,
    pub type_name: TypeRef,
    /// Present when the parameter itself is annotated for injection by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
}

/// One dependency-injection provider entry: a factory function plus its
/// lifecycle keyword and type bindings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    /// Package of the defining function's source location.
    pub package: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
    pub keyword: DefinitionAnnotation,
    /// Only meaningful for `Single` definitions; absent for every other
    /// keyword (a `Factory` is never "not created at start", the field
    /// simply does not apply).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_created_at_start: Option<bool>,
    pub function_name: String,
    /// Formal parameters in declared order.
    pub parameters: Vec<ParameterRef>,
    /// Supertypes/interfaces this instance satisfies. Duplicates are kept.
    pub bindings: Vec<TypeRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<ScopeDescriptor>,
}

/// A module paired with its effective package.
///
/// The effective package is where the emitter places generated code: the
/// component-scan target when present and non-empty, else the module's own
/// package.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleIndex {
    pub package: String,
    pub module: Module,
}

impl ModuleIndex {
    pub fn new(module: Module) -> Self {
        let package = match &module.component_scan {
            Some(scan) if !scan.package.is_empty() => scan.package.clone(),
            _ => module.package.clone(),
        };
        Self { package, module }
    }
}
