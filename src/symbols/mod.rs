//! Read-only symbol introspection consumed by the scanner.
//!
//! The scanner never talks to a compiler frontend directly. It sees the
//! declaration tree through the `Introspection` trait: opaque handles for
//! declarations and members, plus plain value records for annotations and
//! parameters. Hosts adapt their own symbol API behind this trait; the
//! in-memory `SymbolGraph` in `graph` is the implementation used by the CLI
//! and by tests.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::metadata::{DefinitionAnnotation, TypeRef};

pub mod graph;

pub use graph::SymbolGraph;

/// Handle to a class-like declaration known to the introspection host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclarationId(pub usize);

/// Handle to a function-like member of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId {
    pub declaration: DeclarationId,
    pub index: usize,
}

/// A declaration or one of its members, for operations that apply to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolRef {
    Declaration(DeclarationId),
    Member(MemberId),
}

/// Kind of a class-like declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    #[default]
    Class,
    Object,
}

/// A single annotation argument value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnnotationValue {
    #[serde(rename = "string")]
    Str(String),
    Bool(bool),
    Type(TypeRef),
    Types(Vec<TypeRef>),
}

/// An annotation attached to a declaration, member, or parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationNode {
    pub name: String,
    #[serde(default)]
    pub arguments: BTreeMap<String, AnnotationValue>,
}

impl AnnotationNode {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: BTreeMap::new(),
        }
    }

    /// String argument by name; `None` if absent or not a string.
    pub fn string_arg(&self, name: &str) -> Option<&str> {
        match self.arguments.get(name) {
            Some(AnnotationValue::Str(value)) => Some(value),
            _ => None,
        }
    }

    /// Boolean argument by name; `None` if absent or not a boolean.
    pub fn bool_arg(&self, name: &str) -> Option<bool> {
        match self.arguments.get(name) {
            Some(AnnotationValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Type argument by name; `None` if absent or not a type.
    pub fn type_arg(&self, name: &str) -> Option<&TypeRef> {
        match self.arguments.get(name) {
            Some(AnnotationValue::Type(value)) => Some(value),
            _ => None,
        }
    }

    /// Type-list argument by name; `None` if absent or not a type list.
    pub fn type_list_arg(&self, name: &str) -> Option<&[TypeRef]> {
        match self.arguments.get(name) {
            Some(AnnotationValue::Types(values)) => Some(values),
            _ => None,
        }
    }
}

/// A formal parameter of a function-like member.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterNode {
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: TypeRef,
    #[serde(default)]
    pub annotations: Vec<AnnotationNode>,
}

/// Read-only view of an already-materialized symbol tree.
///
/// Every method is a pure, total lookup over resolved symbol data: absence
/// of expected data is reported through empty strings, empty sequences, or
/// `None`, never through errors.
pub trait Introspection {
    /// Package of the symbol's source location; empty string if unknown.
    fn resolve_namespace(&self, symbol: SymbolRef) -> String;

    /// Declared name of the declaration.
    fn display_name(&self, declaration: DeclarationId) -> String;

    fn declaration_kind(&self, declaration: DeclarationId) -> DeclarationKind;

    /// Annotations attached to the symbol, in declaration order.
    fn annotations(&self, symbol: SymbolRef) -> Vec<AnnotationNode>;

    /// Function-like members of the declaration, in enumeration order.
    fn members(&self, declaration: DeclarationId, include_inherited: bool) -> Vec<MemberId>;

    fn member_name(&self, member: MemberId) -> String;

    /// Resolved return type of the member; `None` when resolution fails.
    fn return_type_name(&self, member: MemberId) -> Option<TypeRef>;

    /// Formal parameters of the member, in declared order.
    fn parameters(&self, member: MemberId) -> Vec<ParameterNode>;

    /// Whether `name` is a recognized definition-keyword annotation. The
    /// default covers the built-in set; hosts extend it with configured
    /// extra scope-marker names.
    fn is_keyword_annotation(&self, name: &str) -> bool {
        DefinitionAnnotation::from_name(name).is_some()
    }
}
