//! In-memory symbol graph loaded from JSON.
//!
//! A `SymbolGraph` is the materialized declaration tree a compiler frontend
//! exports for scanning: declarations with annotations, their function-like
//! members, and each member's parameters. It implements `Introspection`
//! directly, so the scanner runs against it with no frontend dependency.

use serde::Deserialize;

use super::{
    AnnotationNode, DeclarationId, DeclarationKind, Introspection, MemberId, ParameterNode,
    SymbolRef,
};
use crate::metadata::{DefinitionAnnotation, TypeRef};

/// A class-like declaration in the graph.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationNode {
    pub name: String,
    /// Package of the declaration's source file; empty if unknown.
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub kind: DeclarationKind,
    #[serde(default)]
    pub annotations: Vec<AnnotationNode>,
    /// All reachable function-like members, inherited ones included and
    /// flagged as such.
    #[serde(default)]
    pub members: Vec<MemberNode>,
}

/// A function-like member of a declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberNode {
    pub name: String,
    /// Resolved return type; absent when the frontend could not resolve it.
    #[serde(default)]
    pub return_type: Option<TypeRef>,
    /// Package of the member's own source file, when it differs from the
    /// declaration's (inherited members).
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub annotations: Vec<AnnotationNode>,
    #[serde(default)]
    pub parameters: Vec<ParameterNode>,
    #[serde(default)]
    pub inherited: bool,
}

/// An already-materialized symbol tree, deserializable from the JSON graphs
/// that compiler frontends export.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolGraph {
    #[serde(default)]
    declarations: Vec<DeclarationNode>,
    /// Configured scope-marker annotation names recognized in addition to
    /// the built-in keyword set. Not part of the graph format.
    #[serde(skip)]
    extra_scope_annotations: Vec<String>,
}

impl SymbolGraph {
    pub fn new(declarations: Vec<DeclarationNode>) -> Self {
        Self {
            declarations,
            extra_scope_annotations: Vec::new(),
        }
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn with_extra_scope_annotations(mut self, names: Vec<String>) -> Self {
        self.extra_scope_annotations = names;
        self
    }

    pub fn declaration_ids(&self) -> impl Iterator<Item = DeclarationId> + '_ {
        (0..self.declarations.len()).map(DeclarationId)
    }

    pub fn declaration_count(&self) -> usize {
        self.declarations.len()
    }

    fn declaration(&self, id: DeclarationId) -> Option<&DeclarationNode> {
        self.declarations.get(id.0)
    }

    fn member(&self, id: MemberId) -> Option<&MemberNode> {
        self.declaration(id.declaration)
            .and_then(|decl| decl.members.get(id.index))
    }
}

impl Introspection for SymbolGraph {
    fn resolve_namespace(&self, symbol: SymbolRef) -> String {
        match symbol {
            SymbolRef::Declaration(id) => self
                .declaration(id)
                .map(|decl| decl.package.clone())
                .unwrap_or_default(),
            SymbolRef::Member(id) => {
                let Some(member) = self.member(id) else {
                    return String::new();
                };
                // Inherited members may live in another file; fall back to
                // the declaring class's package otherwise.
                member.package.clone().unwrap_or_else(|| {
                    self.resolve_namespace(SymbolRef::Declaration(id.declaration))
                })
            }
        }
    }

    fn display_name(&self, declaration: DeclarationId) -> String {
        self.declaration(declaration)
            .map(|decl| decl.name.clone())
            .unwrap_or_default()
    }

    fn declaration_kind(&self, declaration: DeclarationId) -> DeclarationKind {
        self.declaration(declaration)
            .map(|decl| decl.kind)
            .unwrap_or_default()
    }

    fn annotations(&self, symbol: SymbolRef) -> Vec<AnnotationNode> {
        match symbol {
            SymbolRef::Declaration(id) => self
                .declaration(id)
                .map(|decl| decl.annotations.clone())
                .unwrap_or_default(),
            SymbolRef::Member(id) => self
                .member(id)
                .map(|member| member.annotations.clone())
                .unwrap_or_default(),
        }
    }

    fn members(&self, declaration: DeclarationId, include_inherited: bool) -> Vec<MemberId> {
        let Some(decl) = self.declaration(declaration) else {
            return Vec::new();
        };
        decl.members
            .iter()
            .enumerate()
            .filter(|(_, member)| include_inherited || !member.inherited)
            .map(|(index, _)| MemberId { declaration, index })
            .collect()
    }

    fn member_name(&self, member: MemberId) -> String {
        self.member(member)
            .map(|node| node.name.clone())
            .unwrap_or_default()
    }

    fn return_type_name(&self, member: MemberId) -> Option<TypeRef> {
        self.member(member).and_then(|node| node.return_type.clone())
    }

    fn parameters(&self, member: MemberId) -> Vec<ParameterNode> {
        self.member(member)
            .map(|node| node.parameters.clone())
            .unwrap_or_default()
    }

    fn is_keyword_annotation(&self, name: &str) -> bool {
        DefinitionAnnotation::from_name(name).is_some()
            || self.extra_scope_annotations.iter().any(|extra| extra == name)
    }
}
