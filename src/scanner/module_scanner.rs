//! Module declaration scanner.
//!
//! Walks one module-annotated declaration through the `Introspection`
//! capability and produces its `Module` metadata: component-scan directive,
//! then one `Definition` per keyword-annotated member function. The scan is
//! a single deterministic pass; missing symbol data degrades to skipping the
//! member, never to an error.

use tracing::debug;

use crate::metadata::{
    ComponentScan, Definition, DefinitionAnnotation, Module, ModuleIndex, ModuleKind, ParameterRef,
    ScopeDescriptor, TypeRef,
};
use crate::symbols::{
    AnnotationNode, DeclarationId, DeclarationKind, Introspection, MemberId, ParameterNode,
    SymbolRef,
};

/// Annotation marking a component-scan directive on a module declaration.
pub const COMPONENT_SCAN_ANNOTATION: &str = "ComponentScan";

/// Annotation carrying a string qualifier on a definition function or on a
/// constructor parameter.
pub const NAMED_ANNOTATION: &str = "Named";

/// Why an annotated member produced no definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The member's return type could not be resolved (the primary skip
    /// path, not an error).
    UnresolvableReturnType,
    /// No applicable definition keyword. Reachable when a member carries
    /// only a standalone scope-marker annotation.
    NoKeywordMatched,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::UnresolvableReturnType => write!(f, "unresolvable return type"),
            SkipReason::NoKeywordMatched => write!(f, "no applicable definition keyword"),
        }
    }
}

/// A member that matched the keyword filter but yielded no definition.
#[derive(Debug, Clone, Copy)]
pub struct SkippedMember {
    pub member: MemberId,
    pub reason: SkipReason,
}

/// Result of scanning one module declaration.
#[derive(Debug)]
pub struct ModuleScan {
    pub index: ModuleIndex,
    /// Skipped members, for diagnostics one layer up. The scanner itself
    /// only logs them.
    pub skipped: Vec<SkippedMember>,
}

/// Scans module declarations into metadata records.
///
/// Holds only the introspection capability; every scan reads the symbol
/// tree immutably and builds a fresh `Module`, so scanning different
/// declarations is independent.
pub struct ModuleScanner<'a> {
    introspection: &'a dyn Introspection,
}

impl<'a> ModuleScanner<'a> {
    pub fn new(introspection: &'a dyn Introspection) -> Self {
        Self { introspection }
    }

    /// Scan one module declaration into its metadata record.
    pub fn scan_module(&self, declaration: DeclarationId) -> ModuleScan {
        let intr = self.introspection;
        let name = intr.display_name(declaration);
        debug!("module({name}) -> scan");
        let package = intr.resolve_namespace(SymbolRef::Declaration(declaration));
        debug!("module({name}) -> package: {package}");

        let component_scan = self.component_scan(declaration);
        debug!("module({name}) -> componentScan={component_scan:?}");

        let kind = match intr.declaration_kind(declaration) {
            DeclarationKind::Class => ModuleKind::Class,
            DeclarationKind::Object => ModuleKind::Object,
        };

        let annotated = self.annotated_members(declaration);
        debug!("module({name}) -> found {} annotated members", annotated.len());

        let mut definitions = Vec::new();
        let mut skipped = Vec::new();
        for member in annotated {
            match self.try_definition(member) {
                Ok(definition) => definitions.push(definition),
                Err(reason) => skipped.push(SkippedMember { member, reason }),
            }
        }

        let module = Module {
            package,
            name,
            kind,
            component_scan,
            definitions,
        };
        ModuleScan {
            index: ModuleIndex::new(module),
            skipped,
        }
    }

    /// Member functions (inherited included) carrying at least one
    /// recognized keyword annotation, in enumeration order.
    pub fn annotated_members(&self, declaration: DeclarationId) -> Vec<MemberId> {
        let intr = self.introspection;
        intr.members(declaration, true)
            .into_iter()
            .filter(|member| {
                intr.annotations(SymbolRef::Member(*member))
                    .iter()
                    .any(|node| intr.is_keyword_annotation(&node.name))
            })
            .collect()
    }

    /// Scan one member function into a definition; `None` when the member
    /// yields nothing.
    pub fn scan_definition(&self, member: MemberId) -> Option<Definition> {
        self.try_definition(member).ok()
    }

    fn try_definition(&self, member: MemberId) -> Result<Definition, SkipReason> {
        let intr = self.introspection;
        let function_name = intr.member_name(member);
        let Some(returned_type) = intr.return_type_name(member) else {
            debug!("definition({function_name}) -> unresolvable return type, skipping");
            return Err(SkipReason::UnresolvableReturnType);
        };
        debug!("definition({function_name}) -> returns {returned_type}");

        let package = intr.resolve_namespace(SymbolRef::Member(member));
        let annotations = intr.annotations(SymbolRef::Member(member));
        let qualifier = resolve_string_qualifier(&annotations);
        let keywords = self.keyword_annotations(&annotations);

        // Scope wins ties regardless of enumeration order; otherwise the
        // first recognized annotation decides.
        let chosen = keywords
            .iter()
            .find(|(keyword, _)| keyword.is_scope())
            .or_else(|| keywords.first());
        let Some((keyword, node)) = chosen else {
            debug!("definition({function_name}) -> no keyword annotation matched, skipping");
            return Err(SkipReason::NoKeywordMatched);
        };

        self.declare_definition(
            keyword,
            node,
            &keywords,
            package,
            qualifier,
            function_name.clone(),
            member,
        )
        .ok_or_else(|| {
            debug!("definition({function_name}) -> no applicable keyword, skipping");
            SkipReason::NoKeywordMatched
        })
    }

    /// Recognized annotations on a member, classified and in enumeration
    /// order. Names passing the recognition predicate without being a
    /// built-in keyword are configured extra scope markers.
    fn keyword_annotations<'n>(
        &self,
        annotations: &'n [AnnotationNode],
    ) -> Vec<(DefinitionAnnotation, &'n AnnotationNode)> {
        annotations
            .iter()
            .filter(|node| self.introspection.is_keyword_annotation(&node.name))
            .map(|node| {
                let keyword = DefinitionAnnotation::from_name(&node.name)
                    .unwrap_or_else(|| DefinitionAnnotation::ExtraScope(node.name.clone()));
                (keyword, node)
            })
            .collect()
    }

    #[allow(clippy::too_many_arguments)]
    fn declare_definition(
        &self,
        keyword: &DefinitionAnnotation,
        node: &AnnotationNode,
        keywords: &[(DefinitionAnnotation, &AnnotationNode)],
        package: String,
        qualifier: Option<String>,
        function_name: String,
        member: MemberId,
    ) -> Option<Definition> {
        let bindings: Vec<TypeRef> = node
            .type_list_arg("binds")
            .map(<[TypeRef]>::to_vec)
            .unwrap_or_default();
        let parameters = constructor_parameters(self.introspection.parameters(member));
        debug!(
            "definition({function_name}) -> kind {keyword}, binds={}, params={}",
            bindings.len(),
            parameters.len()
        );

        let base = Definition {
            package,
            qualifier,
            keyword: keyword.clone(),
            is_created_at_start: None,
            function_name,
            parameters,
            bindings,
            scope: None,
        };

        match keyword {
            DefinitionAnnotation::Single => {
                let created_at_start = node.bool_arg("createdAtStart").unwrap_or(false);
                Some(Definition {
                    is_created_at_start: Some(created_at_start),
                    ..base
                })
            }
            DefinitionAnnotation::Factory | DefinitionAnnotation::ViewModel => Some(base),
            DefinitionAnnotation::Scope => {
                let scope = scope_descriptor(node);
                // A co-present ViewModel-style annotation overrides the
                // keyword; the scope itself still comes from the Scope
                // annotation's arguments.
                let extra = keywords
                    .iter()
                    .map(|(keyword, _)| keyword)
                    .find(|keyword| keyword.is_extra_scope())
                    .cloned();
                Some(Definition {
                    keyword: extra.unwrap_or(DefinitionAnnotation::Scope),
                    scope,
                    ..base
                })
            }
            // A standalone scope marker has no meaning without a Scope
            // annotation on the same member.
            DefinitionAnnotation::ExtraScope(_) => None,
        }
    }

    fn component_scan(&self, declaration: DeclarationId) -> Option<ComponentScan> {
        self.introspection
            .annotations(SymbolRef::Declaration(declaration))
            .into_iter()
            .find(|node| node.name == COMPONENT_SCAN_ANNOTATION)
            .map(|node| ComponentScan {
                package: node.string_arg("value").unwrap_or_default().to_string(),
            })
    }
}

/// Qualifier string from a `Named` annotation, if present. A `Named` with a
/// missing or mistyped `value` argument degrades to an empty qualifier.
fn resolve_string_qualifier(annotations: &[AnnotationNode]) -> Option<String> {
    annotations
        .iter()
        .find(|node| node.name == NAMED_ANNOTATION)
        .map(|node| node.string_arg("value").unwrap_or_default().to_string())
}

fn constructor_parameters(parameters: Vec<ParameterNode>) -> Vec<ParameterRef> {
    parameters
        .into_iter()
        .map(|parameter| {
            let qualifier = resolve_string_qualifier(&parameter.annotations);
            ParameterRef {
                name: parameter.name,
                type_name: parameter.declared_type,
                qualifier,
            }
        })
        .collect()
}

/// Scope descriptor from a `Scope` annotation's arguments: a scope type via
/// `value`, else a scope name via `name`, else none.
fn scope_descriptor(node: &AnnotationNode) -> Option<ScopeDescriptor> {
    if let Some(ty) = node.type_arg("value") {
        return Some(ScopeDescriptor::Type(ty.clone()));
    }
    node.string_arg("name")
        .map(|name| ScopeDescriptor::Named(name.to_string()))
}
