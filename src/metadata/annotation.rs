//! Definition keyword and scope descriptor types.
//!
//! The original annotation processor dispatched on raw annotation name
//! strings. Here the recognized set is a closed enum matched exhaustively,
//! with a single open variant for configured extra scope-marker annotations.

use serde::{Serialize, Serializer};

use super::TypeRef;

/// A recognized definition annotation, i.e. the DI lifecycle keyword of a
/// provider function.
///
/// `ExtraScope` covers configured scope-marker annotations (e.g. `Scoped`)
/// that are only meaningful alongside a `Scope` annotation: on their own they
/// produce no definition, inside a `Scope` member they override the
/// definition's keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DefinitionAnnotation {
    Single,
    Factory,
    ViewModel,
    Scope,
    ExtraScope(String),
}

impl DefinitionAnnotation {
    /// Classify a built-in annotation name. Extra scope-marker names are
    /// host-configured and classified by the scanner, not here.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Single" => Some(Self::Single),
            "Factory" => Some(Self::Factory),
            "ViewModel" => Some(Self::ViewModel),
            "Scope" => Some(Self::Scope),
            _ => None,
        }
    }

    pub fn is_scope(&self) -> bool {
        matches!(self, Self::Scope)
    }

    /// True for annotations that may override the keyword of a scoped
    /// definition: `ViewModel` and any configured extra scope marker.
    pub fn is_extra_scope(&self) -> bool {
        matches!(self, Self::ViewModel | Self::ExtraScope(_))
    }
}

impl std::fmt::Display for DefinitionAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Factory => write!(f, "factory"),
            Self::ViewModel => write!(f, "viewModel"),
            Self::Scope => write!(f, "scope"),
            Self::ExtraScope(name) => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => write!(f, "{}{}", first.to_lowercase(), chars.as_str()),
                    None => Ok(()),
                }
            }
        }
    }
}

impl Serialize for DefinitionAnnotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The lifecycle scope a `Scope`-keyword definition belongs to, identified
/// either by a scope type or by a scope name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScopeDescriptor {
    Type(TypeRef),
    Named(String),
}

impl std::fmt::Display for ScopeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeDescriptor::Type(ty) => write!(f, "{}", ty),
            ScopeDescriptor::Named(name) => write!(f, "\"{}\"", name),
        }
    }
}
