//! Core data structures shared by the generator and the representations

use std::rc::Rc;

/// A literal value with at most one of a datatype or a language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LiteralValue {
    pub value: String,
    datatype: Option<String>,
    language: Option<String>,
}

impl LiteralValue {
    /// Plain literal without datatype or language.
    pub fn plain(value: impl Into<String>) -> Self {
        Self { value: value.into(), datatype: None, language: None }
    }

    /// Literal carrying a datatype.
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self { value: value.into(), datatype: Some(datatype.into()), language: None }
    }

    /// Literal carrying a language tag.
    pub fn language_tagged(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self { value: value.into(), datatype: None, language: Some(language.into()) }
    }

    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// Object position of a triple: either a resource reference or a literal.
///
/// Both variants share their value with the generator pools, so cloning an object
/// only bumps a reference count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Object {
    Resource(Rc<str>),
    Literal(Rc<LiteralValue>),
}

impl Object {
    pub fn is_literal(&self) -> bool {
        matches!(self, Object::Literal(_))
    }
}

/// Borrowed view of one generated triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedTriple<'a> {
    pub subject: &'a str,
    pub predicate: &'a str,
    pub object: &'a Object,
}

pub mod encoding;
pub use encoding::*;
