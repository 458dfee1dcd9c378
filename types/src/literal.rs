//! Primitive literal values
//!
//! This module provides two complementary types:
//! - [`LiteralDef`] - A const-friendly literal for compile-time descriptors
//! - [`Literal`] - A runtime type for serde serialization/deserialization

use std::borrow::Cow;

/// Const-friendly primitive literal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LiteralDef {
    Text(&'static str),
    Integer(i64),
    Real(f64),
    Bool(bool),
}

impl LiteralDef {
    /// Convert to runtime type
    #[must_use]
    pub const fn into_literal(self) -> Literal {
        match self {
            Self::Text(s) => Literal::Text(Cow::Borrowed(s)),
            Self::Integer(i) => Literal::Integer(i),
            Self::Real(r) => Literal::Real(r),
            Self::Bool(b) => Literal::Bool(b),
        }
    }
}

/// Runtime primitive literal.
///
/// Untagged on the wire: `true`, `42`, `1.5` and `"text"` all deserialize
/// directly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Literal {
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(Cow<'static, str>),
}

impl From<LiteralDef> for Literal {
    fn from(def: LiteralDef) -> Self {
        def.into_literal()
    }
}

impl From<&'static str> for Literal {
    fn from(s: &'static str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::Text(Cow::Owned(s))
    }
}

impl From<i64> for Literal {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Literal {
    fn from(r: f64) -> Self {
        Self::Real(r)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl core::fmt::Display for Literal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}
