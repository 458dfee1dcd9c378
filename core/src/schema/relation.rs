//! Relation descriptors
//!
//! Relations point at other top-level entities. They never contribute
//! columns, paths or value-map entries; the data source only checks that
//! their targets and inverses line up.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Relation cardinality
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    OneToOne,
    ManyToOne,
    OneToMany,
    ManyToMany,
}

impl RelationKind {
    /// One-to-many relations are owned by the other side and must name it.
    #[must_use]
    pub const fn requires_inverse(&self) -> bool {
        matches!(self, Self::OneToMany)
    }

    /// The kind the inverse relation on the target must have.
    #[must_use]
    pub const fn inverse_kind(&self) -> Self {
        match self {
            Self::OneToOne => Self::OneToOne,
            Self::ManyToOne => Self::OneToMany,
            Self::OneToMany => Self::ManyToOne,
            Self::ManyToMany => Self::ManyToMany,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneToOne => "one-to-one",
            Self::ManyToOne => "many-to-one",
            Self::OneToMany => "one-to-many",
            Self::ManyToMany => "many-to-many",
        }
    }
}

impl core::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Const-friendly relation definition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RelationDef {
    pub name: &'static str,
    pub kind: RelationKind,
    /// Target entity name
    pub reference: &'static str,
    /// Back-reference field on the target
    pub inverse: Option<&'static str>,
}

impl RelationDef {
    #[must_use]
    pub const fn new(name: &'static str, kind: RelationKind, reference: &'static str) -> Self {
        Self {
            name,
            kind,
            reference,
            inverse: None,
        }
    }

    #[must_use]
    pub const fn one_to_one(name: &'static str, reference: &'static str) -> Self {
        Self::new(name, RelationKind::OneToOne, reference)
    }

    #[must_use]
    pub const fn many_to_one(name: &'static str, reference: &'static str) -> Self {
        Self::new(name, RelationKind::ManyToOne, reference)
    }

    #[must_use]
    pub const fn one_to_many(
        name: &'static str,
        reference: &'static str,
        inverse: &'static str,
    ) -> Self {
        Self::new(name, RelationKind::OneToMany, reference).inverse(inverse)
    }

    #[must_use]
    pub const fn many_to_many(name: &'static str, reference: &'static str) -> Self {
        Self::new(name, RelationKind::ManyToMany, reference)
    }

    #[must_use]
    pub const fn inverse(self, inverse: &'static str) -> Self {
        Self {
            inverse: Some(inverse),
            ..self
        }
    }

    /// Convert to runtime [`Relation`] type
    #[must_use]
    pub const fn into_relation(self) -> Relation {
        Relation {
            name: Cow::Borrowed(self.name),
            kind: self.kind,
            reference: Cow::Borrowed(self.reference),
            inverse: match self.inverse {
                Some(inverse) => Some(Cow::Borrowed(inverse)),
                None => None,
            },
        }
    }
}

/// Runtime relation descriptor
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub name: Cow<'static, str>,
    pub kind: RelationKind,
    pub reference: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverse: Option<Cow<'static, str>>,
}

impl Relation {
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        kind: RelationKind,
        reference: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            reference: reference.into(),
            inverse: None,
        }
    }

    #[must_use]
    pub fn inverse(mut self, inverse: impl Into<Cow<'static, str>>) -> Self {
        self.inverse = Some(inverse.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    #[inline]
    #[must_use]
    pub fn inverse_name(&self) -> Option<&str> {
        self.inverse.as_deref()
    }
}

impl From<RelationDef> for Relation {
    fn from(def: RelationDef) -> Self {
        def.into_relation()
    }
}
