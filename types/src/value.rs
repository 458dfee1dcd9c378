//! Resolved column value types

use crate::ScalarType;

/// The value type of a column after driver lookup and modifiers.
///
/// A column resolves to its driver scalar, then [`ValueType::Array`] if the
/// column is an array, then [`ValueType::Nullable`] if it is nullable. The
/// order is fixed: a nullable array column is "an array or nothing", never
/// "an array of maybe-values".
///
/// # Examples
///
/// ```
/// use ormshape_types::{ScalarType, ValueType};
///
/// let tags = ValueType::resolve(ScalarType::Text, true, true);
/// assert_eq!(tags.to_string(), "Option<Vec<String>>");
/// assert_eq!(tags.scalar(), ScalarType::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueType {
    Scalar(ScalarType),
    Array(Box<ValueType>),
    Nullable(Box<ValueType>),
}

impl ValueType {
    /// Apply the array and nullable modifiers to a base scalar, in that order.
    #[must_use]
    pub fn resolve(base: ScalarType, array: bool, nullable: bool) -> Self {
        let mut ty = Self::Scalar(base);
        if array {
            ty = Self::Array(Box::new(ty));
        }
        if nullable {
            ty = Self::Nullable(Box::new(ty));
        }
        ty
    }

    /// The base scalar under every modifier.
    #[must_use]
    pub fn scalar(&self) -> ScalarType {
        match self {
            Self::Scalar(scalar) => *scalar,
            Self::Array(inner) | Self::Nullable(inner) => inner.scalar(),
        }
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Whether the value (ignoring an outer nullable) is an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        match self {
            Self::Array(_) => true,
            Self::Nullable(inner) => inner.is_array(),
            Self::Scalar(_) => false,
        }
    }
}

impl From<ScalarType> for ValueType {
    fn from(scalar: ScalarType) -> Self {
        Self::Scalar(scalar)
    }
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Scalar(scalar) => write!(f, "{scalar}"),
            Self::Array(inner) => write!(f, "Vec<{inner}>"),
            Self::Nullable(inner) => write!(f, "Option<{inner}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain() {
        assert_eq!(
            ValueType::resolve(ScalarType::Integer, false, false),
            ValueType::Scalar(ScalarType::Integer)
        );
    }

    #[test]
    fn test_resolve_array_then_nullable() {
        let ty = ValueType::resolve(ScalarType::Text, true, true);
        assert_eq!(
            ty,
            ValueType::Nullable(Box::new(ValueType::Array(Box::new(ValueType::Scalar(
                ScalarType::Text
            )))))
        );
        assert!(ty.is_nullable());
        assert!(ty.is_array());
        assert_ne!(ty.to_string(), "Vec<Option<String>>");
    }

    #[test]
    fn test_resolve_single_modifiers() {
        let array = ValueType::resolve(ScalarType::Boolean, true, false);
        assert_eq!(array.to_string(), "Vec<bool>");
        assert!(!array.is_nullable());

        let nullable = ValueType::resolve(ScalarType::Uuid, false, true);
        assert_eq!(nullable.to_string(), "Option<Uuid>");
        assert!(!nullable.is_array());
        assert_eq!(nullable.scalar(), ScalarType::Uuid);
    }
}
