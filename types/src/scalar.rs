//! Scalar value types
//!
//! The base types a driver storage type resolves to, before the array and
//! nullable modifiers are applied.

/// Base value type produced by a driver column-type lookup.
///
/// # Examples
///
/// ```
/// use ormshape_types::ScalarType;
///
/// assert_eq!(ScalarType::parse("text"), Some(ScalarType::Text));
/// assert_eq!(ScalarType::Text.rust_type(), "String");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScalarType {
    /// UTF-8 text
    Text,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    BigInt,
    /// Double precision floating point
    Real,
    /// Exact decimal, carried as text to avoid precision loss
    Decimal,
    /// true/false
    Boolean,
    /// Calendar date
    Date,
    /// Time of day
    Time,
    /// Date and time
    Timestamp,
    /// 128-bit UUID
    Uuid,
    /// Arbitrary JSON document
    Json,
    /// Raw bytes
    Bytes,
}

impl ScalarType {
    /// Every scalar, in declaration order.
    pub const ALL: [ScalarType; 12] = [
        Self::Text,
        Self::Integer,
        Self::BigInt,
        Self::Real,
        Self::Decimal,
        Self::Boolean,
        Self::Date,
        Self::Time,
        Self::Timestamp,
        Self::Uuid,
        Self::Json,
        Self::Bytes,
    ];

    /// Parse a scalar from its lowercase name (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|scalar| scalar.as_str().eq_ignore_ascii_case(s))
    }

    /// Get the scalar name as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::BigInt => "bigint",
            Self::Real => "real",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::Uuid => "uuid",
            Self::Json => "json",
            Self::Bytes => "bytes",
        }
    }

    /// The Rust type a row field of this scalar is decoded into.
    #[must_use]
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Decimal => "String",
            Self::Integer => "i32",
            Self::BigInt => "i64",
            Self::Real => "f64",
            Self::Boolean => "bool",
            Self::Date => "NaiveDate",
            Self::Time => "NaiveTime",
            Self::Timestamp => "NaiveDateTime",
            Self::Uuid => "Uuid",
            Self::Json => "serde_json::Value",
            Self::Bytes => "Vec<u8>",
        }
    }
}

impl core::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.rust_type())
    }
}
