//! Column predicates used to filter paths and value maps

use crate::schema::Column;

/// A test over column metadata.
///
/// The three standing predicates drive the primary-key, generated and
/// default value maps; [`Predicate::Custom`] lets callers derive their own.
#[derive(Clone, Copy, Debug)]
pub enum Predicate {
    /// `primary` is set
    Primary,
    /// `generated` is set
    Generated,
    /// A primitive literal default is declared
    HasDefault,
    Custom(fn(&Column) -> bool),
}

impl Predicate {
    #[must_use]
    pub fn matches(&self, column: &Column) -> bool {
        match self {
            Self::Primary => column.is_primary(),
            Self::Generated => column.is_generated(),
            Self::HasDefault => column.has_literal_default(),
            Self::Custom(f) => f(column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_predicates() {
        let id = Column::new("id", "integer").primary().generated();
        let status = Column::new("status", "text").default_value("draft");
        let created = Column::new("created_at", "timestamp").default_sql("now()");

        assert!(Predicate::Primary.matches(&id));
        assert!(Predicate::Generated.matches(&id));
        assert!(!Predicate::HasDefault.matches(&id));

        assert!(Predicate::HasDefault.matches(&status));
        assert!(!Predicate::Primary.matches(&status));

        assert!(!Predicate::HasDefault.matches(&created));
    }

    #[test]
    fn test_custom_predicate() {
        let nullable = Predicate::Custom(Column::is_nullable);
        assert!(nullable.matches(&Column::new("bio", "text").nullable()));
        assert!(!nullable.matches(&Column::new("bio", "text")));
    }
}
