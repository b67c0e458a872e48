//! Failures reported by waiting-list steps.

use thiserror::Error;

use crate::columns::Column;
use crate::records::Identifier;

/// Errors surfaced by [`ScenarioContext`](crate::ScenarioContext) operations.
///
/// `OrderMismatch` and `FieldMismatch` are assertion failures; their messages
/// are what a failing scenario reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum WaitlistError {
    /// The waiting list order differs from the expected order.
    #[error(
        "waiting list order is incorrect\nexpected: {}\nactual: {}",
        display_sequence(.expected),
        display_sequence(.actual)
    )]
    OrderMismatch {
        /// Identifiers in the expected order.
        expected: Vec<String>,
        /// Identifiers in the order they are waiting.
        actual: Vec<String>,
    },
    /// A waiting patient's name differs from the expected value.
    #[error(
        "incorrect {column} for {identifier}: expected '{expected}', found {}",
        display_field(.actual.as_deref())
    )]
    FieldMismatch {
        /// Patient whose field differs.
        identifier: Identifier,
        /// Column that was checked.
        column: Column,
        /// Value from the expected table.
        expected: String,
        /// Value recorded at intake, if any.
        actual: Option<String>,
    },
    /// A patient already waiting arrived again under
    /// [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
    #[error("patient {identifier} in intake row {row_number} is already waiting")]
    DuplicateIdentifier {
        /// Repeated identifier.
        identifier: Identifier,
        /// 1-based row number of the repeat, counting the header.
        row_number: usize,
    },
}

/// Renders identifiers as `[A, B]`.
fn display_sequence(identifiers: &[String]) -> String {
    format!("[{}]", identifiers.join(", "))
}

fn display_field(value: Option<&str>) -> String {
    value.map_or_else(|| "no value".to_owned(), |v| format!("'{v}'"))
}

#[cfg(test)]
mod tests {
    use super::WaitlistError;
    use crate::columns::Column;
    
    #[test]
    fn order_mismatch_lists_both_sequences() {
        let err = WaitlistError::OrderMismatch {
            expected: vec!["B".into(), "A".into()],
            actual: vec!["A".into(), "B".into()],
        };
        assert_eq!(
            err.to_string(),
            "waiting list order is incorrect\nexpected: [B, A]\nactual: [A, B]"
        );
    }

    #[test]
    fn field_mismatch_reports_absent_value() {
        let err = WaitlistError::FieldMismatch {
            identifier: "20-1-1".into(),
            column: Column::FirstName,
            expected: "Juan".into(),
            actual: None,
        };
        assert_eq!(
            err.to_string(),
            "incorrect First Name for 20-1-1: expected 'Juan', found no value"
        );
    }

    #[test]
    fn duplicate_identifier_names_row() {
        let err = WaitlistError::DuplicateIdentifier {
            identifier: "20-1-1".into(),
            row_number: 3,
        };
        assert_eq!(
            err.to_string(),
            "patient 20-1-1 in intake row 3 is already waiting"
        );
    }
}
