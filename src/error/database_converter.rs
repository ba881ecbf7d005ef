use crate::error::AppError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Utility for converting database errors to structured AppError variants.
///
/// Uniqueness is delegated to the store's own indexes, so a unique-index
/// violation reported by PostgreSQL is the signal for a duplicate username
/// and is surfaced as a validation error.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                let constraint = info.constraint_name().unwrap_or_default();
                if constraint.contains("username") || info.message().contains("username") {
                    AppError::validation("username must be unique")
                } else {
                    AppError::validation(format!(
                        "unique constraint violated: {}",
                        info.message()
                    ))
                }
            }
            DieselError::NotFound => AppError::not_found("resource", "id", "unknown"),
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock database error information for testing
    struct MockDatabaseErrorInfo {
        message: String,
        constraint_name: Option<String>,
    }

    impl diesel::result::DatabaseErrorInformation for MockDatabaseErrorInfo {
        fn message(&self) -> &str {
            &self.message
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            None
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.constraint_name.as_deref()
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    #[test]
    fn duplicate_username_becomes_validation_error() {
        let info = MockDatabaseErrorInfo {
            message: "duplicate key value violates unique constraint \"users_username_key\"\nDETAIL: Key (username)=(root) already exists.".to_string(),
            constraint_name: Some("users_username_key".to_string()),
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, Box::new(info));

        let result = DatabaseErrorConverter::convert_diesel_error(error, "insert user");

        match result {
            AppError::Validation { message } => {
                assert_eq!(message, "username must be unique");
            }
            other => panic!("Expected Validation error, got: {:?}", other),
        }
    }

    #[test]
    fn not_found_maps_to_not_found_variant() {
        let result = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "find blog");
        assert!(matches!(result, AppError::NotFound { .. }));
    }

    #[test]
    fn other_errors_keep_operation_context() {
        let result =
            DatabaseErrorConverter::convert_diesel_error(DieselError::RollbackTransaction, "update blog");
        match result {
            AppError::Database { operation, .. } => assert_eq!(operation, "update blog"),
            other => panic!("Expected Database error, got: {:?}", other),
        }
    }
}
