use diesel::prelude::*;
use jiff_diesel::DateTime;

/// User model for reading from database.
/// Derives Queryable for SELECT operations and Selectable for type-safe column selection.
///
/// The `password_hash` field never leaves the service boundary; response DTOs
/// are built from the other fields only.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// NewUser model for inserting new records.
/// The password is hashed by the service layer before this struct is built.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
}

/// Minimal public projection of a user, used when resolving blog owners.
/// Selects only non-sensitive columns.
#[derive(Debug, Queryable, Selectable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub name: Option<String>,
}
