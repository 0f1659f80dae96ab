//! Canonical fixture schemas shared by the integration suites.

/// Two-column scratch table used by most suites. `id` aliases the rowid, so
/// inserts that omit it get a generated key.
pub const SOMETHING: &str = "CREATE TABLE something (id INTEGER PRIMARY KEY, name TEXT);";

/// Users table for tests that want a NOT NULL column.
pub const USERS: &str = "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL);";
