/// Maximum number of characters kept in an account name.
///
/// Longer names are truncated, matching the `VARCHAR(50)` column of the
/// accounts table.
pub const ACCOUNT_NAME_MAX_LEN: usize = 50;

/// Id assigned to the first account of an empty in-memory store.
pub const FIRST_ACCOUNT_ID: i64 = 1;
