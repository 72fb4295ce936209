//! Store-level error types.

use thiserror::Error;

/// Failures of the underlying post store.
///
/// Absence of a record is never an error: `find_by_id` answers with an
/// `Option` and `update_by_id`/`delete_by_id` answer with a matched count,
/// so these variants cover infrastructure failures only.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store operation failed: {0}")]
    Query(String),
}
