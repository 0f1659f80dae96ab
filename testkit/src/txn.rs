use rusqlite::{Connection, Transaction};

/// Run `f` inside a transaction: commit on `Ok`, roll back on `Err`.
///
/// The closure's error is returned to the caller unchanged.
pub fn with_transaction<T, E, F>(conn: &mut Connection, f: F) -> Result<T, E>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, E>,
    E: From<rusqlite::Error>,
{
    let tx = conn.transaction()?;
    match f(&tx) {
        Ok(value) => {
            tx.commit()?;
            Ok(value)
        }
        Err(err) => {
            // The closure's error wins over any rollback failure.
            if let Err(rollback_err) = tx.rollback() {
                tracing::warn!("rollback after failed closure also failed: {rollback_err}");
            }
            Err(err)
        }
    }
}
