use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rusqlite::Connection;

/// Counts transaction outcomes on one connection through SQLite's commit and
/// rollback hooks.
///
/// The commit hook also fires for autocommit writes, so install the spy right
/// before the transaction under observation.
pub struct TxSpy {
    commits: Arc<AtomicUsize>,
    rollbacks: Arc<AtomicUsize>,
}

impl TxSpy {
    pub fn install(conn: &Connection) -> Self {
        let commits = Arc::new(AtomicUsize::new(0));
        let rollbacks = Arc::new(AtomicUsize::new(0));

        let seen = Arc::clone(&commits);
        conn.commit_hook(Some(move || {
            seen.fetch_add(1, Ordering::SeqCst);
            false // never veto the commit
        }));
        let seen = Arc::clone(&rollbacks);
        conn.rollback_hook(Some(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        Self { commits, rollbacks }
    }

    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub fn rollbacks(&self) -> usize {
        self.rollbacks.load(Ordering::SeqCst)
    }
}
