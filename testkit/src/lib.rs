//! # sqlbed testkit
//!
//! Test support for suites that exercise SQLite through `rusqlite`. The
//! centerpiece is [`TestDatabase`], which provisions one scratch database per
//! test and hands out connections to it:
//!
//! ```rust,no_run
//! use sqlbed_testkit::{ExecRows, TestDatabase};
//!
//! let db = TestDatabase::builder()
//!     .with_db_name("doc.db")
//!     .with_init_sql("CREATE TABLE t (x INTEGER)")
//!     .build();
//! let conn = db.connect();
//! conn.execute("INSERT INTO t VALUES (1)", []).unwrap();
//! let rows: Vec<(i64,)> = conn.exec_rows("SELECT x FROM t");
//! assert_eq!(rows, vec![(1,)]);
//! ```
//!
//! Most tests don't call the builder directly; the `#[sqlbed_macros::test]`
//! attribute builds the fixture and passes it in as the test's argument.

mod fixture;
mod rows;
pub mod schema;
mod spy;
mod txn;

pub use fixture::{TestDatabase, TestDatabaseBuilder};
pub use rows::{ExecRows, FromRow};
pub use spy::TxSpy;
pub use txn::with_transaction;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Errors raised while provisioning a [`TestDatabase`].
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("failed to create scratch directory: {0}")]
    Scratch(#[from] std::io::Error),
    #[error("failed to open database `{uri}`: {source}")]
    Open {
        uri: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("init sql failed: {0}")]
    Init(#[source] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, SetupError>;

/// Install the test tracing subscriber if none is installed yet. Safe to call
/// from every test binary; repeat calls are no-ops.
pub fn maybe_setup_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(EnvFilter::from_default_env())
        .try_init();
}
