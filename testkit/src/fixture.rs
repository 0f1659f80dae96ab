use std::path::{Path, PathBuf};

use rand::{rng, RngCore};
use rusqlite::{Connection, OpenFlags};
use tempfile::TempDir;

use crate::{Result, SetupError};

/// One scratch database per test.
///
/// By default the database is a uniquely named shared-cache in-memory
/// database, so every [`connect`](TestDatabase::connect) handle sees the same
/// data while the fixture is alive. With [`TestDatabaseBuilder::on_disk`] the
/// database lives in a fresh temporary directory instead.
///
/// Dropping the fixture tears the database down: the anchor connection that
/// pins an in-memory database is closed, and the temporary directory of an
/// on-disk database is removed.
#[derive(Debug)]
pub struct TestDatabase {
    uri: String,
    /// Keeps the on-disk directory alive for the fixture's lifetime.
    dir: Option<TempDir>,
    /// Pins a shared-cache in-memory database between connects.
    _anchor: Option<Connection>,
}

impl TestDatabase {
    pub fn builder() -> TestDatabaseBuilder {
        TestDatabaseBuilder::default()
    }

    /// In-memory fixture with no init SQL.
    pub fn new_empty() -> Self {
        Self::builder().build()
    }

    /// Open a new connection to the provisioned database.
    ///
    /// Panics if the database cannot be opened; use
    /// [`try_connect`](TestDatabase::try_connect) to observe the error.
    pub fn connect(&self) -> Connection {
        self.try_connect().unwrap()
    }

    pub fn try_connect(&self) -> Result<Connection> {
        tracing::debug!(uri = %self.uri, "connecting");
        open(&self.uri)
    }

    /// Filesystem path of an on-disk fixture; `None` for in-memory.
    pub fn path(&self) -> Option<&Path> {
        self.dir.as_ref().map(|_| Path::new(self.uri.as_str()))
    }
}

#[derive(Default)]
pub struct TestDatabaseBuilder {
    db_name: Option<String>,
    init_sql: Option<String>,
    on_disk: bool,
}

impl TestDatabaseBuilder {
    pub fn with_db_name(mut self, name: impl Into<String>) -> Self {
        self.db_name = Some(name.into());
        self
    }

    pub fn with_init_sql(mut self, sql: impl Into<String>) -> Self {
        self.init_sql = Some(sql.into());
        self
    }

    /// Provision a database file inside a fresh temporary directory instead
    /// of an in-memory database.
    pub fn on_disk(mut self) -> Self {
        self.on_disk = true;
        self
    }

    /// Provision the database. Panics on failure; use
    /// [`try_build`](TestDatabaseBuilder::try_build) to observe the error.
    pub fn build(self) -> TestDatabase {
        self.try_build().unwrap()
    }

    pub fn try_build(self) -> Result<TestDatabase> {
        let name = self
            .db_name
            .unwrap_or_else(|| format!("test-{}.db", rng().next_u32()));

        let (uri, dir) = if self.on_disk {
            let dir = TempDir::new()?;
            let path: PathBuf = dir.path().join(&name);
            (path.to_string_lossy().into_owned(), Some(dir))
        } else {
            // Shared-cache memory databases are named process-wide; the random
            // suffix keeps concurrently running tests apart.
            let uri = format!(
                "file:{}-{}?mode=memory&cache=shared",
                name,
                rng().next_u32()
            );
            (uri, None)
        };

        tracing::debug!(uri = %uri, "provisioning test database");
        let first = open(&uri)?;
        if self.on_disk {
            first
                .pragma_update(None, "journal_mode", "wal")
                .map_err(SetupError::Init)?;
        }
        if let Some(sql) = &self.init_sql {
            first.execute_batch(sql).map_err(SetupError::Init)?;
        }

        // An in-memory database disappears with its last connection, so the
        // fixture holds on to the first one.
        let anchor = if self.on_disk { None } else { Some(first) };

        Ok(TestDatabase {
            uri,
            dir,
            _anchor: anchor,
        })
    }
}

fn open(uri: &str) -> Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Connection::open_with_flags(uri, flags).map_err(|source| SetupError::Open {
        uri: uri.to_string(),
        source,
    })
}
