use rusqlite::types::FromSql;
use rusqlite::{Connection, Row};

/// Row decoded as a tuple of column values.
pub trait FromRow: Sized {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

macro_rules! tuple_from_row {
    ($($t:ident => $i:tt),+) => {
        impl<$($t: FromSql),+> FromRow for ($($t,)+) {
            fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
                Ok(($(row.get::<_, $t>($i)?,)+))
            }
        }
    };
}

tuple_from_row!(A => 0);
tuple_from_row!(A => 0, B => 1);
tuple_from_row!(A => 0, B => 1, C => 2);
tuple_from_row!(A => 0, B => 1, C => 2, D => 3);

/// Query shorthand for tests. Panics on failure, with the offending SQL in
/// the message.
pub trait ExecRows {
    /// Collect every row of `sql` as a tuple.
    fn exec_rows<T: FromRow>(&self, sql: &str) -> Vec<T>;

    /// Single-row, single-column query.
    fn exec_one<T: FromSql>(&self, sql: &str) -> T;
}

impl ExecRows for Connection {
    fn exec_rows<T: FromRow>(&self, sql: &str) -> Vec<T> {
        let mut stmt = self
            .prepare(sql)
            .unwrap_or_else(|e| panic!("prepare `{sql}`: {e}"));
        let rows = stmt
            .query_map([], |row| T::from_row(row))
            .unwrap_or_else(|e| panic!("query `{sql}`: {e}"));
        rows.collect::<rusqlite::Result<Vec<T>>>()
            .unwrap_or_else(|e| panic!("decode rows of `{sql}`: {e}"))
    }

    fn exec_one<T: FromSql>(&self, sql: &str) -> T {
        self.query_row(sql, [], |row| row.get(0))
            .unwrap_or_else(|e| panic!("query `{sql}`: {e}"))
    }
}
