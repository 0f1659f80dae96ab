use rusqlite::{params, Connection};
use sqlbed_testkit::ExecRows;

pub(crate) fn insert_something(conn: &Connection, id: i64, name: &str) {
    conn.execute(
        "INSERT INTO something (id, name) VALUES (?1, ?2)",
        params![id, name],
    )
    .unwrap();
}

pub(crate) fn count_something(conn: &Connection) -> i64 {
    conn.exec_one("SELECT count(*) FROM something")
}
