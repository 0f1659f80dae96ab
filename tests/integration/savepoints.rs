use sqlbed_testkit::{schema, TestDatabase};

use crate::common::{count_something, insert_something};

#[sqlbed_macros::test(init_sql = schema::SOMETHING)]
fn rollback_to_savepoint_discards_inner_work(db: TestDatabase) -> anyhow::Result<()> {
    let conn = db.connect();

    conn.execute_batch("BEGIN")?;
    insert_something(&conn, 1, "Tom");
    conn.execute_batch("SAVEPOINT first")?;
    insert_something(&conn, 2, "Martin");
    assert_eq!(count_something(&conn), 2);

    conn.execute_batch("ROLLBACK TO SAVEPOINT first")?;
    assert_eq!(count_something(&conn), 1);

    conn.execute_batch("COMMIT")?;
    assert_eq!(count_something(&conn), 1);
    Ok(())
}

#[sqlbed_macros::test(init_sql = schema::SOMETHING)]
fn released_savepoint_cannot_be_rolled_back_to(db: TestDatabase) -> anyhow::Result<()> {
    let conn = db.connect();

    conn.execute_batch("BEGIN")?;
    conn.execute_batch("SAVEPOINT first")?;
    insert_something(&conn, 1, "Martin");
    conn.execute_batch("RELEASE SAVEPOINT first")?;

    let err = conn.execute_batch("ROLLBACK TO SAVEPOINT first").unwrap_err();
    assert!(err.to_string().contains("no such savepoint"), "{err}");

    conn.execute_batch("ROLLBACK")?;
    assert_eq!(count_something(&conn), 0);
    Ok(())
}

/// Same shape through the typed API: a savepoint dropped without commit
/// reverts its work while the enclosing transaction proceeds.
#[sqlbed_macros::test(init_sql = schema::SOMETHING)]
fn savepoint_dropped_without_commit_reverts(db: TestDatabase) -> anyhow::Result<()> {
    let mut conn = db.connect();

    let mut tx = conn.transaction()?;
    insert_something(&tx, 1, "Tom");
    {
        let sp = tx.savepoint_with_name("inner")?;
        insert_something(&sp, 2, "Martin");
        assert_eq!(count_something(&sp), 2);
        // dropped without commit
    }
    assert_eq!(count_something(&tx), 1);
    tx.commit()?;

    assert_eq!(count_something(&conn), 1);
    Ok(())
}
