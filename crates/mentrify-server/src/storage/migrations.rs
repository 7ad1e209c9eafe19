use rusqlite::Connection;

const SCHEMA: &str = include_str!("schema.sql");

pub fn run(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)?;

    // Early databases stored rows without a timestamp
    let has_updated_at: bool = conn
        .prepare("SELECT COUNT(*) FROM pragma_table_info('local_storage') WHERE name='updated_at'")?
        .query_row([], |row| row.get::<_, i32>(0))
        .map(|c| c > 0)
        .unwrap_or(false);

    if !has_updated_at {
        conn.execute_batch(
            "ALTER TABLE local_storage ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';",
        )?;
    }

    Ok(())
}
