use crate::errors::AppResult;
use crate::models::activity::ActivityRecord;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Result, Row};
use std::path::Path;

/// Open the backup database in read-only mode.
/// The source file is never modified, not even its journal.
pub fn open_readonly(path: &Path) -> AppResult<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    Ok(conn)
}

pub fn load_activities(conn: &Connection) -> AppResult<Vec<ActivityRecord>> {
    let mut stmt = conn.prepare(
        "SELECT type AS activity, duration, left_duration, right_duration,
                side, pee, poo, temperature, start_millis, end_millis
         FROM daily_actions",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<ActivityRecord> {
    Ok(ActivityRecord {
        activity: row.get("activity")?,
        duration: row.get("duration")?,
        left_duration: row.get("left_duration")?,
        right_duration: row.get("right_duration")?,
        side: row.get("side")?,
        pee: row.get("pee")?,
        poo: row.get("poo")?,
        temperature: row.get("temperature")?,
        start_millis: row.get("start_millis")?,
        end_millis: row.get("end_millis")?,
    })
}

/// Load every column of `daily_actions` verbatim, each value stringified
/// but otherwise untouched. Used only by raw mode.
pub fn load_raw_rows(conn: &Connection) -> AppResult<Vec<Vec<String>>> {
    let mut stmt = conn.prepare("SELECT * FROM daily_actions")?;
    let column_count = stmt.column_count();

    let mut rows = stmt.query([])?;

    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let mut record = Vec::with_capacity(column_count);
        for idx in 0..column_count {
            record.push(raw_field(row.get_ref(idx)?));
        }
        out.push(record);
    }
    Ok(out)
}

/// SQL value → CSV field. NULL becomes an empty field.
fn raw_field(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => String::from_utf8_lossy(b).into_owned(),
    }
}
