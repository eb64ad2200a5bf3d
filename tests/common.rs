#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use daybook_export::models::activity::ActivityRecord;
use rusqlite::{Connection, params};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dbx() -> Command {
    cargo_bin_cmd!("daybook-export")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_daybook.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Schema mirroring the app backup: the normalized query only reads a
/// subset of these columns, `volume` is there to exercise raw mode.
pub const CREATE_DAILY_ACTIONS: &str = "CREATE TABLE daily_actions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL,
    duration INTEGER NOT NULL DEFAULT 0,
    left_duration INTEGER NOT NULL DEFAULT 0,
    right_duration INTEGER NOT NULL DEFAULT 0,
    side TEXT,
    pee INTEGER NOT NULL DEFAULT 0,
    poo INTEGER NOT NULL DEFAULT 0,
    temperature REAL,
    volume REAL,
    start_millis INTEGER NOT NULL,
    end_millis INTEGER NOT NULL
)";

pub fn create_empty_db(db_path: &str) -> Connection {
    let conn = Connection::open(db_path).expect("open db");
    conn.execute(CREATE_DAILY_ACTIONS, [])
        .expect("create daily_actions");
    conn
}

pub fn sleeping_row() -> ActivityRecord {
    ActivityRecord {
        activity: "sleeping".to_string(),
        duration: 7_200_000,
        left_duration: 0,
        right_duration: 0,
        side: None,
        pee: 0,
        poo: 0,
        temperature: Some(36.5),
        start_millis: 1_645_920_000_000, // 2022-02-27 00:00:00 UTC
        end_millis: 1_645_927_200_000,   // two hours later
    }
}

pub fn nursing_row() -> ActivityRecord {
    ActivityRecord {
        activity: "breast_feeding".to_string(),
        duration: 1_200_000,
        left_duration: 700_000,
        right_duration: 500_000,
        side: Some("left".to_string()),
        pee: 0,
        poo: 0,
        temperature: None,
        start_millis: 1_645_930_000_000,
        end_millis: 1_645_931_200_000,
    }
}

pub fn diaper_row() -> ActivityRecord {
    ActivityRecord {
        activity: "diaper_change".to_string(),
        duration: 0,
        left_duration: 0,
        right_duration: 0,
        side: None,
        pee: 1,
        poo: 1,
        temperature: None,
        start_millis: 1_645_935_000_000,
        end_millis: 1_645_935_000_000,
    }
}

/// Initialize a DB with a small dataset useful for many tests.
/// Row 1 is the reference scenario: a two-hour sleep starting at
/// 2022-02-27 00:00:00 UTC.
pub fn init_db_with_data(db_path: &str) {
    let conn = create_empty_db(db_path);
    insert_action(&conn, &sleeping_row());
    insert_action(&conn, &nursing_row());
    insert_action(&conn, &diaper_row());
}

pub fn insert_action(conn: &Connection, rec: &ActivityRecord) {
    conn.execute(
        "INSERT INTO daily_actions
            (type, duration, left_duration, right_duration, side, pee, poo, temperature, start_millis, end_millis)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            rec.activity,
            rec.duration,
            rec.left_duration,
            rec.right_duration,
            rec.side,
            rec.pee,
            rec.poo,
            rec.temperature,
            rec.start_millis,
            rec.end_millis,
        ],
    )
    .expect("insert action");
}

pub const EXPECTED_HEADER: &str = "activity,year,month,day,begin_hour,begin_minute,end_hour,end_minute,duration_in_seconds,left_duration_seconds,right_duration_seconds,pee,poo,temperature";
