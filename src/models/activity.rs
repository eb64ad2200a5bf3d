//! Database row model for logged activities.
//! Thin wrapper around a SQLite row of `daily_actions`.

/// One logged child-care event as stored by the app.
/// All durations and timestamps are kept in milliseconds here;
/// unit conversion happens only when building the export record.
#[derive(Debug, Clone)]
pub struct ActivityRecord {
    pub activity: String,         // ⇔ daily_actions.type ('sleeping' | 'bottle' | 'diaper_change' | ...)
    pub duration: i64,            // ⇔ daily_actions.duration (INT, milliseconds)
    pub left_duration: i64,       // ⇔ daily_actions.left_duration (INT, ms, nursing only)
    pub right_duration: i64,      // ⇔ daily_actions.right_duration (INT, ms, nursing only)
    pub side: Option<String>,     // ⇔ daily_actions.side (TEXT, nullable)
    pub pee: i64,                 // ⇔ daily_actions.pee (INT, 0/1 or count)
    pub poo: i64,                 // ⇔ daily_actions.poo (INT, count)
    pub temperature: Option<f64>, // ⇔ daily_actions.temperature (REAL, nullable)
    pub start_millis: i64,        // ⇔ daily_actions.start_millis (INT, ms Unix epoch)
    pub end_millis: i64,          // ⇔ daily_actions.end_millis (INT, ms Unix epoch)
}
