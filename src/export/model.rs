// src/export/model.rs

use crate::models::activity::ActivityRecord;
use chrono::{DateTime, Datelike, Local, Timelike};
use serde::Serialize;

/// Struttura "piatta" per l'export delle attività.
///
/// One output row per source row, computed once at construction time:
/// durations are converted from milliseconds to decimal seconds and the
/// epoch timestamps are decomposed as local calendar time. Field order
/// here is the CSV column order.
#[derive(Serialize, Clone, Debug)]
pub struct NormalizedRecord {
    pub activity: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub begin_hour: u32,
    pub begin_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,
    pub duration_in_seconds: f64,
    pub left_duration_seconds: f64,
    pub right_duration_seconds: f64,
    pub pee: i64,
    pub poo: i64,
    pub temperature: Option<f64>,
}

impl NormalizedRecord {
    pub fn from_activity(a: &ActivityRecord) -> Self {
        let begin = local_datetime(a.start_millis);
        let end = local_datetime(a.end_millis);

        Self {
            activity: a.activity.clone(),
            year: begin.year(),
            month: begin.month(),
            day: begin.day(),
            begin_hour: begin.hour(),
            begin_minute: begin.minute(),
            end_hour: end.hour(),
            end_minute: end.minute(),
            duration_in_seconds: millis_to_seconds(a.duration),
            left_duration_seconds: millis_to_seconds(a.left_duration),
            right_duration_seconds: millis_to_seconds(a.right_duration),
            pee: a.pee,
            poo: a.poo,
            temperature: a.temperature,
        }
    }
}

/// Header per il CSV normalizzato.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "activity",
        "year",
        "month",
        "day",
        "begin_hour",
        "begin_minute",
        "end_hour",
        "end_minute",
        "duration_in_seconds",
        "left_duration_seconds",
        "right_duration_seconds",
        "pee",
        "poo",
        "temperature",
    ]
}

/// Exact quotient: every whole-millisecond amount stays representable
/// to the thousandth of a second, no truncation or rounding involved.
fn millis_to_seconds(millis: i64) -> f64 {
    millis as f64 / 1000.0
}

/// Millisecond Unix epoch → calendar time in the process-local timezone.
fn local_datetime(millis: i64) -> DateTime<Local> {
    DateTime::from_timestamp_millis(millis)
        .unwrap_or_default()
        .with_timezone(&Local)
}
