//! Payload sanitizer
//!
//! Turns raw, untrusted payload entries into display-safe labels and
//! non-negative counts. Bad individual entries are corrected and logged;
//! only a length mismatch between the two sequences is an error.

use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use crate::constants::{ELEMENT_MARKER_KEYS, LABEL_NAME_FIELD};
use crate::error::DashboardResult;
use crate::models::{ChartModel, ContestLabel, SubmissionCount};
use crate::utils::format_number;

/// Recognized shapes of a raw contest entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelShape<'a> {
    /// `null` or another empty value (`false`, `0`, `""`)
    Absent,
    Text(&'a str),
    Number(&'a serde_json::Number),
    Flag(bool),
    /// Plain object that may carry a `name`
    Named(&'a Map<String, Value>),
    /// Anything else: sequences, UI elements placed in the data
    Foreign(&'static str),
}

impl<'a> LabelShape<'a> {
    /// Classify a raw contest entry
    pub fn classify(raw: &'a Value) -> Self {
        match raw {
            Value::Null | Value::Bool(false) => Self::Absent,
            Value::Bool(true) => Self::Flag(true),
            Value::String(s) if s.is_empty() => Self::Absent,
            Value::String(s) => Self::Text(s),
            Value::Number(n) if n.as_f64() == Some(0.0) => Self::Absent,
            Value::Number(n) => Self::Number(n),
            Value::Array(_) => Self::Foreign("sequence"),
            Value::Object(map) => {
                if ELEMENT_MARKER_KEYS.iter().any(|key| map.contains_key(*key)) {
                    Self::Foreign("element")
                } else {
                    Self::Named(map)
                }
            }
        }
    }
}

/// Sanitize one raw contest entry at position `index` (0-based).
///
/// Always returns a non-empty label; unusable entries get the positional
/// fallback `"Contest {index + 1}"`.
pub fn sanitize_label(raw: &Value, index: usize) -> ContestLabel {
    let label = match LabelShape::classify(raw) {
        LabelShape::Absent => None,
        LabelShape::Text(text) => ContestLabel::from_text(text),
        LabelShape::Number(n) => ContestLabel::from_text(&number_text(n)),
        LabelShape::Flag(flag) => ContestLabel::from_text(&flag.to_string()),
        LabelShape::Named(map) => named_label(map, index),
        LabelShape::Foreign(kind) => {
            warn!(index, kind, "Contest entry is not a label, using positional fallback");
            None
        }
    };

    label.unwrap_or_else(|| {
        debug!(index, "Contest label unusable, using positional fallback");
        ContestLabel::positional(index)
    })
}

fn named_label(map: &Map<String, Value>, index: usize) -> Option<ContestLabel> {
    match map.get(LABEL_NAME_FIELD) {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => ContestLabel::from_text(name),
        Some(Value::Number(n)) => ContestLabel::from_text(&number_text(n)),
        Some(Value::Bool(flag)) => ContestLabel::from_text(&flag.to_string()),
        Some(other) => {
            warn!(index, name = %other, "Contest name formatting error");
            None
        }
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        format_number(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Validate one raw submission count at position `index`.
///
/// Non-numeric, negative and non-finite values become `0`.
pub fn validate_count(raw: &Value, index: usize) -> SubmissionCount {
    SubmissionCount::new(coerce_number(raw)).unwrap_or_else(|| {
        warn!(index, count = %raw, "Invalid submission count, using 0");
        SubmissionCount::ZERO
    })
}

/// Coerce the raw users count to a non-negative integer, `0` when invalid.
/// Fractions truncate and values past `u64::MAX` cap there.
pub fn sanitize_users_count(raw: &Value) -> u64 {
    let users = coerce_number(raw);
    if users.is_finite() && users >= 0.0 {
        if users >= u64::MAX as f64 {
            warn!(users_count = %raw, "Users count out of range, capping");
        }
        users.trunc() as u64
    } else {
        warn!(users_count = %raw, "Invalid users count, using 0");
        0
    }
}

/// Sanitize a whole contests sequence, keeping order
pub fn sanitize_labels(raw: &[Value]) -> Vec<ContestLabel> {
    raw.iter()
        .enumerate()
        .map(|(index, entry)| sanitize_label(entry, index))
        .collect()
}

/// Validate a whole counts sequence, keeping order
pub fn validate_counts(raw: &[Value]) -> Vec<SubmissionCount> {
    raw.iter()
        .enumerate()
        .map(|(index, entry)| validate_count(entry, index))
        .collect()
}

/// Pair sanitized labels with validated counts.
///
/// Fails with `DataShapeMismatch` when the lengths differ.
pub fn reconcile(
    labels: Vec<ContestLabel>,
    counts: Vec<SubmissionCount>,
) -> DashboardResult<ChartModel> {
    let (contests, submissions) = (labels.len(), counts.len());
    ChartModel::try_new(labels, counts).inspect_err(|_| {
        error!(contests, counts = submissions, "Data mismatch between contests and submission counts");
    })
}

/// Numeric coercion of an arbitrary value. `NaN` when it has no numeric reading.
pub fn coerce_number(raw: &Value) -> f64 {
    match raw {
        Value::Null => 0.0,
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_numeric(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [Value::Null] => 0.0,
            // a lone flag reads as "true"/"false", which is not numeric
            [Value::Bool(_)] => f64::NAN,
            [only] => coerce_number(only),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

fn parse_numeric(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&text[2..], radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN);
    }

    match text {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if text.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => f64::NAN,
        _ => text.parse().unwrap_or(f64::NAN),
    }
}
