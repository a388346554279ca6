//! # Sensu Helpers
//!
//! Normalization shared by the Sensu commands: hostname qualification, silence
//! durations and keys, and ordering of the lists the API returns.

use serde_json::Value;
use std::cmp::Ordering;

use crate::domain::types::Expiration;

/// Seconds applied when `silence` is given no duration.
pub const DEFAULT_EXPIRATION: u64 = 3600;
pub const DEFAULT_EXPIRATION_LABEL: &str = "1h";

/// Appends `domain` to `host` unless the host already contains it.
///
/// Containment is a substring check, so `web1.example.com.internal` is left alone
/// for `example.com`. A domain starting with `.` is concatenated as is.
pub fn qualify(host: &str, domain: Option<&str>) -> String {
    match domain {
        Some(domain) if !domain.is_empty() && !host.contains(domain) => {
            if domain.starts_with('.') {
                format!("{host}{domain}")
            } else {
                format!("{host}.{domain}")
            }
        }
        _ => host.to_string(),
    }
}

/// Seconds for an `<amount><unit>` duration.
///
/// No unit at all means the default hour. A unit outside `s`, `m`, `h`, `d`
/// (including an empty one) gives `None`, as does an overflowing amount.
pub fn parse_expiration(amount: u64, unit: Option<&str>) -> Option<Expiration> {
    let Some(unit) = unit else {
        return Some(Expiration {
            seconds: DEFAULT_EXPIRATION,
            label: DEFAULT_EXPIRATION_LABEL.to_string(),
        });
    };
    let factor = match unit {
        "s" => 1,
        "m" => 60,
        "h" => 3_600,
        "d" => 86_400,
        _ => return None,
    };
    Some(Expiration {
        seconds: amount.checked_mul(factor)?,
        label: format!("{amount}{unit}"),
    })
}

/// `client:check`, or `client:*` when no check is given.
pub fn silence_key(client: &str, check: &str) -> String {
    if check.is_empty() {
        format!("{client}:*")
    } else {
        format!("{client}:{check}")
    }
}

/// Looks up a dotted field path such as `client.name`.
fn field<'a>(item: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(item, |value, key| value.get(key))
}

fn rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(Value::Array(_)) => 4,
        Some(Value::Object(_)) => 5,
    }
}

fn compare_fields(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Stable ascending sort by the field at `path`.
///
/// Missing fields sort first; ties keep their input order.
pub fn sort_by_field(items: &mut [Value], path: &str) {
    items.sort_by(|a, b| compare_fields(field(a, path), field(b, path)));
}

/// Events are ordered by the name of the client they belong to.
pub fn sort_events(items: &mut [Value]) {
    sort_by_field(items, "client.name");
}
