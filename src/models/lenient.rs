//! Tolerant field decoders for planning payloads.
//! A bad field degrades to its default instead of rejecting the whole response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null` → `T::default()`
pub fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Strings pass through, `null` becomes `""`, anything else is stringified.
pub fn string<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Like [`string`], but `null` and `""` are absent values.
pub fn opt_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        Value::Null => None,
        other => Some(other.to_string()),
    })
}

/// Hour totals: numbers or numeric strings; anything else counts as zero.
pub fn hours<'de, D>(d: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// Optional hour totals: absent or unreadable values are `None`.
pub fn opt_hours<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}

/// `[lng, lat]` with numbers or numeric strings; anything else is no point.
fn point(value: &Value) -> Option<[f64; 2]> {
    let coord = |v: &Value| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|c| c.is_finite());

    match value.as_array()?.as_slice() {
        [lng, lat] => Some([coord(lng)?, coord(lat)?]),
        _ => None,
    }
}

/// A single position; an unreadable value is absent.
pub fn opt_point<'de, D>(d: D) -> Result<Option<[f64; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(point(&Value::deserialize(d)?))
}

/// Positions aligned with another list: unreadable entries stay as `None`
/// so indexes keep matching.
pub fn point_slots<'de, D>(d: D) -> Result<Vec<Option<[f64; 2]>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items.iter().map(point).collect(),
        _ => Vec::new(),
    })
}

/// A polyline: unreadable points are dropped.
pub fn points<'de, D>(d: D) -> Result<Vec<[f64; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items.iter().filter_map(point).collect(),
        _ => Vec::new(),
    })
}
