//! Timestamp morpher.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{MorphError, MorphResult};
use crate::kind::{TargetKind, ValueKind};
use crate::morpher::Morpher;
use crate::value::Value;

/// Morphs strings to timestamps by trying a list of formats in order.
///
/// Formats use chrono's strftime syntax. A date-only format (no time
/// fields) parses as midnight of that date. Timestamps pass through; any
/// other kind renders to a string first, which in practice only matches for
/// string-shaped inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimestampMorpher {
    formats: Vec<String>,
    default: Option<Option<NaiveDateTime>>,
}

impl TimestampMorpher {
    /// Creates a morpher with the given format list and no default.
    pub fn new(formats: Vec<String>) -> Self {
        Self {
            formats,
            default: None,
        }
    }

    /// Creates a morpher with the given format list and a default; `None`
    /// is the explicit null default.
    pub fn with_default(formats: Vec<String>, default: Option<NaiveDateTime>) -> Self {
        Self {
            formats,
            default: Some(default),
        }
    }

    /// Returns true if this morpher substitutes a default on failure.
    pub fn use_default(&self) -> bool {
        self.default.is_some()
    }

    /// The formats tried, in order.
    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    fn default_result(&self) -> Option<Value> {
        self.default
            .map(|d| d.map(Value::Timestamp).unwrap_or(Value::Null))
    }

    fn parse(&self, text: &str) -> Option<NaiveDateTime> {
        for format in &self.formats {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
                return Some(parsed);
            }
            // Date-only formats carry no time fields; midnight is implied.
            if let Ok(date) = NaiveDate::parse_from_str(text, format) {
                return date.and_hms_opt(0, 0, 0);
            }
        }
        None
    }
}

impl Morpher for TimestampMorpher {
    fn supports(&self, kind: ValueKind) -> bool {
        !kind.is_array()
    }

    fn target(&self) -> TargetKind {
        TargetKind::Timestamp
    }

    fn morph(&self, value: Value) -> MorphResult<Value> {
        match value {
            Value::Null => self
                .default_result()
                .ok_or_else(|| MorphError::null_value(self.target())),
            Value::Array(_) => Err(MorphError::unsupported(ValueKind::Array, self.target())),
            Value::Timestamp(ts) => Ok(Value::Timestamp(ts)),
            value => match self.parse(&value.to_string()) {
                Some(ts) => Ok(Value::Timestamp(ts)),
                None => self
                    .default_result()
                    .ok_or_else(|| MorphError::coercion(&value, value.kind(), self.target())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn morpher() -> TimestampMorpher {
        TimestampMorpher::new(vec![
            "%Y-%m-%d %H:%M:%S".to_string(),
            "%d/%m/%Y".to_string(),
        ])
    }

    #[test]
    fn test_timestamp_passes_through() {
        let value = Value::Timestamp(ts("2024-05-01 10:30:00"));
        assert_eq!(morpher().morph(value.clone()).unwrap(), value);
    }

    #[test]
    fn test_formats_tried_in_order() {
        assert_eq!(
            morpher()
                .morph(Value::Str("2024-05-01 10:30:00".into()))
                .unwrap(),
            Value::Timestamp(ts("2024-05-01 10:30:00"))
        );
        // Second, date-only format: implied midnight.
        assert_eq!(
            morpher().morph(Value::Str("01/05/2024".into())).unwrap(),
            Value::Timestamp(ts("2024-05-01 00:00:00"))
        );
    }

    #[test]
    fn test_unparsable_fails_or_defaults() {
        let strict = morpher();
        let err = strict.morph(Value::Str("yesterday".into())).unwrap_err();
        assert!(matches!(err, MorphError::Coercion { .. }));

        let fallback = ts("1970-01-01 00:00:00");
        let lenient = TimestampMorpher::with_default(
            vec!["%Y-%m-%d %H:%M:%S".to_string()],
            Some(fallback),
        );
        assert_eq!(
            lenient.morph(Value::Str("yesterday".into())).unwrap(),
            Value::Timestamp(fallback)
        );
    }

    #[test]
    fn test_null_handling() {
        assert!(morpher().morph(Value::Null).is_err());
        let lenient = TimestampMorpher::with_default(vec![], None);
        assert_eq!(lenient.morph(Value::Null).unwrap(), Value::Null);
    }
}
