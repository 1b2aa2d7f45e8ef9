//! Value types shared across the DocuSign API surfaces.
//!
//! DocuSign is not consistent about how it encodes booleans and timestamps:
//! the same field may arrive as `"True"` from one endpoint and `"true"` from
//! another, and Connect timestamps come with or without a zone designator.
//! [`DsBool`] and [`DsTime`] absorb those differences at decode time.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Format DocuSign expects for dates in query strings.
pub const QUERY_TIME_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Format of zone-less timestamps.
const LOCAL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Format a timestamp for use as a query parameter value.
pub fn query_time(t: &DateTime<Utc>) -> String {
    t.format(QUERY_TIME_FORMAT).to_string()
}

/// Tolerant boolean.
///
/// Decodes the string `"true"` in any letter case as `true` and every other
/// value (other strings, numbers, null, arrays, objects) as `false`. Decoding
/// never fails. A native JSON boolean keeps its value. Encodes as a plain
/// JSON boolean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DsBool(pub bool);

impl DsBool {
    /// Returns the wrapped value.
    pub fn get(self) -> bool {
        self.0
    }

    /// Used with `skip_serializing_if` for optional flags.
    pub fn is_false(&self) -> bool {
        !self.0
    }
}

impl From<bool> for DsBool {
    fn from(b: bool) -> Self {
        DsBool(b)
    }
}

impl From<DsBool> for bool {
    fn from(b: DsBool) -> Self {
        b.0
    }
}

impl PartialEq<bool> for DsBool {
    fn eq(&self, other: &bool) -> bool {
        self.0 == *other
    }
}

impl Serialize for DsBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.0)
    }
}

impl<'de> Deserialize<'de> for DsBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DsBoolVisitor)
    }
}

struct DsBoolVisitor;

impl<'de> Visitor<'de> for DsBoolVisitor {
    type Value = DsBool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<DsBool, E> {
        Ok(DsBool(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<DsBool, E> {
        Ok(DsBool(v.eq_ignore_ascii_case("true")))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<DsBool, E> {
        Ok(DsBool(false))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<DsBool, E> {
        Ok(DsBool(false))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<DsBool, E> {
        Ok(DsBool(false))
    }

    fn visit_unit<E: de::Error>(self) -> Result<DsBool, E> {
        Ok(DsBool(false))
    }

    fn visit_none<E: de::Error>(self) -> Result<DsBool, E> {
        Ok(DsBool(false))
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<DsBool, D::Error> {
        d.deserialize_any(DsBoolVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<DsBool, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(DsBool(false))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<DsBool, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(DsBool(false))
    }
}

/// Timestamp accepting both of DocuSign's encodings.
///
/// A value ending in `Z` is parsed as RFC 3339 with optional fractional
/// seconds. Anything else is parsed as `YYYY-MM-DDTHH:MM:SS[.fff]` without a
/// zone and taken to be UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DsTime(pub DateTime<Utc>);

impl DsTime {
    /// Parse a DocuSign timestamp.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        if s.ends_with('Z') {
            DateTime::parse_from_rfc3339(s).map(|t| DsTime(t.with_timezone(&Utc)))
        } else {
            NaiveDateTime::parse_from_str(s, LOCAL_TIME_FORMAT).map(|t| DsTime(t.and_utc()))
        }
    }

    /// The timestamp as a UTC datetime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for DsTime {
    fn from(t: DateTime<Utc>) -> Self {
        DsTime(t)
    }
}

impl FromStr for DsTime {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DsTime::parse(s)
    }
}

impl fmt::Display for DsTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for DsTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DsTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DsTime::parse(raw.trim()).map_err(de::Error::custom)
    }
}

/// Serde helpers for `Option<DsTime>` fields where DocuSign sends an empty
/// string instead of omitting the value.
///
/// ```rust,ignore
/// #[serde(default, with = "docusign_client::types::optional_time", skip_serializing_if = "Option::is_none")]
/// pub sent: Option<DsTime>,
/// ```
pub mod optional_time {
    use super::DsTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &Option<DsTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => serializer.collect_str(t),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DsTime>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => DsTime::parse(s).map(Some).map_err(de::Error::custom),
        }
    }
}

/// Name/value pair used in several JSON payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameValue {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl NameValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[derive(Debug, Deserialize, Serialize)]
    struct Flags {
        #[serde(default)]
        a: DsBool,
        #[serde(default)]
        b: DsBool,
        #[serde(default)]
        c: DsBool,
        #[serde(default)]
        d: DsBool,
    }

    #[test]
    fn test_ds_bool_strings() {
        let flags: Flags =
            serde_json::from_str(r#"{"a":"true","b":"True","c":"false","d":"TRUE"}"#).unwrap();
        assert!(flags.a.get());
        assert!(flags.b.get());
        assert!(!flags.c.get());
        assert!(flags.d.get());

        let flags: Flags = serde_json::from_str(r#"{"a":"","b":"yes","c":"t","d":" true"}"#).unwrap();
        assert!(!flags.a.get());
        assert!(!flags.b.get());
        assert!(!flags.c.get());
        assert!(!flags.d.get());
    }

    #[test]
    fn test_ds_bool_never_errors() {
        let flags: Flags =
            serde_json::from_str(r#"{"a":null,"b":1,"c":["true"],"d":{"x":"true"}}"#).unwrap();
        assert_eq!(flags.a, false);
        assert_eq!(flags.b, false);
        assert_eq!(flags.c, false);
        assert_eq!(flags.d, false);

        let flags: Flags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags.a, false);
    }

    #[test]
    fn test_ds_bool_native_and_encode() {
        let flags: Flags = serde_json::from_str(r#"{"a":true,"b":false}"#).unwrap();
        assert_eq!(flags.a, true);
        assert_eq!(flags.b, false);

        let json = serde_json::to_string(&flags).unwrap();
        assert_eq!(json, r#"{"a":true,"b":false,"c":false,"d":false}"#);
    }

    #[test]
    fn test_ds_time_zoned() {
        let t = DsTime::parse("2016-04-12T16:43:09.5530000Z").unwrap();
        assert_eq!(t.0.year(), 2016);
        assert_eq!(t.0.hour(), 16);
        assert_eq!(t.0.nanosecond(), 553_000_000);
    }

    #[test]
    fn test_ds_time_local() {
        let t = DsTime::parse("2016-04-12T09:43:09.553").unwrap();
        assert_eq!(
            t.0,
            Utc.with_ymd_and_hms(2016, 4, 12, 9, 43, 9).unwrap()
                + chrono::Duration::milliseconds(553)
        );

        let t: DsTime = "2016-04-12T09:43:09".parse().unwrap();
        assert_eq!(t.0.second(), 9);
    }

    #[test]
    fn test_ds_time_rejects_unknown_formats() {
        assert!(DsTime::parse("04/12/2016 09:43").is_err());
        assert!(DsTime::parse("2016-04-12Z").is_err());
        assert!(serde_json::from_str::<DsTime>(r#""not a time""#).is_err());
    }

    #[test]
    fn test_ds_time_round_trip() {
        let original = Utc.with_ymd_and_hms(2020, 1, 31, 23, 59, 58).unwrap()
            + chrono::Duration::microseconds(123_456);
        let json = serde_json::to_string(&DsTime(original)).unwrap();
        assert!(json.ends_with("Z\""));
        let back: DsTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back.0, original);
    }

    #[test]
    fn test_optional_time_empty() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default, with = "optional_time")]
            sent: Option<DsTime>,
        }

        let h: Holder = serde_json::from_str(r#"{"sent":""}"#).unwrap();
        assert!(h.sent.is_none());
        let h: Holder = serde_json::from_str("{}").unwrap();
        assert!(h.sent.is_none());
        let h: Holder = serde_json::from_str(r#"{"sent":"2016-04-12T09:43:09"}"#).unwrap();
        assert!(h.sent.is_some());
    }

    #[test]
    fn test_query_time() {
        let t = Utc.with_ymd_and_hms(2015, 3, 7, 8, 5, 0).unwrap();
        assert_eq!(query_time(&t), "03/07/2015 08:05");
    }
}
