//! Canonicalizing timestamp codec.
//!
//! Accepted input: `YYYY-MM-DDTHH:MM:SS[.fraction](Z|±HH:MM)` with 0 to 9
//! fraction digits. Output is always UTC with millisecond precision and a
//! literal `Z`, e.g. `2024-01-01T00:00:00.000Z`.
//!
//! Precision below one millisecond is dropped when a value is constructed,
//! so a decoded value always equals the decode of its own encoding.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, SubsecRound, TimeZone, Utc};
use lexwire_value::AnyValue;

use crate::constants::TIMESTAMP_FRACTION_DIGITS;
use crate::lexicon::mismatch;
use crate::{CodecError, Lexicon};

/// A UTC instant with a single canonical wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemporalValue(DateTime<Utc>);

impl TemporalValue {
    pub fn from_datetime<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self(
            instant
                .with_timezone(&Utc)
                .trunc_subsecs(TIMESTAMP_FRACTION_DIGITS),
        )
    }

    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// `None` when `ms` is outside the representable range.
    pub fn from_timestamp_millis(ms: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(ms).map(Self)
    }

    /// Parses any accepted textual form.
    pub fn parse(text: &str) -> Result<Self, CodecError> {
        if !matches_grammar(text.as_bytes()) {
            return Err(CodecError::InvalidTimestamp(text.to_owned()));
        }
        DateTime::parse_from_rfc3339(text)
            .map(Self::from_datetime)
            .map_err(|_| CodecError::InvalidTimestamp(text.to_owned()))
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn into_datetime(self) -> DateTime<Utc> {
        self.0
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// The canonical wire form.
    pub fn to_canonical_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Shape check for the accepted grammar; range checks are left to chrono.
fn matches_grammar(b: &[u8]) -> bool {
    const DATE_TIME: &[u8; 19] = b"dddd-dd-ddTdd:dd:dd";
    if b.len() < 20 {
        return false;
    }
    for (i, &pattern) in DATE_TIME.iter().enumerate() {
        let ok = match pattern {
            b'd' => b[i].is_ascii_digit(),
            literal => b[i] == literal,
        };
        if !ok {
            return false;
        }
    }

    let mut rest = &b[19..];
    if let Some(after_dot) = rest.strip_prefix(b".") {
        let digits = after_dot.iter().take_while(|c| c.is_ascii_digit()).count();
        if !(1..=9).contains(&digits) {
            return false;
        }
        rest = &after_dot[digits..];
    }

    match rest {
        [b'Z'] => true,
        [sign, h1, h2, b':', m1, m2] => {
            matches!(sign, b'+' | b'-') && [h1, h2, m1, m2].iter().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

impl fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

impl FromStr for TemporalValue {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TemporalValue {
    fn from(instant: DateTime<Tz>) -> Self {
        Self::from_datetime(instant)
    }
}

impl Lexicon for TemporalValue {
    fn decode_value(value: &AnyValue) -> Result<Self, CodecError> {
        let text = value
            .as_str()
            .ok_or_else(|| mismatch("datetime string", value))?;
        Self::parse(text)
    }

    fn encode_value(&self) -> AnyValue {
        AnyValue::Text(self.to_canonical_string())
    }
}
