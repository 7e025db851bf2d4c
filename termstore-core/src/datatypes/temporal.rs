//! Temporal datatypes: dates, times, Gregorian fragments, and durations.
//!
//! Date/time values are chrono-backed. Timestamps carry an optional UTC
//! offset in seconds; XSD's partial order on offset-less vs offset-carrying
//! timestamps is reflected by `compare` returning `None` for mixed pairs.
//!
//! Durations are stored as `(total months, total microseconds)`; the two
//! single-axis duration types each use one component and are totally
//! ordered, while full `xsd:duration` is partially ordered.

use super::{ComparableDatatype, Datatype, Inlineable, LiteralValue, inline};
use crate::error::ParseError;
use crate::ident::{tags, LiteralTag};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::cmp::Ordering;

const MICROS_PER_SEC: i64 = 1_000_000;
const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SEC;

// ============================================================================
// Lexical helpers
// ============================================================================

/// Split a trailing timezone designator (`Z` or `±HH:MM`) off a lexical form.
/// Returns the remaining prefix and the offset in seconds.
fn split_offset(lexical: &str) -> (&str, Option<i32>) {
    if let Some(rest) = lexical.strip_suffix('Z') {
        return (rest, Some(0));
    }
    if lexical.len() >= 6 && lexical.is_char_boundary(lexical.len() - 6) {
        let (head, tail) = lexical.split_at(lexical.len() - 6);
        let bytes = tail.as_bytes();
        if (bytes[0] == b'+' || bytes[0] == b'-') && bytes[3] == b':' {
            let hours: i32 = match tail[1..3].parse() {
                Ok(h) => h,
                Err(_) => return (lexical, None),
            };
            let minutes: i32 = match tail[4..6].parse() {
                Ok(m) => m,
                Err(_) => return (lexical, None),
            };
            let sign = if bytes[0] == b'-' { -1 } else { 1 };
            return (head, Some(sign * (hours * 3600 + minutes * 60)));
        }
    }
    (lexical, None)
}

/// Format an offset as a canonical timezone designator (`Z` for UTC).
fn format_offset(offset: i32) -> String {
    if offset == 0 {
        return "Z".into();
    }
    let sign = if offset < 0 { '-' } else { '+' };
    let abs = offset.abs();
    format!("{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

/// Canonical `HH:MM:SS[.fff]` with trailing fraction zeros removed.
fn format_time(time: &NaiveTime) -> String {
    let nanos = time.nanosecond();
    if nanos == 0 {
        time.format("%H:%M:%S").to_string()
    } else {
        let s = time.format("%H:%M:%S%.f").to_string();
        s.trim_end_matches('0').to_string()
    }
}

fn format_year(year: i32) -> String {
    if year < 0 {
        format!("-{:04}", -year)
    } else {
        format!("{:04}", year)
    }
}

// ============================================================================
// xsd:date
// ============================================================================

/// xsd:date (timezone-less; offset-carrying forms are not accepted)
pub struct Date;

impl Datatype for Date {
    const IRI: &'static str = termstore_vocab::xsd::DATE;
    const TAG: LiteralTag = tags::DATE;
    type Value = NaiveDate;

    fn parse(lexical: &str) -> Result<NaiveDate, ParseError> {
        NaiveDate::parse_from_str(lexical, "%Y-%m-%d")
            .map_err(|_| ParseError::new(Self::IRI, lexical))
    }

    fn canonical(value: &NaiveDate) -> String {
        value.format("%Y-%m-%d").to_string()
    }

    fn wrap(value: NaiveDate) -> LiteralValue {
        LiteralValue::Date(value)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<NaiveDate> {
        match value {
            LiteralValue::Date(v) => Some(*v),
            _ => None,
        }
    }
}

impl ComparableDatatype for Date {
    fn compare(a: &NaiveDate, b: &NaiveDate) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

impl Inlineable for Date {
    fn try_inline(value: &NaiveDate) -> Option<u64> {
        inline::try_pack_signed(value.num_days_from_ce() as i64)
    }

    fn from_inlined(bits: u64) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(inline::unpack_signed(bits) as i32)
            .expect("inlined date bits out of range")
    }
}

// ============================================================================
// xsd:time
// ============================================================================

/// xsd:time (timezone-less)
pub struct Time;

impl Datatype for Time {
    const IRI: &'static str = termstore_vocab::xsd::TIME;
    const TAG: LiteralTag = tags::TIME;
    type Value = NaiveTime;

    fn parse(lexical: &str) -> Result<NaiveTime, ParseError> {
        NaiveTime::parse_from_str(lexical, "%H:%M:%S%.f")
            .map_err(|_| ParseError::new(Self::IRI, lexical))
    }

    fn canonical(value: &NaiveTime) -> String {
        format_time(value)
    }

    fn wrap(value: NaiveTime) -> LiteralValue {
        LiteralValue::Time(value)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<NaiveTime> {
        match value {
            LiteralValue::Time(v) => Some(*v),
            _ => None,
        }
    }
}

impl ComparableDatatype for Time {
    fn compare(a: &NaiveTime, b: &NaiveTime) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

impl Inlineable for Time {
    fn try_inline(value: &NaiveTime) -> Option<u64> {
        let nanos = value.nanosecond() as i64;
        if nanos % 1000 != 0 {
            // sub-microsecond precision does not fit the payload
            return None;
        }
        let micros =
            value.num_seconds_from_midnight() as i64 * MICROS_PER_SEC + nanos / 1000;
        inline::try_pack_unsigned(micros as u64)
    }

    fn from_inlined(bits: u64) -> NaiveTime {
        let micros = inline::unpack_unsigned(bits);
        let secs = (micros / MICROS_PER_SEC as u64) as u32;
        let nanos = ((micros % MICROS_PER_SEC as u64) * 1000) as u32;
        NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos)
            .expect("inlined time bits out of range")
    }
}

// ============================================================================
// xsd:dateTime / xsd:dateTimeStamp
// ============================================================================

fn parse_date_time(
    iri: &'static str,
    lexical: &str,
) -> Result<(NaiveDateTime, Option<i32>), ParseError> {
    let (body, offset) = split_offset(lexical);
    let dt = NaiveDateTime::parse_from_str(body, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|_| ParseError::new(iri, lexical))?;
    Ok((dt, offset))
}

fn canonical_date_time(value: &(NaiveDateTime, Option<i32>)) -> String {
    let (dt, offset) = value;
    let mut s = format!("{}T{}", dt.format("%Y-%m-%d"), format_time(&dt.time()));
    if let Some(offset) = offset {
        s.push_str(&format_offset(*offset));
    }
    s
}

/// Compare timestamps on the global timeline. Mixed offset-less /
/// offset-carrying pairs are incomparable.
fn compare_date_time(
    a: &(NaiveDateTime, Option<i32>),
    b: &(NaiveDateTime, Option<i32>),
) -> Option<Ordering> {
    match (a.1, b.1) {
        (None, None) => Some(a.0.cmp(&b.0)),
        (Some(oa), Some(ob)) => {
            let ia = a.0 - chrono::Duration::seconds(oa as i64);
            let ib = b.0 - chrono::Duration::seconds(ob as i64);
            Some(ia.cmp(&ib))
        }
        _ => None,
    }
}

/// xsd:dateTime: local timestamp with optional UTC offset
pub struct DateTime;

impl Datatype for DateTime {
    const IRI: &'static str = termstore_vocab::xsd::DATE_TIME;
    const TAG: LiteralTag = tags::DATE_TIME;
    type Value = (NaiveDateTime, Option<i32>);

    fn parse(lexical: &str) -> Result<Self::Value, ParseError> {
        parse_date_time(Self::IRI, lexical)
    }

    fn canonical(value: &Self::Value) -> String {
        canonical_date_time(value)
    }

    fn wrap(value: Self::Value) -> LiteralValue {
        LiteralValue::DateTime(value.0, value.1)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<Self::Value> {
        match value {
            LiteralValue::DateTime(dt, offset) => Some((*dt, *offset)),
            _ => None,
        }
    }
}

impl ComparableDatatype for DateTime {
    fn compare(a: &Self::Value, b: &Self::Value) -> Option<Ordering> {
        compare_date_time(a, b)
    }
}

/// xsd:dateTimeStamp: like dateTime but the offset is required
pub struct DateTimeStamp;

impl Datatype for DateTimeStamp {
    const IRI: &'static str = termstore_vocab::xsd::DATE_TIME_STAMP;
    const TAG: LiteralTag = tags::DATE_TIME_STAMP;
    type Value = (NaiveDateTime, i32);

    fn parse(lexical: &str) -> Result<Self::Value, ParseError> {
        match parse_date_time(Self::IRI, lexical)? {
            (dt, Some(offset)) => Ok((dt, offset)),
            (_, None) => Err(ParseError::new(Self::IRI, lexical)),
        }
    }

    fn canonical(value: &Self::Value) -> String {
        canonical_date_time(&(value.0, Some(value.1)))
    }

    fn wrap(value: Self::Value) -> LiteralValue {
        LiteralValue::DateTime(value.0, Some(value.1))
    }

    fn try_unwrap(value: &LiteralValue) -> Option<Self::Value> {
        match value {
            LiteralValue::DateTime(dt, Some(offset)) => Some((*dt, *offset)),
            _ => None,
        }
    }
}

impl ComparableDatatype for DateTimeStamp {
    fn compare(a: &Self::Value, b: &Self::Value) -> Option<Ordering> {
        compare_date_time(&(a.0, Some(a.1)), &(b.0, Some(b.1)))
    }
}

// ============================================================================
// Gregorian fragments
// ============================================================================

fn parse_fixed_digits(s: &str, n: usize) -> Option<u32> {
    if s.len() != n || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// xsd:gYear
pub struct GYear;

impl Datatype for GYear {
    const IRI: &'static str = termstore_vocab::xsd::G_YEAR;
    const TAG: LiteralTag = tags::G_YEAR;
    type Value = i32;

    fn parse(lexical: &str) -> Result<i32, ParseError> {
        let (neg, digits) = match lexical.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, lexical),
        };
        if digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::new(Self::IRI, lexical));
        }
        let year: i32 = digits
            .parse()
            .map_err(|_| ParseError::new(Self::IRI, lexical))?;
        Ok(if neg { -year } else { year })
    }

    fn canonical(value: &i32) -> String {
        format_year(*value)
    }

    fn wrap(value: i32) -> LiteralValue {
        LiteralValue::GYear(value)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<i32> {
        match value {
            LiteralValue::GYear(v) => Some(*v),
            _ => None,
        }
    }
}

impl ComparableDatatype for GYear {
    fn compare(a: &i32, b: &i32) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

impl Inlineable for GYear {
    fn try_inline(value: &i32) -> Option<u64> {
        inline::try_pack_signed(*value as i64)
    }

    fn from_inlined(bits: u64) -> i32 {
        inline::unpack_signed(bits) as i32
    }
}

/// xsd:gMonth (`--MM`)
pub struct GMonth;

impl Datatype for GMonth {
    const IRI: &'static str = termstore_vocab::xsd::G_MONTH;
    const TAG: LiteralTag = tags::G_MONTH;
    type Value = u8;

    fn parse(lexical: &str) -> Result<u8, ParseError> {
        lexical
            .strip_prefix("--")
            .and_then(|rest| parse_fixed_digits(rest, 2))
            .filter(|&m| (1..=12).contains(&m))
            .map(|m| m as u8)
            .ok_or_else(|| ParseError::new(Self::IRI, lexical))
    }

    fn canonical(value: &u8) -> String {
        format!("--{:02}", value)
    }

    fn wrap(value: u8) -> LiteralValue {
        LiteralValue::GMonth(value)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<u8> {
        match value {
            LiteralValue::GMonth(v) => Some(*v),
            _ => None,
        }
    }
}

impl ComparableDatatype for GMonth {
    fn compare(a: &u8, b: &u8) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

impl Inlineable for GMonth {
    fn try_inline(value: &u8) -> Option<u64> {
        Some(*value as u64)
    }

    fn from_inlined(bits: u64) -> u8 {
        bits as u8
    }
}

/// xsd:gDay (`---DD`)
pub struct GDay;

impl Datatype for GDay {
    const IRI: &'static str = termstore_vocab::xsd::G_DAY;
    const TAG: LiteralTag = tags::G_DAY;
    type Value = u8;

    fn parse(lexical: &str) -> Result<u8, ParseError> {
        lexical
            .strip_prefix("---")
            .and_then(|rest| parse_fixed_digits(rest, 2))
            .filter(|&d| (1..=31).contains(&d))
            .map(|d| d as u8)
            .ok_or_else(|| ParseError::new(Self::IRI, lexical))
    }

    fn canonical(value: &u8) -> String {
        format!("---{:02}", value)
    }

    fn wrap(value: u8) -> LiteralValue {
        LiteralValue::GDay(value)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<u8> {
        match value {
            LiteralValue::GDay(v) => Some(*v),
            _ => None,
        }
    }
}

impl ComparableDatatype for GDay {
    fn compare(a: &u8, b: &u8) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

impl Inlineable for GDay {
    fn try_inline(value: &u8) -> Option<u64> {
        Some(*value as u64)
    }

    fn from_inlined(bits: u64) -> u8 {
        bits as u8
    }
}

/// xsd:gYearMonth (`YYYY-MM`)
pub struct GYearMonth;

impl Datatype for GYearMonth {
    const IRI: &'static str = termstore_vocab::xsd::G_YEAR_MONTH;
    const TAG: LiteralTag = tags::G_YEAR_MONTH;
    type Value = (i32, u8);

    fn parse(lexical: &str) -> Result<(i32, u8), ParseError> {
        let err = || ParseError::new(Self::IRI, lexical);
        let (year_part, month_part) = lexical.rsplit_once('-').ok_or_else(err)?;
        if year_part.is_empty() || year_part == "-" {
            return Err(err());
        }
        let year = GYear::parse(year_part).map_err(|_| err())?;
        let month = parse_fixed_digits(month_part, 2)
            .filter(|&m| (1..=12).contains(&m))
            .ok_or_else(err)?;
        Ok((year, month as u8))
    }

    fn canonical(value: &(i32, u8)) -> String {
        format!("{}-{:02}", format_year(value.0), value.1)
    }

    fn wrap(value: (i32, u8)) -> LiteralValue {
        LiteralValue::GYearMonth(value.0, value.1)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<(i32, u8)> {
        match value {
            LiteralValue::GYearMonth(y, m) => Some((*y, *m)),
            _ => None,
        }
    }
}

impl ComparableDatatype for GYearMonth {
    fn compare(a: &(i32, u8), b: &(i32, u8)) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

impl Inlineable for GYearMonth {
    fn try_inline(value: &(i32, u8)) -> Option<u64> {
        inline::try_pack_signed(value.0 as i64 * 12 + (value.1 as i64 - 1))
    }

    fn from_inlined(bits: u64) -> (i32, u8) {
        let v = inline::unpack_signed(bits);
        ((v.div_euclid(12)) as i32, (v.rem_euclid(12) + 1) as u8)
    }
}

/// xsd:gMonthDay (`--MM-DD`)
pub struct GMonthDay;

impl Datatype for GMonthDay {
    const IRI: &'static str = termstore_vocab::xsd::G_MONTH_DAY;
    const TAG: LiteralTag = tags::G_MONTH_DAY;
    type Value = (u8, u8);

    fn parse(lexical: &str) -> Result<(u8, u8), ParseError> {
        let err = || ParseError::new(Self::IRI, lexical);
        let rest = lexical.strip_prefix("--").ok_or_else(err)?;
        let (month_part, day_part) = rest.split_once('-').ok_or_else(err)?;
        let month = parse_fixed_digits(month_part, 2)
            .filter(|&m| (1..=12).contains(&m))
            .ok_or_else(err)?;
        let day = parse_fixed_digits(day_part, 2)
            .filter(|&d| (1..=31).contains(&d))
            .ok_or_else(err)?;
        Ok((month as u8, day as u8))
    }

    fn canonical(value: &(u8, u8)) -> String {
        format!("--{:02}-{:02}", value.0, value.1)
    }

    fn wrap(value: (u8, u8)) -> LiteralValue {
        LiteralValue::GMonthDay(value.0, value.1)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<(u8, u8)> {
        match value {
            LiteralValue::GMonthDay(m, d) => Some((*m, *d)),
            _ => None,
        }
    }
}

impl ComparableDatatype for GMonthDay {
    fn compare(a: &(u8, u8), b: &(u8, u8)) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

impl Inlineable for GMonthDay {
    fn try_inline(value: &(u8, u8)) -> Option<u64> {
        Some((value.0 as u64 - 1) * 31 + (value.1 as u64 - 1))
    }

    fn from_inlined(bits: u64) -> (u8, u8) {
        ((bits / 31 + 1) as u8, (bits % 31 + 1) as u8)
    }
}

// ============================================================================
// Durations
// ============================================================================

/// Parse `PnYnMnDTnHnMn(.f)S` into (months, micros). Both components carry
/// the leading sign.
fn parse_duration_lexical(
    iri: &'static str,
    lexical: &str,
    allow_months: bool,
    allow_micros: bool,
) -> Result<(i64, i64), ParseError> {
    let err = || ParseError::new(iri, lexical);

    let (negative, rest) = match lexical.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, lexical),
    };
    let mut rest = rest.strip_prefix('P').ok_or_else(err)?;

    let mut months: i64 = 0;
    let mut micros: i64 = 0;
    let mut seen_any = false;

    // date components: Y, M, D
    fn take_number(rest: &mut &str) -> Option<(i64, char)> {
        let digits_end = rest.bytes().position(|b| !b.is_ascii_digit())?;
        if digits_end == 0 {
            return None;
        }
        let value: i64 = rest[..digits_end].parse().ok()?;
        let designator = rest.as_bytes()[digits_end];
        if !designator.is_ascii() {
            return None;
        }
        *rest = &rest[digits_end + 1..];
        Some((value, designator as char))
    }

    let mut date_part = rest;
    if let Some(t_pos) = rest.find('T') {
        date_part = &rest[..t_pos];
        rest = &rest[t_pos + 1..];
        if rest.is_empty() {
            return Err(err());
        }
    } else {
        rest = "";
    }

    let mut dp = date_part;
    let mut last_rank = 0u8;
    while !dp.is_empty() {
        let (value, designator) = take_number(&mut dp).ok_or_else(err)?;
        let rank = match designator {
            'Y' => 1,
            'M' => 2,
            'D' => 3,
            _ => return Err(err()),
        };
        if rank <= last_rank {
            return Err(err());
        }
        last_rank = rank;
        seen_any = true;
        match designator {
            'Y' => months += value * 12,
            'M' => months += value,
            'D' => micros += value * MICROS_PER_DAY,
            _ => unreachable!(),
        }
    }

    // time components: H, M, S (S may be fractional)
    let mut tp = rest;
    let mut last_rank = 0u8;
    while !tp.is_empty() {
        let digits_end = tp
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .ok_or_else(err)?;
        if digits_end == 0 {
            return Err(err());
        }
        let whole: i64 = tp[..digits_end].parse().map_err(|_| err())?;
        let designator = tp.as_bytes()[digits_end] as char;
        match designator {
            'H' if last_rank < 1 => {
                last_rank = 1;
                micros += whole * 3600 * MICROS_PER_SEC;
                tp = &tp[digits_end + 1..];
            }
            'M' if last_rank < 2 => {
                last_rank = 2;
                micros += whole * 60 * MICROS_PER_SEC;
                tp = &tp[digits_end + 1..];
            }
            'S' if last_rank < 3 => {
                last_rank = 3;
                micros += whole * MICROS_PER_SEC;
                tp = &tp[digits_end + 1..];
            }
            '.' if last_rank < 3 => {
                // fractional seconds: digits '.' digits 'S'
                let frac_str = &tp[digits_end + 1..];
                let frac_end = frac_str
                    .bytes()
                    .position(|b| !b.is_ascii_digit())
                    .ok_or_else(err)?;
                if frac_end == 0 || frac_str.as_bytes()[frac_end] != b'S' {
                    return Err(err());
                }
                last_rank = 3;
                let mut frac_micros = 0i64;
                let mut scale = MICROS_PER_SEC / 10;
                for b in frac_str[..frac_end].bytes().take(6) {
                    frac_micros += (b - b'0') as i64 * scale;
                    scale /= 10;
                }
                micros += whole * MICROS_PER_SEC + frac_micros;
                tp = &frac_str[frac_end + 1..];
            }
            _ => return Err(err()),
        }
        seen_any = true;
    }

    if !seen_any {
        return Err(err());
    }
    if (!allow_months && months != 0) || (!allow_micros && micros != 0) {
        return Err(err());
    }
    if negative {
        months = -months;
        micros = -micros;
    }
    Ok((months, micros))
}

/// Canonical duration form from (months, micros). `PT0S` for zero (or `P0M`
/// when only the month axis is in use).
fn canonical_duration(months: i64, micros: i64, months_only: bool) -> String {
    if months == 0 && micros == 0 {
        return if months_only { "P0M".into() } else { "PT0S".into() };
    }

    let negative = months < 0 || micros < 0;
    let (months, micros) = (months.abs(), micros.abs());

    let mut s = String::new();
    if negative {
        s.push('-');
    }
    s.push('P');

    let years = months / 12;
    let rem_months = months % 12;
    if years != 0 {
        s.push_str(&format!("{}Y", years));
    }
    if rem_months != 0 {
        s.push_str(&format!("{}M", rem_months));
    }

    let days = micros / MICROS_PER_DAY;
    let mut rem = micros % MICROS_PER_DAY;
    if days != 0 {
        s.push_str(&format!("{}D", days));
    }
    if rem != 0 {
        s.push('T');
        let hours = rem / (3600 * MICROS_PER_SEC);
        rem %= 3600 * MICROS_PER_SEC;
        let minutes = rem / (60 * MICROS_PER_SEC);
        rem %= 60 * MICROS_PER_SEC;
        let secs = rem / MICROS_PER_SEC;
        let frac = rem % MICROS_PER_SEC;
        if hours != 0 {
            s.push_str(&format!("{}H", hours));
        }
        if minutes != 0 {
            s.push_str(&format!("{}M", minutes));
        }
        if secs != 0 || frac != 0 {
            if frac != 0 {
                let frac_str = format!("{:06}", frac);
                s.push_str(&format!("{}.{}S", secs, frac_str.trim_end_matches('0')));
            } else {
                s.push_str(&format!("{}S", secs));
            }
        }
    }
    s
}

/// xsd:duration: partially ordered (P1M vs P30D is unordered)
pub struct Duration;

impl Datatype for Duration {
    const IRI: &'static str = termstore_vocab::xsd::DURATION;
    const TAG: LiteralTag = tags::DURATION;
    type Value = (i64, i64);

    fn parse(lexical: &str) -> Result<(i64, i64), ParseError> {
        parse_duration_lexical(Self::IRI, lexical, true, true)
    }

    fn canonical(value: &(i64, i64)) -> String {
        canonical_duration(value.0, value.1, false)
    }

    fn wrap(value: (i64, i64)) -> LiteralValue {
        LiteralValue::Duration(value.0, value.1)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<(i64, i64)> {
        match value {
            LiteralValue::Duration(m, u) => Some((*m, *u)),
            _ => None,
        }
    }
}

impl ComparableDatatype for Duration {
    fn compare(a: &(i64, i64), b: &(i64, i64)) -> Option<Ordering> {
        let months = a.0.cmp(&b.0);
        let micros = a.1.cmp(&b.1);
        match (months, micros) {
            (Ordering::Equal, other) => Some(other),
            (other, Ordering::Equal) => Some(other),
            (x, y) if x == y => Some(x),
            _ => None,
        }
    }
}

/// xsd:yearMonthDuration: total months, totally ordered
pub struct YearMonthDuration;

impl Datatype for YearMonthDuration {
    const IRI: &'static str = termstore_vocab::xsd::YEAR_MONTH_DURATION;
    const TAG: LiteralTag = tags::YEAR_MONTH_DURATION;
    type Value = i64;

    fn parse(lexical: &str) -> Result<i64, ParseError> {
        parse_duration_lexical(Self::IRI, lexical, true, false).map(|(months, _)| months)
    }

    fn canonical(value: &i64) -> String {
        canonical_duration(*value, 0, true)
    }

    fn wrap(value: i64) -> LiteralValue {
        LiteralValue::YearMonthDuration(value)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<i64> {
        match value {
            LiteralValue::YearMonthDuration(v) => Some(*v),
            _ => None,
        }
    }
}

impl ComparableDatatype for YearMonthDuration {
    fn compare(a: &i64, b: &i64) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

impl Inlineable for YearMonthDuration {
    fn try_inline(value: &i64) -> Option<u64> {
        inline::try_pack_signed(*value)
    }

    fn from_inlined(bits: u64) -> i64 {
        inline::unpack_signed(bits)
    }
}

/// xsd:dayTimeDuration: total microseconds, totally ordered
pub struct DayTimeDuration;

impl Datatype for DayTimeDuration {
    const IRI: &'static str = termstore_vocab::xsd::DAY_TIME_DURATION;
    const TAG: LiteralTag = tags::DAY_TIME_DURATION;
    type Value = i64;

    fn parse(lexical: &str) -> Result<i64, ParseError> {
        parse_duration_lexical(Self::IRI, lexical, false, true).map(|(_, micros)| micros)
    }

    fn canonical(value: &i64) -> String {
        canonical_duration(0, *value, false)
    }

    fn wrap(value: i64) -> LiteralValue {
        LiteralValue::DayTimeDuration(value)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<i64> {
        match value {
            LiteralValue::DayTimeDuration(v) => Some(*v),
            _ => None,
        }
    }
}

impl ComparableDatatype for DayTimeDuration {
    fn compare(a: &i64, b: &i64) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

impl Inlineable for DayTimeDuration {
    fn try_inline(value: &i64) -> Option<u64> {
        inline::try_pack_signed(*value)
    }

    fn from_inlined(bits: u64) -> i64 {
        inline::unpack_signed(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_round_trip() {
        let d = Date::parse("2024-02-29").unwrap();
        assert_eq!(Date::canonical(&d), "2024-02-29");
        assert!(Date::parse("2023-02-29").is_err());
        assert!(Date::parse("2024-13-01").is_err());
        assert!(Date::parse("not a date").is_err());
    }

    #[test]
    fn test_date_inline_round_trip() {
        for lex in ["1970-01-01", "2024-06-15", "0001-01-01"] {
            let d = Date::parse(lex).unwrap();
            let bits = Date::try_inline(&d).unwrap();
            assert_eq!(Date::from_inlined(bits), d);
        }
    }

    #[test]
    fn test_time_canonical_trims_fraction() {
        let t = Time::parse("10:30:00").unwrap();
        assert_eq!(Time::canonical(&t), "10:30:00");
        let t = Time::parse("10:30:00.500").unwrap();
        assert_eq!(Time::canonical(&t), "10:30:00.5");
    }

    #[test]
    fn test_time_inline_round_trip() {
        let t = Time::parse("23:59:59.999999").unwrap();
        let bits = Time::try_inline(&t).unwrap();
        assert_eq!(Time::from_inlined(bits), t);
    }

    #[test]
    fn test_date_time_offsets() {
        let (_, offset) = DateTime::parse("2001-10-26T21:32:52Z").unwrap();
        assert_eq!(offset, Some(0));
        let (_, offset) = DateTime::parse("2001-10-26T21:32:52+02:00").unwrap();
        assert_eq!(offset, Some(7200));
        let (_, offset) = DateTime::parse("2001-10-26T21:32:52").unwrap();
        assert_eq!(offset, None);
    }

    #[test]
    fn test_date_time_canonical() {
        let v = DateTime::parse("2001-10-26T21:32:52.00Z").unwrap();
        assert_eq!(DateTime::canonical(&v), "2001-10-26T21:32:52Z");
        let v = DateTime::parse("2001-10-26T21:32:52-05:30").unwrap();
        assert_eq!(DateTime::canonical(&v), "2001-10-26T21:32:52-05:30");
    }

    #[test]
    fn test_date_time_comparison() {
        let utc = DateTime::parse("2001-10-26T12:00:00Z").unwrap();
        let plus2 = DateTime::parse("2001-10-26T14:00:00+02:00").unwrap();
        assert_eq!(DateTime::compare(&utc, &plus2), Some(Ordering::Equal));

        let naive = DateTime::parse("2001-10-26T12:00:00").unwrap();
        assert_eq!(DateTime::compare(&utc, &naive), None);
    }

    #[test]
    fn test_date_time_stamp_requires_offset() {
        assert!(DateTimeStamp::parse("2001-10-26T21:32:52Z").is_ok());
        assert!(DateTimeStamp::parse("2001-10-26T21:32:52").is_err());
    }

    #[test]
    fn test_g_year() {
        assert_eq!(GYear::parse("2024"), Ok(2024));
        assert_eq!(GYear::parse("-0042"), Ok(-42));
        assert!(GYear::parse("99").is_err());
        assert_eq!(GYear::canonical(&-42), "-0042");
        assert_eq!(GYear::canonical(&2024), "2024");
    }

    #[test]
    fn test_g_fragments_parse_and_canonical() {
        assert_eq!(GMonth::parse("--04"), Ok(4));
        assert_eq!(GMonth::canonical(&4), "--04");
        assert!(GMonth::parse("--13").is_err());
        assert!(GMonth::parse("04").is_err());

        assert_eq!(GDay::parse("---31"), Ok(31));
        assert!(GDay::parse("---32").is_err());

        assert_eq!(GYearMonth::parse("2024-06"), Ok((2024, 6)));
        assert_eq!(GYearMonth::parse("-0042-01"), Ok((-42, 1)));
        assert_eq!(GYearMonth::canonical(&(2024, 6)), "2024-06");

        assert_eq!(GMonthDay::parse("--02-29"), Ok((2, 29)));
        assert_eq!(GMonthDay::canonical(&(2, 29)), "--02-29");
        assert!(GMonthDay::parse("--00-29").is_err());
    }

    #[test]
    fn test_g_year_month_inline_round_trip() {
        for v in [(2024, 6u8), (-42, 1), (0, 12)] {
            let bits = GYearMonth::try_inline(&v).unwrap();
            assert_eq!(GYearMonth::from_inlined(bits), v);
        }
    }

    #[test]
    fn test_duration_parse() {
        assert_eq!(Duration::parse("P1Y2M"), Ok((14, 0)));
        assert_eq!(
            Duration::parse("P1DT2H3M4S"),
            Ok((0, MICROS_PER_DAY + 2 * 3_600_000_000 + 3 * 60_000_000 + 4_000_000))
        );
        assert_eq!(Duration::parse("-P1M"), Ok((-1, 0)));
        assert_eq!(Duration::parse("PT0.5S"), Ok((0, 500_000)));
        assert!(Duration::parse("P").is_err());
        assert!(Duration::parse("PT").is_err());
        assert!(Duration::parse("1Y").is_err());
        // misordered designators
        assert!(Duration::parse("P1M2Y").is_err());
    }

    #[test]
    fn test_duration_canonical_normalizes() {
        let v = Duration::parse("P14M").unwrap();
        assert_eq!(Duration::canonical(&v), "P1Y2M");
        let v = Duration::parse("PT25H").unwrap();
        assert_eq!(Duration::canonical(&v), "P1DT1H");
        let v = Duration::parse("PT0S").unwrap();
        assert_eq!(Duration::canonical(&v), "PT0S");
        let v = Duration::parse("-PT90S").unwrap();
        assert_eq!(Duration::canonical(&v), "-PT1M30S");
    }

    #[test]
    fn test_duration_partial_order() {
        let month = Duration::parse("P1M").unwrap();
        let thirty_days = Duration::parse("P30D").unwrap();
        assert_eq!(Duration::compare(&month, &thirty_days), None);

        let one_day = Duration::parse("P1D").unwrap();
        let two_days = Duration::parse("P2D").unwrap();
        assert_eq!(Duration::compare(&one_day, &two_days), Some(Ordering::Less));
    }

    #[test]
    fn test_single_axis_durations() {
        assert_eq!(YearMonthDuration::parse("P1Y2M"), Ok(14));
        assert!(YearMonthDuration::parse("P1D").is_err());
        assert_eq!(YearMonthDuration::canonical(&14), "P1Y2M");
        assert_eq!(YearMonthDuration::canonical(&0), "P0M");

        assert_eq!(DayTimeDuration::parse("PT1M"), Ok(60_000_000));
        assert!(DayTimeDuration::parse("P1M").is_err());
        assert_eq!(DayTimeDuration::canonical(&60_000_000), "PT1M");
    }

    #[test]
    fn test_duration_inline_round_trip() {
        let v = YearMonthDuration::parse("-P2Y").unwrap();
        let bits = YearMonthDuration::try_inline(&v).unwrap();
        assert_eq!(YearMonthDuration::from_inlined(bits), v);

        // ~50 days in micros still fits; a year of micros does not
        assert!(DayTimeDuration::try_inline(&(40 * MICROS_PER_DAY)).is_some());
        assert!(DayTimeDuration::try_inline(&(400 * MICROS_PER_DAY)).is_none());
    }
}
