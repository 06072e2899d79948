use crate::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};

pub const DEFAULT_DATE_LAYOUT: &str = "%Y-%m-%d %H:%M";

/// Clock used to render timestamps and to interpret date bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timezone {
    #[default]
    Local,
    Utc,
}

/// A validated strftime layout bound to a timezone.
#[derive(Debug, Clone)]
pub struct DateFormat {
    layout: String,
    timezone: Timezone,
}

impl DateFormat {
    /// Validate `layout` up front; chrono only reports bad specifiers while formatting.
    pub fn new(layout: impl Into<String>, timezone: Timezone) -> Result<Self> {
        let layout = layout.into();
        if StrftimeItems::new(&layout).any(|item| matches!(item, Item::Error)) {
            return Err(Error::InvalidDateLayout(layout));
        }
        Ok(Self { layout, timezone })
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }

    /// Format epoch seconds; out-of-range values render empty.
    pub fn format(&self, timestamp: i64) -> String {
        let Some(utc) = DateTime::<Utc>::from_timestamp(timestamp, 0) else {
            return String::new();
        };
        match self.timezone {
            Timezone::Utc => utc.format(&self.layout).to_string(),
            Timezone::Local => utc.with_timezone(&Local).format(&self.layout).to_string(),
        }
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            layout: DEFAULT_DATE_LAYOUT.to_string(),
            timezone: Timezone::Local,
        }
    }
}

/// Parse a date bound: UNIX seconds, `YYYY-MM-DD HH:MM`, or `YYYY-MM-DD` (midnight).
pub fn parse_date_bound(input: &str, timezone: Timezone) -> Result<i64> {
    let trimmed = input.trim();
    if let Ok(seconds) = trimmed.parse::<i64>() {
        return Ok(seconds);
    }

    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| Error::InvalidDate(input.to_string()))?;

    match timezone {
        Timezone::Utc => Ok(naive.and_utc().timestamp()),
        Timezone::Local => {
            local_timestamp(&Local, &naive).ok_or_else(|| Error::InvalidDate(input.to_string()))
        }
    }
}

/// Epoch seconds of a wall-clock time in `tz`.
///
/// Ambiguous times (clocks turned back) take the earlier instant. Times
/// skipped by a forward transition are read with the offset in force before
/// it, which lands the same distance past the transition.
fn local_timestamp<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> Option<i64> {
    if let Some(dt) = tz.from_local_datetime(naive).earliest() {
        return Some(dt.timestamp());
    }
    let before = naive.checked_sub_signed(TimeDelta::days(1))?;
    let offset = tz.offset_from_local_datetime(&before).earliest()?;
    Some(naive.and_utc().timestamp() - i64::from(offset.fix().local_minus_utc()))
}
