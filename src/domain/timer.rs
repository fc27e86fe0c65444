//! Item Timer
//!
//! Optional deadline annotation on a checklist item. Either a countdown of
//! N minutes from creation, or an absolute deadline. The engine stores it
//! untouched; only the display helpers below interpret it.

use std::fmt;

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::TimerError;

/// One week
pub const MAX_COUNTDOWN_MINUTES: i64 = 10_080;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerKind {
    Countdown,
    Deadline,
}

/// Raw `value` field: minutes for a countdown, a timestamp for a deadline.
/// Anything else written by an older build is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimerValue {
    Minutes(i64),
    Timestamp(String),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTimer {
    #[serde(rename = "type")]
    pub kind: TimerKind,
    pub value: TimerValue,
    pub label: String,
    pub created_at: DateTime<Utc>,
}

/// Timer as found in storage.
///
/// Timers in the shape above are `Typed`; anything else (a numeric
/// `createdAt`, a missing field, an unknown `type`) is kept verbatim as
/// `Raw` so loading never rejects the item and saving writes it back as read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredTimer {
    Typed(ItemTimer),
    Raw(serde_json::Value),
}

impl StoredTimer {
    pub fn typed(&self) -> Option<&ItemTimer> {
        match self {
            StoredTimer::Typed(timer) => Some(timer),
            StoredTimer::Raw(_) => None,
        }
    }

    /// Remaining time; `None` for timers this build can't interpret.
    pub fn status(&self, now: DateTime<Utc>) -> Option<TimerStatus> {
        self.typed()?.status(now)
    }
}

impl From<ItemTimer> for StoredTimer {
    fn from(timer: ItemTimer) -> Self {
        StoredTimer::Typed(timer)
    }
}

fn clean_label(label: &str) -> Result<String, TimerError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(TimerError::EmptyLabel);
    }
    Ok(label.to_string())
}

/// RFC 3339, or the `datetime-local` form (`2024-05-01T18:00[:SS]`) read as UTC.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

impl ItemTimer {
    pub fn countdown(minutes: i64, label: &str, now: DateTime<Utc>) -> Result<Self, TimerError> {
        if !(1..=MAX_COUNTDOWN_MINUTES).contains(&minutes) {
            return Err(TimerError::CountdownOutOfRange(minutes));
        }
        Ok(Self {
            kind: TimerKind::Countdown,
            value: TimerValue::Minutes(minutes),
            label: clean_label(label)?,
            created_at: now,
        })
    }

    pub fn deadline(at: DateTime<Utc>, label: &str, now: DateTime<Utc>) -> Result<Self, TimerError> {
        Ok(Self {
            kind: TimerKind::Deadline,
            value: TimerValue::Timestamp(at.to_rfc3339()),
            label: clean_label(label)?,
            created_at: now,
        })
    }

    /// Deadline from form input; the input is stored as entered.
    pub fn deadline_from_input(input: &str, label: &str, now: DateTime<Utc>) -> Result<Self, TimerError> {
        if parse_timestamp(input).is_none() {
            return Err(TimerError::InvalidDeadline(input.to_string()));
        }
        Ok(Self {
            kind: TimerKind::Deadline,
            value: TimerValue::Timestamp(input.trim().to_string()),
            label: clean_label(label)?,
            created_at: now,
        })
    }

    /// Instant the timer runs out. `None` when `value` doesn't fit `kind`.
    pub fn target(&self) -> Option<DateTime<Utc>> {
        match (self.kind, &self.value) {
            (TimerKind::Countdown, TimerValue::Minutes(minutes)) => {
                Some(self.created_at + Duration::minutes(*minutes))
            }
            (TimerKind::Deadline, TimerValue::Timestamp(ts)) => parse_timestamp(ts),
            _ => None,
        }
    }

    pub fn status(&self, now: DateTime<Utc>) -> Option<TimerStatus> {
        let remaining = self.target()? - now;
        if remaining <= Duration::zero() {
            return Some(TimerStatus::Expired);
        }
        Some(TimerStatus::Remaining {
            days: remaining.num_days(),
            hours: remaining.num_hours() % 24,
            minutes: remaining.num_minutes() % 60,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Expired,
    Remaining { days: i64, hours: i64, minutes: i64 },
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TimerStatus::Expired => f.write_str("Expired"),
            TimerStatus::Remaining { days, hours, minutes } if days > 0 => {
                write!(f, "{}d {}h {}m", days, hours, minutes)
            }
            TimerStatus::Remaining { hours, minutes, .. } if hours > 0 => {
                write!(f, "{}h {}m", hours, minutes)
            }
            TimerStatus::Remaining { minutes, .. } => write!(f, "{}m", minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_countdown_validation() {
        assert_eq!(
            ItemTimer::countdown(0, "soon", noon()),
            Err(TimerError::CountdownOutOfRange(0))
        );
        assert_eq!(
            ItemTimer::countdown(MAX_COUNTDOWN_MINUTES + 1, "soon", noon()),
            Err(TimerError::CountdownOutOfRange(MAX_COUNTDOWN_MINUTES + 1))
        );
        assert_eq!(ItemTimer::countdown(30, "   ", noon()), Err(TimerError::EmptyLabel));

        let timer = ItemTimer::countdown(120, "  before departure ", noon()).unwrap();
        assert_eq!(timer.label, "before departure");
        assert_eq!(timer.target(), Some(noon() + Duration::minutes(120)));
    }

    #[test]
    fn test_remaining_formatting() {
        let timer = ItemTimer::countdown(MAX_COUNTDOWN_MINUTES, "trip", noon()).unwrap();

        let status = timer.status(noon() + Duration::minutes(1)).unwrap();
        assert_eq!(status.to_string(), "6d 23h 59m");

        let status = timer.status(noon() + Duration::days(6) + Duration::minutes(30)).unwrap();
        assert_eq!(status.to_string(), "23h 30m");

        let status = timer.status(noon() + Duration::days(7) - Duration::seconds(90)).unwrap();
        assert_eq!(status.to_string(), "1m");

        assert_eq!(timer.status(noon() + Duration::days(7)), Some(TimerStatus::Expired));
    }

    #[test]
    fn test_deadline_from_datetime_local_input() {
        let timer = ItemTimer::deadline_from_input("2024-05-02T18:00", "by evening", noon()).unwrap();
        assert_eq!(timer.value, TimerValue::Timestamp("2024-05-02T18:00".to_string()));
        assert_eq!(timer.status(noon()).unwrap().to_string(), "1d 6h 0m");

        assert_eq!(
            ItemTimer::deadline_from_input("tomorrow", "x", noon()),
            Err(TimerError::InvalidDeadline("tomorrow".to_string()))
        );
    }

    #[test]
    fn test_deadline_rfc3339() {
        let at = noon() + Duration::hours(3);
        let timer = ItemTimer::deadline(at, "check-in", noon()).unwrap();
        assert_eq!(timer.target(), Some(at));
    }

    #[test]
    fn test_json_shape_matches_browser_format() {
        let json = r#"{"type":"countdown","value":120,"label":"before departure","createdAt":"2024-05-01T12:00:00.000Z"}"#;
        let timer: ItemTimer = serde_json::from_str(json).unwrap();
        assert_eq!(timer.kind, TimerKind::Countdown);
        assert_eq!(timer.value, TimerValue::Minutes(120));
        assert_eq!(timer.created_at, noon());

        let back = serde_json::to_value(&timer).unwrap();
        assert_eq!(back["type"], "countdown");
        assert_eq!(back["value"], 120);
    }

    #[test]
    fn test_mismatched_value_has_no_target() {
        let timer = ItemTimer {
            kind: TimerKind::Countdown,
            value: TimerValue::Other(serde_json::json!(1.5)),
            label: "odd".to_string(),
            created_at: noon(),
        };
        assert_eq!(timer.target(), None);
        assert_eq!(timer.status(noon()), None);
    }

    #[test]
    fn test_stored_timer_reads_typed_shape() {
        let json = r#"{"type":"deadline","value":"2024-05-01T15:00:00Z","label":"check-in","createdAt":"2024-05-01T12:00:00Z"}"#;
        let stored: StoredTimer = serde_json::from_str(json).unwrap();
        assert_eq!(stored.typed().map(|t| t.kind), Some(TimerKind::Deadline));
        assert_eq!(stored.status(noon()).unwrap().to_string(), "3h 0m");
    }

    #[test]
    fn test_stored_timer_keeps_foreign_shapes() {
        let foreign = [
            r#"{"type":"countdown","value":30,"label":"x","createdAt":1714564800000}"#,
            r#"{"type":"deadline","value":"2024-05-02T18:00","label":"no created"}"#,
            r#"{"type":"alarm","value":true}"#,
            r#""soon""#,
        ];
        for json in foreign {
            let stored: StoredTimer = serde_json::from_str(json).unwrap();
            assert!(stored.typed().is_none(), "{}", json);
            assert_eq!(stored.status(noon()), None);

            let written: serde_json::Value = serde_json::to_value(&stored).unwrap();
            let read: serde_json::Value = serde_json::from_str(json).unwrap();
            assert_eq!(written, read);
        }
    }
}
