//! Reservation slot engine.
//!
//! Generates the bookable times between opening and closing and works out
//! which of them have already gone by for a booking made today. Operating
//! windows that cross midnight (open 18:00, close 02:00) are not supported:
//! such a window yields no slots at all.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::ClockTime;

/// Slots this many minutes in the past stay bookable for today
pub const DEFAULT_GRACE_MINUTES: u32 = 15;

/// Malformed operating-hours configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConfiguration {
    #[error("slot interval must be a positive number of minutes, got {0}")]
    NonPositiveInterval(i64),
    #[error("'{0}' is not a valid HH:MM time")]
    MalformedClockTime(String),
    #[error("{0} minutes is past the end of the day")]
    ClockOutOfRange(u32),
}

/// Generate every slot from `open` to `close` inclusive, `interval_minutes` apart.
///
/// Returns an empty list when `close` is before `open`.
pub fn generate_slots(
    open: ClockTime,
    close: ClockTime,
    interval_minutes: i64,
) -> Result<Vec<ClockTime>, InvalidConfiguration> {
    let step = validate_interval(interval_minutes)?;

    let start = open.minutes();
    let end = close.minutes();
    if end < start {
        debug!("🕰️ SLOTS: close {} is before open {}, no slots", close, open);
        return Ok(Vec::new());
    }

    let slots: Vec<ClockTime> = (start..=end)
        .step_by(step)
        .map(ClockTime::from_minutes)
        .collect::<Result<_, _>>()?;

    debug!("🕰️ SLOTS: generated {} slots {}..={} every {}m", slots.len(), open, close, step);
    Ok(slots)
}

/// String-level entry point: `HH:MM` in, `HH:MM` out
pub fn generate_slot_labels(
    open: &str,
    close: &str,
    interval_minutes: i64,
) -> Result<Vec<String>, InvalidConfiguration> {
    let open: ClockTime = open.parse()?;
    let close: ClockTime = close.parse()?;
    Ok(generate_slots(open, close, interval_minutes)?
        .into_iter()
        .map(|slot| slot.to_string())
        .collect())
}

/// Any positive interval is accepted; one longer than the window yields just `open`.
fn validate_interval(interval_minutes: i64) -> Result<usize, InvalidConfiguration> {
    if interval_minutes <= 0 {
        return Err(InvalidConfiguration::NonPositiveInterval(interval_minutes));
    }
    Ok(usize::try_from(interval_minutes).unwrap_or(usize::MAX))
}

/// Opening window and slot spacing for the reservation dialog.
///
/// Only constructible through [`OperatingHours::new`], so a bad interval is
/// caught when configuration is loaded rather than when slots are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOperatingHours", into = "RawOperatingHours")]
pub struct OperatingHours {
    open: ClockTime,
    close: ClockTime,
    interval_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOperatingHours {
    open_time: ClockTime,
    close_time: ClockTime,
    interval_minutes: i64,
}

impl OperatingHours {
    pub fn new(
        open: ClockTime,
        close: ClockTime,
        interval_minutes: i64,
    ) -> Result<Self, InvalidConfiguration> {
        validate_interval(interval_minutes)?;
        let interval_minutes = u32::try_from(interval_minutes).unwrap_or(u32::MAX);
        Ok(Self {
            open,
            close,
            interval_minutes,
        })
    }

    pub fn parse(open: &str, close: &str, interval_minutes: i64) -> Result<Self, InvalidConfiguration> {
        Self::new(open.parse()?, close.parse()?, interval_minutes)
    }

    pub fn open(&self) -> ClockTime {
        self.open
    }

    pub fn close(&self) -> ClockTime {
        self.close
    }

    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    pub fn slots(&self) -> Vec<ClockTime> {
        // Interval was validated on construction.
        generate_slots(self.open, self.close, self.interval_minutes as i64).unwrap_or_default()
    }
}

impl Default for OperatingHours {
    fn default() -> Self {
        Self {
            open: ClockTime::at(11, 30),
            close: ClockTime::at(22, 0),
            interval_minutes: 30,
        }
    }
}

impl TryFrom<RawOperatingHours> for OperatingHours {
    type Error = InvalidConfiguration;

    fn try_from(raw: RawOperatingHours) -> Result<Self, Self::Error> {
        Self::new(raw.open_time, raw.close_time, raw.interval_minutes)
    }
}

impl From<OperatingHours> for RawOperatingHours {
    fn from(hours: OperatingHours) -> Self {
        Self {
            open_time: hours.open,
            close_time: hours.close,
            interval_minutes: hours.interval_minutes as i64,
        }
    }
}

/// Which slots are disabled for the selected date.
///
/// `true` means the slot can no longer be booked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotAvailability {
    disabled: BTreeMap<ClockTime, bool>,
}

impl SlotAvailability {
    /// Mark slots that have passed, allowing `grace_minutes` of lateness.
    ///
    /// Only applies when `selected_date` is the date of `now`; any other date
    /// leaves every slot available.
    pub fn compute(
        slots: &[ClockTime],
        selected_date: NaiveDate,
        now: NaiveDateTime,
        grace_minutes: u32,
    ) -> Self {
        let is_today = selected_date == now.date();
        let now_minutes = ClockTime::of(&now).minutes() as i64;
        let cutoff = now_minutes - grace_minutes as i64;

        let disabled: BTreeMap<ClockTime, bool> = slots
            .iter()
            .map(|slot| (*slot, is_today && (slot.minutes() as i64) <= cutoff))
            .collect();

        debug!(
            "🕰️ SLOTS: availability for {} (today={}): {} of {} disabled",
            selected_date,
            is_today,
            disabled.values().filter(|d| **d).count(),
            slots.len()
        );

        Self { disabled }
    }

    /// Every slot bookable, used when no date has been picked yet
    pub fn all_available(slots: &[ClockTime]) -> Self {
        Self {
            disabled: slots.iter().map(|slot| (*slot, false)).collect(),
        }
    }

    pub fn is_disabled(&self, slot: ClockTime) -> bool {
        self.disabled.get(&slot).copied().unwrap_or(false)
    }

    /// Slot known to this map and not disabled
    pub fn is_bookable(&self, slot: ClockTime) -> bool {
        matches!(self.disabled.get(&slot), Some(false))
    }

    pub fn disabled_count(&self) -> usize {
        self.disabled.values().filter(|d| **d).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClockTime, bool)> + '_ {
        self.disabled.iter().map(|(slot, disabled)| (*slot, *disabled))
    }

    pub fn len(&self) -> usize {
        self.disabled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disabled.is_empty()
    }
}
