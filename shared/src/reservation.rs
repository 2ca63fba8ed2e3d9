//! Reservation draft, validation and the submit state machine.
//!
//! The controller owns one dialog's worth of transient state. It never
//! touches the network itself: confirmation goes through a [`BookingService`],
//! which in the shipped site is [`SimulatedBookingService`].

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::clock::{Clock, ClockTime};
use crate::slots::{OperatingHours, SlotAvailability, DEFAULT_GRACE_MINUTES};

pub const MIN_PARTY_SIZE: u8 = 1;
pub const MAX_PARTY_SIZE: u8 = 20;
pub const DEFAULT_PARTY_SIZE: u8 = 2;

/// Artificial latency of the simulated booking call
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(700);
/// How long the confirmation stays visible before the dialog closes
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(900);

/// Form fields as typed by the guest. Nothing here is validated yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub name: String,
    pub phone: String,
    /// `YYYY-MM-DD` as produced by a date input
    pub date: String,
    pub party_size: u8,
    pub selected_slot: Option<ClockTime>,
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            date: String::new(),
            party_size: DEFAULT_PARTY_SIZE,
            selected_slot: None,
        }
    }
}

impl ReservationDraft {
    /// Empty draft with the date pre-filled
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// Reset everything the guest typed; the chosen date is kept
    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.party_size = DEFAULT_PARTY_SIZE;
        self.selected_slot = None;
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftField {
    Name,
    Phone,
    Date,
    PartySize,
    Slot,
}

/// One problem with one field of the draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a phone number")]
    MissingPhone,
    #[error("Please choose a date")]
    MissingDate,
    #[error("'{0}' is not a valid date")]
    InvalidDate(String),
    #[error("Party size must be between 1 and 20 (got {0})")]
    PartySizeOutOfRange(u8),
    #[error("Please select a time slot")]
    MissingSlot,
    #[error("{0} is no longer available")]
    SlotUnavailable(ClockTime),
}

impl FieldError {
    pub fn field(&self) -> DraftField {
        match self {
            FieldError::MissingName => DraftField::Name,
            FieldError::MissingPhone => DraftField::Phone,
            FieldError::MissingDate | FieldError::InvalidDate(_) => DraftField::Date,
            FieldError::PartySizeOutOfRange(_) => DraftField::PartySize,
            FieldError::MissingSlot | FieldError::SlotUnavailable(_) => DraftField::Slot,
        }
    }
}

/// Required reservation fields are missing or wrong
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please fill name, phone, date and select a time slot.")]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn for_field(&self, field: DraftField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    fn without_field(mut self, field: DraftField) -> Option<Self> {
        self.errors.retain(|e| e.field() != field);
        (!self.errors.is_empty()).then_some(self)
    }
}

/// The booking call did not go through
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Something went wrong — try again. ({reason})")]
pub struct SubmissionFailed {
    pub reason: String,
}

impl SubmissionFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Submission(#[from] SubmissionFailed),
    #[error("a reservation is already being sent")]
    AlreadySending,
}

/// A draft that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub name: String,
    pub phone: String,
    pub date: NaiveDate,
    pub slot: ClockTime,
    pub party_size: u8,
}

impl Reservation {
    pub fn confirmation_message(&self) -> String {
        format!(
            "Reservation confirmed — {} at {} for {} people.",
            self.date.format("%Y-%m-%d"),
            self.slot,
            self.party_size
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub reservation: Reservation,
    pub message: String,
}

impl Confirmation {
    pub fn for_reservation(reservation: Reservation) -> Self {
        let message = reservation.confirmation_message();
        Self { reservation, message }
    }
}

/// Check every field of `draft`, collecting all problems at once.
///
/// When `availability` is given the selected slot must also still be bookable.
pub fn validate(
    draft: &ReservationDraft,
    availability: Option<&SlotAvailability>,
) -> Result<Reservation, ValidationError> {
    let mut errors = Vec::new();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.push(FieldError::MissingName);
    }

    let phone = draft.phone.trim();
    if phone.is_empty() {
        errors.push(FieldError::MissingPhone);
    }

    let date = if draft.date.trim().is_empty() {
        errors.push(FieldError::MissingDate);
        None
    } else {
        let parsed = draft.parsed_date();
        if parsed.is_none() {
            errors.push(FieldError::InvalidDate(draft.date.clone()));
        }
        parsed
    };

    if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&draft.party_size) {
        errors.push(FieldError::PartySizeOutOfRange(draft.party_size));
    }

    match (draft.selected_slot, availability) {
        (None, _) => errors.push(FieldError::MissingSlot),
        (Some(slot), Some(availability)) if !availability.is_bookable(slot) => {
            errors.push(FieldError::SlotUnavailable(slot));
        }
        _ => {}
    }

    match (date, draft.selected_slot) {
        (Some(date), Some(slot)) if errors.is_empty() => Ok(Reservation {
            name: name.to_string(),
            phone: phone.to_string(),
            date,
            slot,
            party_size: draft.party_size,
        }),
        _ => Err(ValidationError { errors }),
    }
}

/// Confirms a reservation somewhere.
///
/// `?Send` because the browser implementation awaits JS timers.
#[async_trait(?Send)]
pub trait BookingService {
    async fn submit(&self, reservation: &Reservation) -> Result<Confirmation, SubmissionFailed>;
}

/// Something that can wait; a timer in the browser, a no-op in tests
#[async_trait(?Send)]
pub trait Delay {
    async fn wait(&self, duration: Duration);
}

/// Stand-in for a booking backend: waits, then always confirms
#[derive(Debug, Clone)]
pub struct SimulatedBookingService<D> {
    delay: D,
    latency: Duration,
}

impl<D: Delay> SimulatedBookingService<D> {
    pub fn new(delay: D) -> Self {
        Self::with_latency(delay, SIMULATED_LATENCY)
    }

    pub fn with_latency(delay: D, latency: Duration) -> Self {
        Self { delay, latency }
    }
}

#[async_trait(?Send)]
impl<D: Delay> BookingService for SimulatedBookingService<D> {
    async fn submit(&self, reservation: &Reservation) -> Result<Confirmation, SubmissionFailed> {
        debug!("🍽️ BOOKING: simulating {}ms round trip", self.latency.as_millis());
        self.delay.wait(self.latency).await;
        Ok(Confirmation::for_reservation(reservation.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Sending,
    Succeeded(Confirmation),
}

/// Handed out by [`ReservationController::begin_submit`]; pairs a response with
/// the dialog session that asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
    reservation: Reservation,
}

impl SubmissionTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reservation(&self) -> &Reservation {
        &self.reservation
    }
}

/// State of one reservation dialog.
///
/// `Idle -> Sending -> Succeeded -> Idle`. Validation happens synchronously
/// inside [`begin_submit`](Self::begin_submit); a rejected draft stays `Idle`
/// with its field errors kept for display. Closing the dialog starts a new
/// generation so a response that arrives afterwards is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationController {
    hours: OperatingHours,
    slots: Vec<ClockTime>,
    grace_minutes: u32,
    draft: ReservationDraft,
    state: SubmissionState,
    errors: Option<ValidationError>,
    failure: Option<SubmissionFailed>,
    is_open: bool,
    generation: u64,
}

impl ReservationController {
    pub fn new(hours: OperatingHours, today: NaiveDate) -> Self {
        Self {
            slots: hours.slots(),
            hours,
            grace_minutes: DEFAULT_GRACE_MINUTES,
            draft: ReservationDraft::for_date(today),
            state: SubmissionState::Idle,
            errors: None,
            failure: None,
            is_open: false,
            generation: 0,
        }
    }

    pub fn with_grace_minutes(mut self, grace_minutes: u32) -> Self {
        self.grace_minutes = grace_minutes;
        self
    }

    pub fn hours(&self) -> &OperatingHours {
        &self.hours
    }

    pub fn slots(&self) -> &[ClockTime] {
        &self.slots
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.state, SubmissionState::Sending)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn validation_errors(&self) -> Option<&ValidationError> {
        self.errors.as_ref()
    }

    pub fn field_error(&self, field: DraftField) -> Option<&FieldError> {
        self.errors.as_ref().and_then(|e| e.for_field(field))
    }

    pub fn failure(&self) -> Option<&SubmissionFailed> {
        self.failure.as_ref()
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        match &self.state {
            SubmissionState::Succeeded(confirmation) => Some(confirmation),
            _ => None,
        }
    }

    /// Availability of this dialog's slots for the drafted date at `now`
    pub fn availability(&self, now: NaiveDateTime) -> SlotAvailability {
        match self.draft.parsed_date() {
            Some(date) => SlotAvailability::compute(&self.slots, date, now, self.grace_minutes),
            None => SlotAvailability::all_available(&self.slots),
        }
    }

    pub fn open(&mut self) {
        if let SubmissionState::Succeeded(_) = self.state {
            self.state = SubmissionState::Idle;
        }
        self.is_open = true;
    }

    /// Close the dialog, keeping whatever the guest typed
    pub fn close(&mut self) {
        self.is_open = false;
        self.state = SubmissionState::Idle;
        self.errors = None;
        self.failure = None;
        self.generation += 1;
    }

    /// Close the dialog and throw the draft away
    pub fn cancel(&mut self) {
        self.draft.clear();
        self.close();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.clear_field_error(DraftField::Name);
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.draft.phone = phone.into();
        self.clear_field_error(DraftField::Phone);
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.draft.date = date.into();
        self.clear_field_error(DraftField::Date);
    }

    pub fn set_party_size(&mut self, party_size: u8) {
        self.draft.party_size = party_size;
        self.clear_field_error(DraftField::PartySize);
    }

    pub fn select_slot(&mut self, slot: ClockTime) {
        self.draft.selected_slot = Some(slot);
        self.clear_field_error(DraftField::Slot);
    }

    fn clear_field_error(&mut self, field: DraftField) {
        self.errors = self.errors.take().and_then(|e| e.without_field(field));
    }

    /// Validate the draft and, if it is complete, move to `Sending`.
    pub fn begin_submit(&mut self, now: NaiveDateTime) -> Result<SubmissionTicket, ReservationError> {
        if self.is_sending() {
            return Err(ReservationError::AlreadySending);
        }

        self.failure = None;
        let availability = self.availability(now);
        match validate(&self.draft, Some(&availability)) {
            Ok(reservation) => {
                self.errors = None;
                self.state = SubmissionState::Sending;
                info!(
                    "🍽️ RESERVATION: sending {} at {} for {}",
                    reservation.date, reservation.slot, reservation.party_size
                );
                Ok(SubmissionTicket {
                    generation: self.generation,
                    reservation,
                })
            }
            Err(errors) => {
                debug!("🍽️ RESERVATION: rejected draft with {} field error(s)", errors.errors().len());
                self.state = SubmissionState::Idle;
                self.errors = Some(errors.clone());
                Err(errors.into())
            }
        }
    }

    /// Apply the booking result. Returns `false` when the ticket belongs to a
    /// dialog session that has since been closed; the result is then ignored.
    pub fn finish_submit(
        &mut self,
        ticket: &SubmissionTicket,
        result: Result<Confirmation, SubmissionFailed>,
    ) -> bool {
        if ticket.generation != self.generation || !self.is_sending() {
            debug!(
                "🍽️ RESERVATION: dropping stale response (ticket gen {}, current gen {})",
                ticket.generation, self.generation
            );
            return false;
        }

        match result {
            Ok(confirmation) => {
                info!("🍽️ RESERVATION: {}", confirmation.message);
                self.draft.clear();
                self.state = SubmissionState::Succeeded(confirmation);
            }
            Err(failure) => {
                warn!("🍽️ RESERVATION: booking failed: {}", failure.reason);
                self.state = SubmissionState::Idle;
                self.failure = Some(failure);
            }
        }
        true
    }

    /// Close the dialog once the confirmation has been shown.
    ///
    /// No-op if the guest already closed or reopened it in the meantime.
    pub fn finish_success(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.confirmation().is_none() {
            return false;
        }
        self.is_open = false;
        self.state = SubmissionState::Idle;
        self.generation += 1;
        true
    }

    /// Validate, send through `service` and record the outcome.
    pub async fn submit<S, C>(&mut self, service: &S, clock: &C) -> Result<Confirmation, ReservationError>
    where
        S: BookingService + ?Sized,
        C: Clock + ?Sized,
    {
        let ticket = self.begin_submit(clock.now())?;
        let result = service.submit(ticket.reservation()).await;
        self.finish_submit(&ticket, result.clone());
        Ok(result?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingDelay {
        waits: RefCell<Vec<Duration>>,
    }

    #[async_trait(?Send)]
    impl Delay for RecordingDelay {
        async fn wait(&self, duration: Duration) {
            self.waits.borrow_mut().push(duration);
        }
    }

    struct FailingService;

    #[async_trait(?Send)]
    impl BookingService for FailingService {
        async fn submit(&self, _reservation: &Reservation) -> Result<Confirmation, SubmissionFailed> {
            Err(SubmissionFailed::new("kitchen printer offline"))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()
    }

    fn clock_at(hour: u32, minute: u32) -> FixedClock {
        FixedClock(today().and_hms_opt(hour, minute, 0).unwrap())
    }

    fn slot(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn filled_controller() -> ReservationController {
        let mut controller = ReservationController::new(OperatingHours::default(), today());
        controller.open();
        controller.set_name("Maya R.");
        controller.set_phone("+8801700000000");
        controller.set_party_size(4);
        controller.select_slot(slot("19:30"));
        controller
    }

    #[test]
    fn test_draft_defaults() {
        let controller = ReservationController::new(OperatingHours::default(), today());
        assert_eq!(controller.draft().date, "2025-06-14");
        assert_eq!(controller.draft().party_size, DEFAULT_PARTY_SIZE);
        assert_eq!(controller.draft().selected_slot, None);
        assert_eq!(controller.slots().len(), 22);
        assert!(!controller.is_open());
    }

    #[test]
    fn test_validate_reports_every_missing_field() {
        let draft = ReservationDraft::default();
        let err = validate(&draft, None).unwrap_err();
        assert_eq!(
            err.errors(),
            &[FieldError::MissingName, FieldError::MissingPhone, FieldError::MissingDate, FieldError::MissingSlot]
        );
        assert_eq!(err.for_field(DraftField::Phone), Some(&FieldError::MissingPhone));
        assert_eq!(err.for_field(DraftField::PartySize), None);
    }

    #[test]
    fn test_validate_whitespace_only_is_missing() {
        let draft = ReservationDraft {
            name: "   ".to_string(),
            phone: "\t".to_string(),
            selected_slot: Some(slot("12:00")),
            ..ReservationDraft::for_date(today())
        };
        let err = validate(&draft, None).unwrap_err();
        assert_eq!(err.errors(), &[FieldError::MissingName, FieldError::MissingPhone]);
    }

    #[test]
    fn test_validate_bad_date_and_party_size() {
        let draft = ReservationDraft {
            name: "Liam".to_string(),
            phone: "123".to_string(),
            date: "14/06/2025".to_string(),
            party_size: 21,
            selected_slot: Some(slot("12:00")),
        };
        let err = validate(&draft, None).unwrap_err();
        assert_eq!(
            err.errors(),
            &[FieldError::InvalidDate("14/06/2025".to_string()), FieldError::PartySizeOutOfRange(21)]
        );

        let zero = ReservationDraft { party_size: 0, date: "2025-06-14".to_string(), ..draft };
        assert_eq!(validate(&zero, None).unwrap_err().errors(), &[FieldError::PartySizeOutOfRange(0)]);
    }

    #[test]
    fn test_validate_trims_and_builds_reservation() {
        let draft = ReservationDraft {
            name: "  Ava S. ".to_string(),
            phone: " 555 ".to_string(),
            selected_slot: Some(slot("20:00")),
            ..ReservationDraft::for_date(today())
        };
        let reservation = validate(&draft, None).unwrap();
        assert_eq!(reservation.name, "Ava S.");
        assert_eq!(reservation.phone, "555");
        assert_eq!(reservation.date, today());
        assert_eq!(reservation.party_size, 2);
    }

    #[test]
    fn test_confirmation_message_template() {
        let reservation = Reservation {
            name: "Maya".to_string(),
            phone: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
            slot: slot("09:30"),
            party_size: 3,
        };
        assert_eq!(
            Confirmation::for_reservation(reservation).message,
            "Reservation confirmed — 2025-07-04 at 09:30 for 3 people."
        );
    }

    #[test]
    fn test_rejected_submit_stays_idle_with_field_errors() {
        let mut controller = ReservationController::new(OperatingHours::default(), today());
        controller.open();
        controller.set_name("Maya");

        let err = controller.begin_submit(clock_at(12, 0).now()).unwrap_err();
        assert!(matches!(err, ReservationError::Validation(_)));
        assert!(!controller.is_sending());
        assert_eq!(controller.state(), &SubmissionState::Idle);
        assert_eq!(controller.field_error(DraftField::Phone), Some(&FieldError::MissingPhone));
        assert_eq!(controller.field_error(DraftField::Slot), Some(&FieldError::MissingSlot));

        controller.set_phone("555");
        assert_eq!(controller.field_error(DraftField::Phone), None);
        assert!(controller.field_error(DraftField::Slot).is_some());

        controller.select_slot(slot("20:00"));
        assert!(controller.validation_errors().is_none());
    }

    #[test]
    fn test_past_slot_today_is_rejected() {
        let mut controller = filled_controller();
        controller.select_slot(slot("12:00"));

        let err = controller.begin_submit(clock_at(14, 5).now()).unwrap_err();
        assert!(matches!(err, ReservationError::Validation(_)));
        assert_eq!(
            controller.field_error(DraftField::Slot),
            Some(&FieldError::SlotUnavailable(slot("12:00")))
        );
    }

    #[test]
    fn test_past_slot_on_future_date_is_fine() {
        let mut controller = filled_controller();
        controller.select_slot(slot("12:00"));
        controller.set_date("2025-06-15");
        assert!(controller.begin_submit(clock_at(14, 5).now()).is_ok());
        assert!(controller.is_sending());
    }

    #[test]
    fn test_cannot_submit_twice_while_sending() {
        let mut controller = filled_controller();
        let now = clock_at(12, 0).now();
        controller.begin_submit(now).unwrap();
        assert_eq!(controller.begin_submit(now), Err(ReservationError::AlreadySending));
    }

    #[tokio::test]
    async fn test_successful_submit_full_cycle() {
        let delay = RecordingDelay::default();
        let service = SimulatedBookingService::new(delay);
        let clock = clock_at(12, 0);
        let mut controller = filled_controller();

        let confirmation = controller.submit(&service, &clock).await.unwrap();
        assert_eq!(confirmation.message, "Reservation confirmed — 2025-06-14 at 19:30 for 4 people.");
        assert_eq!(service.delay.waits.borrow().as_slice(), &[SIMULATED_LATENCY]);

        assert_eq!(controller.state(), &SubmissionState::Succeeded(confirmation.clone()));
        assert!(!controller.is_sending());
        assert!(controller.is_open());
        assert_eq!(controller.draft().name, "");
        assert_eq!(controller.draft().phone, "");
        assert_eq!(controller.draft().party_size, DEFAULT_PARTY_SIZE);
        assert_eq!(controller.draft().selected_slot, None);
        assert_eq!(controller.draft().date, "2025-06-14");

        let generation = controller.generation();
        assert!(controller.finish_success(generation));
        assert_eq!(controller.state(), &SubmissionState::Idle);
        assert!(!controller.is_open());
    }

    #[tokio::test]
    async fn test_failed_submit_returns_to_idle_with_message() {
        let mut controller = filled_controller();
        let err = controller.submit(&FailingService, &clock_at(12, 0)).await.unwrap_err();

        assert_eq!(err, ReservationError::Submission(SubmissionFailed::new("kitchen printer offline")));
        assert_eq!(controller.state(), &SubmissionState::Idle);
        assert_eq!(controller.failure().map(|f| f.reason.as_str()), Some("kitchen printer offline"));
        assert_eq!(controller.draft().name, "Maya R.");
    }

    #[tokio::test]
    async fn test_rejected_submit_never_calls_service() {
        let service = SimulatedBookingService::new(RecordingDelay::default());
        let mut controller = ReservationController::new(OperatingHours::default(), today());

        let err = controller.submit(&service, &clock_at(12, 0)).await.unwrap_err();
        assert!(matches!(err, ReservationError::Validation(_)));
        assert!(service.delay.waits.borrow().is_empty());
    }

    #[test]
    fn test_response_after_close_is_ignored() {
        let mut controller = filled_controller();
        let ticket = controller.begin_submit(clock_at(12, 0).now()).unwrap();

        controller.close();
        let confirmation = Confirmation::for_reservation(ticket.reservation().clone());
        assert!(!controller.finish_submit(&ticket, Ok(confirmation)));
        assert_eq!(controller.state(), &SubmissionState::Idle);
        assert!(controller.confirmation().is_none());
        // the draft survives a plain close
        assert_eq!(controller.draft().name, "Maya R.");
    }

    #[test]
    fn test_success_timer_after_reopen_is_ignored() {
        let mut controller = filled_controller();
        let ticket = controller.begin_submit(clock_at(12, 0).now()).unwrap();
        let confirmation = Confirmation::for_reservation(ticket.reservation().clone());
        assert!(controller.finish_submit(&ticket, Ok(confirmation)));

        let generation = controller.generation();
        controller.close();
        controller.open();
        assert!(!controller.finish_success(generation));
        assert!(controller.is_open());
    }

    #[test]
    fn test_cancel_clears_draft() {
        let mut controller = filled_controller();
        controller.cancel();
        assert!(!controller.is_open());
        assert_eq!(controller.draft().name, "");
        assert_eq!(controller.draft().selected_slot, None);
    }

    #[test]
    fn test_reopen_after_success_starts_idle() {
        let mut controller = filled_controller();
        let ticket = controller.begin_submit(clock_at(12, 0).now()).unwrap();
        let confirmation = Confirmation::for_reservation(ticket.reservation().clone());
        controller.finish_submit(&ticket, Ok(confirmation));
        controller.open();
        assert_eq!(controller.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_availability_without_date_disables_nothing() {
        let mut controller = ReservationController::new(OperatingHours::default(), today());
        controller.set_date("");
        let availability = controller.availability(clock_at(21, 0).now());
        assert_eq!(availability.len(), 22);
        assert_eq!(availability.disabled_count(), 0);

        controller.set_date("2025-06-14");
        let availability = controller.availability(clock_at(21, 0).now());
        // 11:30 .. 20:30 are at or before 20:45
        assert_eq!(availability.disabled_count(), 19);
    }
}
