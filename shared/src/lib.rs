//! Page logic for the Aroma & Co. site, independent of the browser.
//!
//! The frontend crate renders; everything here is plain data and arithmetic
//! and is tested on the host.

pub mod carousel;
pub mod clock;
pub mod content;
pub mod menu;
pub mod motion;
pub mod newsletter;
pub mod reservation;
pub mod slots;

pub use clock::{Clock, ClockTime, FixedClock};
pub use content::{ContentError, FeaturedDish, GalleryImage, SiteContent, Testimonial};
pub use menu::{filter_by_category, MenuCategory, MenuItem, MenuVariant};
pub use reservation::{
    BookingService, Confirmation, Delay, DraftField, FieldError, Reservation, ReservationController,
    ReservationDraft, ReservationError, SimulatedBookingService, SubmissionFailed, SubmissionState,
    SubmissionTicket, ValidationError,
};
pub use slots::{generate_slots, InvalidConfiguration, OperatingHours, SlotAvailability};
