use std::time::Duration;

use async_trait::async_trait;
use gloo::timers::future::TimeoutFuture;
use shared::{Delay, SimulatedBookingService};

/// `setTimeout`-backed wait
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn wait(&self, duration: Duration) {
        TimeoutFuture::new(millis(duration)).await;
    }
}

/// The booking backend the site ships with
pub type SiteBookingService = SimulatedBookingService<TimerDelay>;

pub fn site_booking_service() -> SiteBookingService {
    SimulatedBookingService::new(TimerDelay)
}

pub fn millis(duration: Duration) -> u32 {
    duration.as_millis().min(u32::MAX as u128) as u32
}
