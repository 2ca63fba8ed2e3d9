use gloo::timers::callback::Interval;
use yew::prelude::*;

/// Calls `on_tick` every `period_ms` until unmounted.
///
/// Passing `None` stops the timer; a new period restarts it from zero.
#[hook]
pub fn use_auto_advance(period_ms: Option<u32>, on_tick: Callback<()>) {
    use_effect_with(period_ms, move |period_ms| {
        let interval = period_ms.map(|ms| Interval::new(ms, move || on_tick.emit(())));
        move || drop(interval)
    });
}
