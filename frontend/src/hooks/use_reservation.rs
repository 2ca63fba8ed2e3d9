use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use shared::reservation::SUCCESS_DISPLAY;
use shared::{
    BookingService, Clock, ClockTime, OperatingHours, ReservationController, ReservationError,
    SlotAvailability,
};
use wasm_bindgen_futures::spawn_local;
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;

use crate::services::booking::{millis, site_booking_service};
use crate::services::date_utils::BrowserClock;
use crate::services::logging::Logger;

const COMPONENT: &str = "reservation-hook";

pub struct UseReservationResult {
    /// Snapshot of the controller for this render
    pub state: ReservationController,
    /// Slot availability for the drafted date as of this render
    pub availability: SlotAvailability,
    pub actions: UseReservationActions,
}

#[derive(Clone, PartialEq)]
pub struct UseReservationActions {
    pub open: Callback<()>,
    pub close: Callback<()>,
    pub cancel: Callback<()>,
    pub set_name: Callback<String>,
    pub set_phone: Callback<String>,
    pub set_date: Callback<String>,
    pub set_party_size: Callback<u8>,
    pub select_slot: Callback<ClockTime>,
    pub submit: Callback<()>,
}

/// Hook owning one reservation dialog.
///
/// The controller lives in a `RefCell` so submit can read the outcome of
/// validation synchronously. Every mutation forces a re-render.
#[hook]
pub fn use_reservation(hours: OperatingHours) -> UseReservationResult {
    let controller = use_mut_ref(|| ReservationController::new(hours, BrowserClock.today()));
    let service = use_memo((), |_| site_booking_service());
    let trigger = use_force_update();

    let open = {
        let (controller, trigger) = (controller.clone(), trigger.clone());
        use_callback((), move |_: (), _| {
            Logger::debug_with_component(COMPONENT, "dialog opened");
            apply(&controller, &trigger, |c| c.open());
        })
    };

    let close = {
        let (controller, trigger) = (controller.clone(), trigger.clone());
        use_callback((), move |_: (), _| apply(&controller, &trigger, |c| c.close()))
    };

    let cancel = {
        let (controller, trigger) = (controller.clone(), trigger.clone());
        use_callback((), move |_: (), _| apply(&controller, &trigger, |c| c.cancel()))
    };

    let set_name = {
        let (controller, trigger) = (controller.clone(), trigger.clone());
        use_callback((), move |name: String, _| apply(&controller, &trigger, |c| c.set_name(name)))
    };

    let set_phone = {
        let (controller, trigger) = (controller.clone(), trigger.clone());
        use_callback((), move |phone: String, _| apply(&controller, &trigger, |c| c.set_phone(phone)))
    };

    let set_date = {
        let (controller, trigger) = (controller.clone(), trigger.clone());
        use_callback((), move |date: String, _| apply(&controller, &trigger, |c| c.set_date(date)))
    };

    let set_party_size = {
        let (controller, trigger) = (controller.clone(), trigger.clone());
        use_callback((), move |size: u8, _| apply(&controller, &trigger, |c| c.set_party_size(size)))
    };

    let select_slot = {
        let (controller, trigger) = (controller.clone(), trigger.clone());
        use_callback((), move |slot: ClockTime, _| apply(&controller, &trigger, |c| c.select_slot(slot)))
    };

    let submit = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        let service = service.clone();

        use_callback((), move |_: (), _| {
            let started = controller.borrow_mut().begin_submit(BrowserClock.now());
            trigger.force_update();

            let ticket = match started {
                Ok(ticket) => ticket,
                Err(ReservationError::Validation(errors)) => {
                    Logger::debug_with_component(
                        COMPONENT,
                        &format!("rejected: {} field error(s)", errors.errors().len()),
                    );
                    return;
                }
                Err(e) => {
                    Logger::warn_with_component(COMPONENT, &e.to_string());
                    return;
                }
            };

            let controller = controller.clone();
            let trigger = trigger.clone();
            let service = service.clone();

            spawn_local(async move {
                let result = service.submit(ticket.reservation()).await;
                let succeeded = result.is_ok();
                if let Err(e) = &result {
                    Logger::error_with_component(COMPONENT, &e.to_string());
                }

                let applied = controller.borrow_mut().finish_submit(&ticket, result);
                trigger.force_update();
                if !applied {
                    Logger::debug_with_component(COMPONENT, "dialog closed before the booking finished");
                    return;
                }

                if succeeded {
                    TimeoutFuture::new(millis(SUCCESS_DISPLAY)).await;
                    if controller.borrow_mut().finish_success(ticket.generation()) {
                        trigger.force_update();
                    }
                }
            });
        })
    };

    let state = controller.borrow().clone();
    let availability = state.availability(BrowserClock.now());

    let actions = UseReservationActions {
        open,
        close,
        cancel,
        set_name,
        set_phone,
        set_date,
        set_party_size,
        select_slot,
        submit,
    };

    UseReservationResult {
        state,
        availability,
        actions,
    }
}

fn apply(
    controller: &Rc<RefCell<ReservationController>>,
    trigger: &UseForceUpdateHandle,
    f: impl FnOnce(&mut ReservationController),
) {
    f(&mut controller.borrow_mut());
    trigger.force_update();
}
