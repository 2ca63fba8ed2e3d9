use shared::{ReservationController, SlotAvailability};
use yew::prelude::*;

use super::reservation_modal::ReservationModal;
use crate::hooks::use_reservation::UseReservationActions;

#[derive(Properties, PartialEq)]
pub struct ReserveSectionProps {
    pub state: ReservationController,
    pub availability: SlotAvailability,
    pub actions: UseReservationActions,
    #[prop_or_default]
    pub reduced_motion: bool,
}

#[function_component(ReserveSection)]
pub fn reserve_section(props: &ReserveSectionProps) -> Html {
    let on_open = {
        let open = props.actions.open.clone();
        Callback::from(move |_: MouseEvent| open.emit(()))
    };

    html! {
        <section id="reserve" class="reserve-section">
            <div class="reserve-banner">
                <div>
                    <h3 class="reserve-title">{"Reserve a table — fast & flexible"}</h3>
                    <p class="reserve-lead">
                        {"Select date and time, choose party size, and we’ll prepare the table. Live-fire nights fill up quickly — act fast."}
                    </p>
                </div>
                <div class="reserve-actions">
                    <button class="btn btn-primary" aria-haspopup="dialog" onclick={on_open}>
                        {"Quick Reserve"}
                    </button>
                    <a href="#contact" class="btn btn-secondary">{"Call Us"}</a>
                </div>
            </div>

            <ReservationModal
                state={props.state.clone()}
                availability={props.availability.clone()}
                actions={props.actions.clone()}
                reduced_motion={props.reduced_motion}
            />
        </section>
    }
}
