use gloo::events::EventListener;
use shared::reservation::{MAX_PARTY_SIZE, MIN_PARTY_SIZE};
use shared::{DraftField, ReservationController, SlotAvailability};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, KeyboardEvent};
use yew::prelude::*;

use super::time_slot_picker::TimeSlotPicker;
use crate::hooks::use_reservation::UseReservationActions;

#[derive(Properties, PartialEq)]
pub struct ReservationModalProps {
    pub state: ReservationController,
    pub availability: SlotAvailability,
    pub actions: UseReservationActions,
    #[prop_or_default]
    pub reduced_motion: bool,
}

#[function_component(ReservationModal)]
pub fn reservation_modal(props: &ReservationModalProps) -> Html {
    let is_open = props.state.is_open();

    // Escape closes the dialog while it is open
    use_effect_with(is_open, {
        let close = props.actions.close.clone();
        move |is_open| {
            let listener = web_sys::window()
                .and_then(|window| window.document())
                .filter(|_| *is_open)
                .map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        let is_escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|key| key.key() == "Escape");
                        if is_escape {
                            close.emit(());
                        }
                    })
                });
            move || drop(listener)
        }
    });

    let on_name_input = {
        let set_name = props.actions.set_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_name.emit(input.value());
        })
    };

    let on_phone_input = {
        let set_phone = props.actions.set_phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_phone.emit(input.value());
        })
    };

    let on_date_change = {
        let set_date = props.actions.set_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_date.emit(input.value());
        })
    };

    let on_party_change = {
        let set_party_size = props.actions.set_party_size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse::<u8>() {
                set_party_size.emit(size);
            }
        })
    };

    let on_submit = {
        let submit = props.actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let on_backdrop_click = {
        let close = props.actions.close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close = {
        let close = props.actions.close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let on_cancel = {
        let cancel = props.actions.cancel.clone();
        Callback::from(move |_: MouseEvent| cancel.emit(()))
    };

    if !is_open {
        return html! {};
    }

    let draft = props.state.draft();
    let sending = props.state.is_sending();
    let field_error = |field: DraftField| -> Html {
        match props.state.field_error(field) {
            Some(error) => html! { <p class="field-error" role="alert">{error.to_string()}</p> },
            None => html! {},
        }
    };
    let invalid = |field: DraftField| props.state.field_error(field).is_some().then_some("input-invalid");

    html! {
        <div class="reservation-modal-backdrop" onclick={on_backdrop_click}>
            <div
                class={classes!("reservation-modal", (!props.reduced_motion).then_some("modal-animated"))}
                role="dialog"
                aria-modal="true"
                aria-label="Reserve a table"
                onclick={on_modal_click}
            >
                <div class="reservation-modal-header">
                    <div>
                        <h4 class="reservation-modal-title">{"Reserve a table"}</h4>
                        <p class="reservation-modal-subtitle">
                            {"Choose date & time — we’ll hold the table for 15 minutes past reservation."}
                        </p>
                    </div>
                    <button class="reservation-modal-close" aria-label="Close reservation dialog" onclick={on_close}>
                        {"✕"}
                    </button>
                </div>

                {if let Some(errors) = props.state.validation_errors() {
                    html! { <div class="reservation-error">{errors.to_string()}</div> }
                } else {
                    html! {}
                }}

                <form class="reservation-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="reservation-name">{"Your name"}</label>
                        <input
                            id="reservation-name"
                            type="text"
                            class={classes!("reservation-input", invalid(DraftField::Name))}
                            placeholder="Full name"
                            value={draft.name.clone()}
                            oninput={on_name_input}
                            disabled={sending}
                        />
                        {field_error(DraftField::Name)}
                    </div>

                    <div class="form-group">
                        <label for="reservation-phone">{"Phone"}</label>
                        <input
                            id="reservation-phone"
                            type="tel"
                            class={classes!("reservation-input", invalid(DraftField::Phone))}
                            placeholder="e.g. +8801xxxxxxxxx"
                            value={draft.phone.clone()}
                            oninput={on_phone_input}
                            disabled={sending}
                        />
                        {field_error(DraftField::Phone)}
                    </div>

                    <div class="form-group">
                        <label for="reservation-date">{"Date"}</label>
                        <input
                            id="reservation-date"
                            type="date"
                            class={classes!("reservation-input", invalid(DraftField::Date))}
                            value={draft.date.clone()}
                            onchange={on_date_change}
                            disabled={sending}
                        />
                        {field_error(DraftField::Date)}
                    </div>

                    <div class="form-group">
                        <label for="reservation-party">{"Party size"}</label>
                        <select
                            id="reservation-party"
                            class={classes!("reservation-input", invalid(DraftField::PartySize))}
                            onchange={on_party_change}
                            disabled={sending}
                        >
                            {for (MIN_PARTY_SIZE..=MAX_PARTY_SIZE).map(|size| html! {
                                <option
                                    key={size}
                                    value={size.to_string()}
                                    selected={size == draft.party_size}
                                >
                                    {party_label(size)}
                                </option>
                            })}
                        </select>
                        {field_error(DraftField::PartySize)}
                    </div>

                    <div class="form-group form-group-wide">
                        <label>{"Available time slots"}</label>
                        <TimeSlotPicker
                            slots={props.state.slots().to_vec()}
                            availability={props.availability.clone()}
                            selected={draft.selected_slot}
                            on_select={props.actions.select_slot.clone()}
                            disabled={sending}
                            reduced_motion={props.reduced_motion}
                        />
                        {field_error(DraftField::Slot)}
                    </div>

                    <div class="reservation-buttons form-group-wide">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={sending}>
                            {if sending { "Sending…" } else { "Confirm" }}
                        </button>
                    </div>

                    {if let Some(failure) = props.state.failure() {
                        html! {
                            <div class="reservation-failure form-group-wide" role="alert">
                                {format!("Something went wrong — {}. Please try again.", failure.reason)}
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    {if let Some(confirmation) = props.state.confirmation() {
                        html! {
                            <div class="reservation-success form-group-wide" role="status">
                                {confirmation.message.clone()}
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </form>
            </div>
        </div>
    }
}

fn party_label(size: u8) -> String {
    if size == 1 {
        "1 person".to_string()
    } else {
        format!("{} persons", size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_party_label_pluralises() {
        assert_eq!(party_label(1), "1 person");
        assert_eq!(party_label(2), "2 persons");
        assert_eq!(party_label(20), "20 persons");
    }
}
