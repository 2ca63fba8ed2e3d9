use shared::{ClockTime, SlotAvailability};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimeSlotPickerProps {
    pub slots: Vec<ClockTime>,
    pub availability: SlotAvailability,
    pub selected: Option<ClockTime>,
    pub on_select: Callback<ClockTime>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub reduced_motion: bool,
}

/// Grid of bookable times; past slots render disabled.
#[function_component(TimeSlotPicker)]
pub fn time_slot_picker(props: &TimeSlotPickerProps) -> Html {
    if props.slots.is_empty() {
        return html! {
            <p class="time-slots-empty">{"No time slots are available."}</p>
        };
    }

    html! {
        <div class="time-slots" role="group" aria-label="Available time slots">
            {for props.slots.iter().map(|slot| {
                let slot = *slot;
                let is_selected = props.selected == Some(slot);
                let is_past = props.availability.is_disabled(slot);

                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(slot))
                };

                html! {
                    <button
                        key={slot.minutes()}
                        type="button"
                        class={classes!(
                            "time-slot",
                            is_selected.then_some("time-slot-selected"),
                            is_past.then_some("time-slot-past"),
                            (!props.reduced_motion).then_some("time-slot-animated"),
                        )}
                        aria-pressed={is_selected.to_string()}
                        disabled={is_past || props.disabled}
                        {onclick}
                    >
                        {slot.to_string()}
                    </button>
                }
            })}
        </div>
    }
}
