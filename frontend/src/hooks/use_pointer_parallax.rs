use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use shared::motion::{follow, PointerOffset, SpringConfig};
use wasm_bindgen::JsCast;
use web_sys::{Element, PointerEvent};
use yew::prelude::*;

const FRAME_MS: u32 = 16;
/// Stop stepping once every axis is within this many pixels
const SETTLE_PX: f64 = 0.25;

/// Pointer offset from the centre of `node`, updated on every `pointermove`.
///
/// Stays at the origin while `enabled` is false.
#[hook]
pub fn use_pointer_offset(node: NodeRef, enabled: bool) -> PointerOffset {
    let offset = use_state(PointerOffset::default);

    use_effect_with(enabled, {
        let offset = offset.clone();
        move |enabled| {
            let listener = if *enabled {
                node.cast::<Element>().map(|element| {
                    let target = element.clone();
                    EventListener::new(&element, "pointermove", move |event| {
                        let Some(event) = event.dyn_ref::<PointerEvent>() else {
                            return;
                        };
                        let rect = target.get_bounding_client_rect();
                        offset.set(PointerOffset::from_rect(
                            event.client_x() as f64,
                            event.client_y() as f64,
                            rect.left(),
                            rect.top(),
                            rect.width(),
                            rect.height(),
                        ));
                    })
                })
            } else {
                offset.set(PointerOffset::default());
                None
            };
            move || drop(listener)
        }
    });

    *offset
}

/// Chases `target` one spring step per frame, giving the lagged feel of the hero
#[hook]
pub fn use_spring(target: PointerOffset, spring: SpringConfig) -> PointerOffset {
    let current = use_state(PointerOffset::default);

    use_effect_with((target, *current), {
        let current = current.clone();
        move |(target, value)| {
            let step = if settled(*value, *target) {
                None
            } else {
                let next = follow(*value, *target, spring);
                Some(Timeout::new(FRAME_MS, move || current.set(next)))
            };
            move || drop(step)
        }
    });

    *current
}

fn settled(value: PointerOffset, target: PointerOffset) -> bool {
    (value.x - target.x).abs() < SETTLE_PX && (value.y - target.y).abs() < SETTLE_PX
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_settled_threshold() {
        let target = PointerOffset { x: 10.0, y: -4.0 };
        assert!(settled(PointerOffset { x: 9.9, y: -4.1 }, target));
        assert!(!settled(PointerOffset { x: 9.0, y: -4.0 }, target));
    }
}
