use gloo::events::EventListener;
use yew::prelude::*;

const QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Tracks the user's `prefers-reduced-motion` setting, live.
#[hook]
pub fn use_reduced_motion() -> bool {
    let reduced = use_state(query_matches);

    use_effect_with((), {
        let reduced = reduced.clone();
        move |_| {
            let listener = web_sys::window()
                .and_then(|window| window.match_media(QUERY).ok().flatten())
                .map(|list| {
                    let target = list.clone();
                    EventListener::new(&list, "change", move |_| {
                        reduced.set(target.matches());
                    })
                });
            move || drop(listener)
        }
    });

    *reduced
}

fn query_matches() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(QUERY).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}
