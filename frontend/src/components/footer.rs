use gloo::timers::future::TimeoutFuture;
use shared::content::{OpeningHoursLine, RestaurantInfo};
use shared::newsletter::{NewsletterSignup, ACKNOWLEDGE_FOR};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::booking::millis;
use crate::services::date_utils::current_year;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub restaurant: RestaurantInfo,
    pub opening_hours: Vec<OpeningHoursLine>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let signup = use_mut_ref(NewsletterSignup::default);
    let trigger = use_force_update();

    let on_email_input = {
        let signup = signup.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            signup.borrow_mut().set_email(input.value());
            trigger.force_update();
        })
    };

    let on_subscribe = {
        let signup = signup.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(generation) = signup.borrow_mut().subscribe() else {
                return;
            };
            Logger::info_with_component("footer", "newsletter signup acknowledged");
            trigger.force_update();

            let signup = signup.clone();
            let trigger = trigger.clone();
            spawn_local(async move {
                TimeoutFuture::new(millis(ACKNOWLEDGE_FOR)).await;
                signup.borrow_mut().expire(generation);
                trigger.force_update();
            });
        })
    };

    let (email, acknowledged) = {
        let signup = signup.borrow();
        (signup.email().to_string(), signup.is_acknowledged())
    };

    let restaurant = &props.restaurant;

    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3 class="footer-title">{restaurant.name.clone()}</h3>
                    <p class="footer-lead">
                        {"Wood-fired kitchen, seasonal produce, and theatrical plating. Come hungry."}
                    </p>
                    <div class="footer-contact">
                        <div>{format!("📍 {}", restaurant.address)}</div>
                        <div>
                            {"📞 "}
                            <a href={format!("tel:{}", restaurant.phone)}>{restaurant.phone.clone()}</a>
                        </div>
                        <div>
                            {"✉️ "}
                            <a href={format!("mailto:{}", restaurant.email)}>{restaurant.email.clone()}</a>
                        </div>
                    </div>
                </div>

                <div>
                    <h4 class="footer-heading">{"Opening hours"}</h4>
                    <div class="footer-hours">
                        {for props.opening_hours.iter().map(|line| html! {
                            <div key={line.days.clone()}>{format!("{}: {}", line.days, line.hours)}</div>
                        })}
                    </div>

                    <h4 class="footer-heading">{"Quick links"}</h4>
                    <div class="footer-links">
                        <a href="#menu">{"Menu"}</a>
                        <a href="#reserve">{"Reserve"}</a>
                        <a href="#contact">{"Contact"}</a>
                        <a href="#private-dining">{"Private Dining"}</a>
                    </div>
                </div>

                <div>
                    <h4 class="footer-heading">{"Join our list"}</h4>
                    <p class="footer-lead">
                        {"Get news, events, and special menus — fast updates with occasional surprises."}
                    </p>
                    <form class="newsletter-form" onsubmit={on_subscribe}>
                        <input
                            type="email"
                            class="newsletter-input"
                            placeholder="you@email.com"
                            value={email}
                            oninput={on_email_input}
                        />
                        <button
                            type="submit"
                            class={classes!("newsletter-button", acknowledged.then_some("newsletter-button-thanks"))}
                        >
                            {if acknowledged { "Thanks!" } else { "Subscribe" }}
                        </button>
                    </form>

                    <div class="footer-social">
                        <a href="#" aria-label="Instagram">{"Instagram"}</a>
                        <a href="#" aria-label="Facebook">{"Facebook"}</a>
                        <a href="#" aria-label="Twitter">{"X"}</a>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                {format!("© {} {}. All rights reserved.", current_year(), restaurant.name)}
            </div>
        </footer>
    }
}
