use anyhow::Context;
use shared::SiteContent;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{
    FeaturedDishes, Footer, GalleryCarousel, Hero, MenuSection, Navbar, ReserveSection, Testimonials,
};
use hooks::use_reduced_motion::use_reduced_motion;
use hooks::use_reservation::use_reservation;
use services::logging::{init_tracing, Logger};

fn load_content() -> SiteContent {
    match SiteContent::bundled().context("bundled site content could not be loaded") {
        Ok(content) => content,
        Err(e) => {
            Logger::error_with_component("app", &format!("{:#}; using defaults", e));
            SiteContent::default()
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let content = use_memo((), |_| load_content());
    let reduced_motion = use_reduced_motion();
    let reservation = use_reservation(content.reservation_hours.clone());

    html! {
        <div class="page">
            <Navbar
                name={content.restaurant.name.clone()}
                on_reserve={reservation.actions.open.clone()}
            />
            <Hero
                hero={content.hero.clone()}
                restaurant={content.restaurant.clone()}
                hours={content.reservation_hours.clone()}
                on_reserve={reservation.actions.open.clone()}
                {reduced_motion}
            />
            <FeaturedDishes dishes={content.featured.clone()} {reduced_motion} />
            <MenuSection items={content.menu.clone()} {reduced_motion} />
            <ReserveSection
                state={reservation.state.clone()}
                availability={reservation.availability.clone()}
                actions={reservation.actions.clone()}
                {reduced_motion}
            />
            <GalleryCarousel
                images={content.gallery.clone()}
                speed={content.carousel.gallery_speed}
                {reduced_motion}
            />
            <Testimonials
                testimonials={content.testimonials.clone()}
                auto_ms={content.carousel.testimonial_auto_ms}
                {reduced_motion}
            />
            <Footer
                restaurant={content.restaurant.clone()}
                opening_hours={content.opening_hours.clone()}
            />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    init_tracing();
    yew::Renderer::<App>::new().render();
}
