use shared::content::{HeroContent, RestaurantInfo};
use shared::motion::{blob_float, blob_slow, HeroParallax, SpringConfig};
use shared::OperatingHours;
use yew::prelude::*;

use crate::hooks::use_pointer_parallax::{use_pointer_offset, use_spring};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: HeroContent,
    pub restaurant: RestaurantInfo,
    pub hours: OperatingHours,
    pub on_reserve: Callback<()>,
    pub reduced_motion: bool,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let reduced_motion = props.reduced_motion;
    let container = use_node_ref();

    let raw = use_pointer_offset(container.clone(), !reduced_motion);
    let (sx, sy) = HeroParallax::INPUT_SCALE;
    let smoothed = use_spring(raw.scaled(sx, sy), SpringConfig::for_preference(reduced_motion));
    let layers = HeroParallax::from_offset(smoothed);

    let on_reserve = {
        let on_reserve = props.on_reserve.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_reserve.emit(());
        })
    };

    let animated = motion_class(reduced_motion);

    html! {
        <main class={classes!("hero", animated)} ref={container}>
            <section class="hero-copy">
                <div class="hero-badge">{"New Seasonal Menu"}</div>
                <h1 class="hero-title">
                    <span>{"Taste the "}</span>
                    <span class="hero-title-accent">{"extraordinary"}</span>
                    <br />
                    {" at every bite."}
                </h1>
                <p class="hero-lead">{props.restaurant.tagline.clone()}</p>

                <div class="hero-ctas">
                    <a href="#reserve" class="btn btn-primary" aria-label="Reserve a table" onclick={on_reserve}>
                        {"Reserve a table"}
                    </a>
                    <a href="#menu" class="btn btn-secondary">{"View menu"}</a>
                </div>

                <div class="hero-facts">
                    <span>{format!("Open today {} — {}", props.hours.open(), props.hours.close())}</span>
                    <span class="hero-facts-divider" aria-hidden="true"></span>
                    <span>{format!("Chef’s tasting from {}", props.restaurant.tasting_from)}</span>
                </div>
            </section>

            <section class="hero-visual">
                <div class="hero-blob" style={format!("transform: {}", blob_slow(raw).to_css())} aria-hidden="true"></div>
                <div class="hero-backdrop" style={format!("transform: {}", layers.backdrop.to_css())} aria-hidden="true">
                    <img src={props.hero.image.clone()} alt="backdrop" />
                </div>

                <div class="hero-plate" style={format!("transform: {}", layers.plate_transform())}>
                    <img src={props.hero.image.clone()} alt={props.hero.alt.clone()} />
                </div>

                <div class="hero-accents" style={format!("transform: {}", layers.accents.to_css())} aria-hidden="true">
                    <span class="hero-accent">{"🌶️"}</span>
                    <span class="hero-accent">{"🌿"}</span>
                    <span class="hero-accent">{"🍋"}</span>
                </div>

                <figure class="hero-chef" style={format!("transform: {}", blob_float(raw).to_css())}>
                    <img src={props.hero.chef_image.clone()} alt="Our head chef" />
                </figure>
            </section>
        </main>
    }
}

fn motion_class(reduced_motion: bool) -> &'static str {
    if reduced_motion {
        "hero-static"
    } else {
        "hero-animated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::content::SiteContent;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_motion_follows_reduced_motion_prop() {
        let content = SiteContent::bundled().unwrap();
        let props = HeroProps {
            hero: content.hero,
            restaurant: content.restaurant,
            hours: content.reservation_hours,
            on_reserve: Callback::noop(),
            reduced_motion: true,
        };
        assert_eq!(motion_class(props.reduced_motion), "hero-static");
        assert_eq!(motion_class(false), "hero-animated");
    }
}
