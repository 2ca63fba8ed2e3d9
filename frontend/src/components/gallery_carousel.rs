use shared::carousel::{marquee_duration_secs, marquee_track};
use shared::GalleryImage;
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GalleryCarouselProps {
    pub images: Vec<GalleryImage>,
    pub speed: f64,
    pub reduced_motion: bool,
}

/// Endless image marquee. Under reduced motion it becomes a plain scroll strip.
#[function_component(GalleryCarousel)]
pub fn gallery_carousel(props: &GalleryCarouselProps) -> Html {
    let strip = if props.reduced_motion {
        html! {
            <div class="gallery-strip">
                {for props.images.iter().map(|img| html! {
                    <div key={img.id} class="gallery-tile">
                        <img src={img.src.clone()} alt={img.alt.clone()} loading="lazy" />
                        <div class="gallery-caption">{img.alt.clone()}</div>
                    </div>
                })}
            </div>
        }
    } else {
        let duration = marquee_duration_secs(props.speed);
        html! {
            <div class="gallery-track" style={format!("animation-duration: {:.2}s", duration)}>
                {for marquee_track(&props.images).into_iter().enumerate().map(|(idx, img)| html! {
                    <button
                        key={format!("{}-{}", img.src, idx)}
                        class="gallery-tile gallery-tile-button"
                        aria-label={img.alt.clone()}
                        onclick={Callback::from(center_clicked_tile)}
                    >
                        <img src={img.src.clone()} alt={img.alt.clone()} loading="lazy" />
                        <div class="gallery-caption">{img.alt.clone()}</div>
                    </button>
                })}
            </div>
        }
    };

    html! {
        <section class="gallery">
            <div class="section-header">
                <div>
                    <span class="section-eyebrow">{"Gallery"}</span>
                    <h2 class="section-title">{"A quick look — moments from the kitchen"}</h2>
                    <p class="section-lead">
                        {"Fast visuals for a lively impression. Tap to open full-size images or swipe on mobile."}
                    </p>
                </div>
                <div class="section-actions">
                    <a href="#menu" class="btn btn-secondary">{"See gallery"}</a>
                </div>
            </div>

            <div class="gallery-frame">
                {strip}
            </div>

            <div class="gallery-footer">
                {"Want prints? "}
                <a href="#contact">{"Contact us"}</a>
            </div>
        </section>
    }
}

fn center_clicked_tile(event: MouseEvent) {
    let Some(tile) = event.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_inline(ScrollLogicalPosition::Center);
    tile.scroll_into_view_with_scroll_into_view_options(&options);
}
