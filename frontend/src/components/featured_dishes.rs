use shared::FeaturedDish;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeaturedDishesProps {
    pub dishes: Vec<FeaturedDish>,
    pub reduced_motion: bool,
}

#[function_component(FeaturedDishes)]
pub fn featured_dishes(props: &FeaturedDishesProps) -> Html {
    let motion = if props.reduced_motion { None } else { Some("card-hover") };

    html! {
        <section id="about" class="featured">
            <div class="section-header">
                <div>
                    <span class="section-eyebrow">{"Chef's picks"}</span>
                    <h2 class="section-title">{"Signature plates, bold flavors"}</h2>
                    <p class="section-lead">
                        {"Fast-moving plating and big, confident tastes. Tap a card to peek the details or reserve directly."}
                    </p>
                </div>
                <div class="section-actions">
                    <a href="#menu" class="btn btn-secondary">{"View full menu"}</a>
                    <a href="#reserve" class="btn btn-primary">{"Reserve"}</a>
                </div>
            </div>

            <div class="featured-grid">
                {for props.dishes.iter().map(|dish| html! {
                    <article
                        key={dish.id}
                        class={classes!("featured-card", motion)}
                        role="button"
                        tabindex="0"
                        aria-label={dish.aria_label()}
                    >
                        <div class="featured-art" aria-hidden="true">{dish.emoji.clone()}</div>
                        <div class="featured-body">
                            <div class="featured-heading">
                                <h3>{dish.name.clone()}</h3>
                                <span class="featured-tag">{dish.tag.clone()}</span>
                            </div>
                            <p class="featured-desc">{dish.desc.clone()}</p>
                            <div class="featured-footer">
                                <span class="featured-price">{dish.price.clone()}</span>
                                <a href="#reserve" class="btn btn-small">{"Reserve"}</a>
                            </div>
                        </div>
                    </article>
                })}
            </div>

            <p class="featured-contact">
                {"Private events or dietary needs? "}
                <a href="#contact">{"Contact our chef"}</a>
            </p>
        </section>
    }
}
