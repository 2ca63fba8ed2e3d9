use shared::motion::menu_garnish;
use shared::{filter_by_category, MenuCategory, MenuItem, MenuVariant};
use yew::prelude::*;

use crate::hooks::use_pointer_parallax::use_pointer_offset;

#[derive(Properties, PartialEq)]
pub struct MenuSectionProps {
    pub items: Vec<MenuItem>,
    #[prop_or_default]
    pub variant: MenuVariant,
    #[prop_or(AttrValue::Static("Our Menu"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static("Seasonal plates, crafted daily. Pick a category to explore."))]
    pub subtitle: AttrValue,
    pub reduced_motion: bool,
}

/// Menu browser with category tabs.
///
/// `Cards` shows image cards with a drifting garnish; `Compact` is a dense
/// two-column list.
#[function_component(MenuSection)]
pub fn menu_section(props: &MenuSectionProps) -> Html {
    let active = use_state(MenuCategory::default);
    let section = use_node_ref();

    let garnish_enabled = props.variant == MenuVariant::Cards && !props.reduced_motion;
    let offset = use_pointer_offset(section.clone(), garnish_enabled);

    let visible = filter_by_category(&props.items, *active);

    let tabs = MenuCategory::ALL.iter().map(|category| {
        let category = *category;
        let selected = *active == category;
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(category))
        };
        html! {
            <button
                key={category.label()}
                class={classes!("menu-tab", selected.then_some("menu-tab-active"))}
                aria-pressed={selected.to_string()}
                {onclick}
            >
                {category.label()}
            </button>
        }
    });

    let body = match props.variant {
        MenuVariant::Cards => html! {
            <div class="menu-cards">
                {for visible.iter().map(|dish| menu_card(dish, props.reduced_motion))}
            </div>
        },
        MenuVariant::Compact => html! {
            <ul class="menu-compact">
                {for visible.iter().map(|dish| menu_row(dish))}
            </ul>
        },
    };

    html! {
        <section id="menu" class="menu-section" ref={section}>
            <div class="section-header">
                <div>
                    <h2 class="section-title">{props.title.clone()}</h2>
                    <p class="section-lead">{props.subtitle.clone()}</p>
                </div>
                <div class="menu-tabs" role="tablist">
                    {for tabs}
                </div>
            </div>

            {if garnish_enabled {
                html! {
                    <div
                        class="menu-garnish"
                        style={format!("transform: {}", menu_garnish(offset).to_css())}
                        aria-hidden="true"
                    />
                }
            } else {
                html! {}
            }}

            {body}
        </section>
    }
}

fn menu_card(dish: &MenuItem, reduced_motion: bool) -> Html {
    html! {
        <article
            key={dish.id.clone()}
            class={classes!("menu-card", (!reduced_motion).then_some("card-hover"))}
            role="button"
            tabindex="0"
            aria-label={dish.aria_label()}
        >
            <div class="menu-card-image">
                <img src={dish.img.clone()} alt={dish.name.clone()} loading="lazy" />
                <div class="menu-card-overlay">
                    <h3>{dish.name.clone()}</h3>
                    <p>{dish.desc.clone()}</p>
                </div>
            </div>
            <div class="menu-card-footer">
                <span class="menu-price">{dish.price.clone()}</span>
                <button class="btn btn-small">{"View"}</button>
            </div>
        </article>
    }
}

fn menu_row(dish: &MenuItem) -> Html {
    html! {
        <li key={dish.id.clone()} class="menu-row">
            <img class="menu-row-thumb" src={dish.img.clone()} alt={dish.name.clone()} loading="lazy" />
            <div class="menu-row-text">
                <h4>{dish.name.clone()}</h4>
                <p>{dish.desc.clone()}</p>
            </div>
            <span class="menu-price">{dish.price.clone()}</span>
            <div class="menu-row-actions">
                <button class="btn btn-small">{"View"}</button>
                <button class="btn btn-small btn-primary">{"Add"}</button>
            </div>
        </li>
    }
}
