use yew::prelude::*;

const LINKS: [(&str, &str); 4] = [
    ("#menu", "Menu"),
    ("#about", "About"),
    ("#private-dining", "Private Dining"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub name: AttrValue,
    pub on_reserve: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_reserve = {
        let on_reserve = props.on_reserve.clone();
        Callback::from(move |_: MouseEvent| on_reserve.emit(()))
    };

    // Picking a destination from the mobile menu also closes it
    let on_mobile_reserve = {
        let menu_open = menu_open.clone();
        let on_reserve = props.on_reserve.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_reserve.emit(());
        })
    };
    let on_mobile_link = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class="navbar-wrapper">
            <nav class="navbar">
                <div class="navbar-brand">
                    <a href="#" class="navbar-logo">
                        <span class="navbar-logo-mark" aria-hidden="true"></span>
                        <span class="sr-only">{"Restaurant"}</span>
                        <span class="navbar-name">{props.name.clone()}</span>
                    </a>
                    <div class="navbar-links">
                        {for LINKS.iter().map(|(href, label)| html! {
                            <a key={*href} href={*href} class="navbar-link">{*label}</a>
                        })}
                    </div>
                </div>

                <div class="navbar-actions">
                    <button class="navbar-reserve" aria-haspopup="dialog" onclick={on_reserve}>
                        {"Reserve Table"}
                    </button>
                    <button
                        class="navbar-toggle"
                        aria-label="menu"
                        aria-expanded={(*menu_open).to_string()}
                        onclick={on_toggle}
                    >
                        {"☰"}
                    </button>
                </div>
            </nav>

            {if *menu_open {
                html! {
                    <div class="navbar-mobile">
                        {for LINKS.iter().map(|(href, label)| html! {
                            <a key={*href} href={*href} class="navbar-mobile-link" onclick={on_mobile_link.clone()}>
                                {*label}
                            </a>
                        })}
                        <button class="navbar-mobile-reserve" onclick={on_mobile_reserve}>
                            {"Reserve Table"}
                        </button>
                    </div>
                }
            } else {
                html! {}
            }}
        </header>
    }
}
