use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

const NAV_ITEMS: [(&str, &str); 5] = [
    ("Home", "#home"),
    ("Results", "#results"),
    ("Approach", "#approach"),
    ("Investment", "#investment"),
    ("FAQ", "#faq"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_open_modal: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 80.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor clicks keep their default so the browser scrolls to the section.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let book_call = {
        let menu_open = menu_open.clone();
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_open_modal.emit(());
        })
    };

    let links = |onclick: Option<Callback<MouseEvent>>| {
        NAV_ITEMS
            .iter()
            .map(|(label, href)| {
                html! {
                    <a key={*label} class="nav-link" href={*href} onclick={onclick.clone()}>{*label}</a>
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"THE FLUX"}</a>
                <div class="nav-links">
                    { links(None) }
                    <button class="cta-button" onclick={book_call.clone()}>{"Book a Call"}</button>
                </div>
                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { links(Some(close_menu)) }
                <button class="cta-button" onclick={book_call}>{"Book a Call"}</button>
            </div>
        </nav>
    }
}
