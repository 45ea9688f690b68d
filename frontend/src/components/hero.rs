use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_open_modal: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let book_call = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open_modal.emit(());
        })
    };

    html! {
        <header id="home" class="hero">
            <div class="section-inner">
                <h1>
                    {"Growth isn't accidental."}
                    <br />
                    <span class="highlight">{"It's engineered."}</span>
                </h1>
                <p class="hero-sub">
                    {"Strategic storytelling, high-retention content systems and distribution architecture, built for founders and creators who refuse to be invisible."}
                </p>
                <div class="hero-cta-group">
                    <button class="cta-button" onclick={book_call}>{"Book a call"}</button>
                    <a href="#results" class="ghost-link">{"View Results"}</a>
                </div>
            </div>
        </header>
    }
}
