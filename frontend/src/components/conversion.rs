use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConversionBlockProps {
    pub on_open_modal: Callback<()>,
}

#[function_component(ConversionBlock)]
pub fn conversion_block(props: &ConversionBlockProps) -> Html {
    let book_call = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open_modal.emit(());
        })
    };

    html! {
        <section id="contact" class="section">
            <div class="section-inner conversion-block reveal">
                <h2 class="section-title">
                    <span class="highlight">{"Build a Brand That Compounds."}</span>
                </h2>
                <p class="section-lead" style="margin: 0 auto 2rem;">
                    {"This isn't content outsourcing. It's narrative ownership."}
                    <br />
                    {"Psychology dictates. Systems execute."}
                </p>
                <button class="cta-button" onclick={book_call}>{"Book a Strategy Call"}</button>
            </div>
        </section>
    }
}
