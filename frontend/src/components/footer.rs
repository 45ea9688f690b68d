use chrono::Datelike;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <span>{format!("© {} The Flux. Psychology dictates. Systems execute.", year)}</span>
                <nav class="footer-links">
                    <a href="#contact">{"Contact"}</a>
                    <a href="https://instagram.com" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    <a href="https://linkedin.com" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                </nav>
            </div>
        </footer>
    }
}
