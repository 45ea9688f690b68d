use web_sys::MouseEvent;
use yew::prelude::*;

const FACTORS: [(&str, &str, &str); 3] = [
    ("↗", "Scope", "From positioning to full-scale execution."),
    ("⚡", "Intensity", "Monthly sprints to continuous partnership."),
    ("◈", "Narrative Complexity", "Emerging brands to established market leaders."),
];

#[derive(Properties, PartialEq)]
pub struct InvestmentProps {
    pub on_open_modal: Callback<()>,
}

#[function_component(Investment)]
pub fn investment(props: &InvestmentProps) -> Html {
    let request_call = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open_modal.emit(());
        })
    };

    html! {
        <section id="investment" class="section">
            <div class="section-inner">
                <h2 class="section-title reveal">
                    {"Investments Are"}
                    <br />
                    <span class="highlight">{"Customized"}</span>
                </h2>
                <p class="section-lead reveal">
                    {"Engagements are built around your specific needs, not generic packages."}
                </p>
                <div class="card-grid">
                    { for FACTORS.iter().map(|(icon, label, description)| html! {
                        <div class="card reveal">
                            <span class="card-icon">{*icon}</span>
                            <h3>{*label}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
                <div class="conversion-block reveal" style="margin-top: 3rem;">
                    <p class="section-lead" style="margin: 0 auto 1.5rem;">{"Ready to explore what's possible?"}</p>
                    <button class="cta-button" onclick={request_call}>{"Request a Strategy Call"}</button>
                    <p class="section-lead" style="margin: 1.5rem auto 0; font-size: 0.9rem;">
                        {"We'll assess your situation, timeline, and goals."}
                        <br />
                        {"No obligation. Just clarity."}
                    </p>
                </div>
            </div>
        </section>
    }
}
