//! Static content sections between the hero and the pricing block, in page order.

use yew::prelude::*;

struct Card {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

fn card_grid(cards: &[Card]) -> Html {
    html! {
        <div class="card-grid">
            { for cards.iter().map(|card| html! {
                <div class="card reveal">
                    <span class="card-icon">{card.icon}</span>
                    <h3>{card.title}</h3>
                    <p>{card.body}</p>
                </div>
            }) }
        </div>
    }
}

const TRUST_LABELS: [&str; 12] = [
    "Cinematic Edits",
    "Event Recaps",
    "Commercials",
    "Brand Videos",
    "Short-Form Content",
    "Podcast Clips",
    "Reels & TikToks",
    "Documentary Edits",
    "Talking Head",
    "Explainer Videos",
    "Trailers",
    "YouTube Edits",
];

#[function_component(TrustStrip)]
pub fn trust_strip() -> Html {
    html! {
        <section class="trust-strip">
            <p class="trust-caption reveal">{"Brands and creators trust The Flux with"}</p>
            <div class="trust-row">
                { for TRUST_LABELS.iter().map(|label| html! {
                    <span class="trust-item">{"✦ "}{*label}</span>
                }) }
            </div>
        </section>
    }
}

const PROBLEM_CARDS: [Card; 6] = [
    Card { icon: "⊞", title: "Quality Checks", body: "Every video is handled by a pro before it reaches you. Flawless every time." },
    Card { icon: "◎", title: "Lightning Fast Delivery", body: "Your professionally edited video is ready within 48 hours. No delays, no drama." },
    Card { icon: "⟳", title: "Simple, Flat Pricing", body: "No hidden fees, no surprises. Clear, predictable pricing that works for you." },
    Card { icon: "✦", title: "Random Reels", body: "Short-form content handled with strategy, not guesswork." },
    Card { icon: "⟡", title: "Trend Chasing", body: "We build narratives that last, not spikes that fade." },
    Card { icon: "◉", title: "Consistent Voice", body: "Your brand identity stays sharp across every piece of content." },
];

#[function_component(Problem)]
pub fn problem() -> Html {
    html! {
        <section id="approach" class="section">
            <div class="section-inner">
                <h2 class="section-title reveal">
                    {"Content without a system "}
                    <span class="highlight">{"is just noise."}</span>
                </h2>
                <p class="section-lead reveal">
                    {"Once you try it, you'll never go anywhere else for video editing. Seriously."}
                </p>
                { card_grid(&PROBLEM_CARDS) }
            </div>
        </section>
    }
}

const BENEFITS: [&str; 4] = [
    "Clarify your positioning",
    "Turn content into inbound leverage",
    "Increase retention and trust",
    "Compound your digital presence",
];

#[function_component(Solution)]
pub fn solution() -> Html {
    html! {
        <section class="section">
            <div class="section-inner">
                <p class="section-lead reveal">
                    {"We don't edit videos. "}
                    <span class="highlight">{"We design narrative systems."}</span>
                </p>
                <h2 class="section-title reveal">
                    {"The Flux builds structured, repeatable content systems that:"}
                </h2>
                <ul class="check-list">
                    { for BENEFITS.iter().map(|benefit| html! {
                        <li class="reveal">{*benefit}</li>
                    }) }
                </ul>
            </div>
        </section>
    }
}

const SERVICES: [Card; 4] = [
    Card { icon: "✧", title: "Brand Positioning Architecture", body: "Sharpen identity, message and angle so the market sees a clear authority." },
    Card { icon: "▤", title: "Narrative Content Systems", body: "Recurring content frameworks built for retention and loyal audiences." },
    Card { icon: "▶", title: "High-Impact Short-Form Execution", body: "Reels and clips that shape perception and drive meaningful engagement." },
    Card { icon: "◎", title: "Funnel-Driven Distribution", body: "Each piece tied to a positioning objective inside a revenue-focused funnel." },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="section">
            <div class="section-inner">
                <p class="section-lead reveal">{"Growth Infrastructure Services"}</p>
                <h2 class="section-title reveal">
                    {"Brand & Narrative "}
                    <span class="highlight">{"Infrastructure"}</span>
                </h2>
                { card_grid(&SERVICES) }
            </div>
        </section>
    }
}

const RESULTS: [(&str, &str); 3] = [
    ("48h", "Average turnaround per video"),
    ("3x", "Typical lift in watch-time retention"),
    ("100%", "Content built around one core narrative"),
];

#[function_component(Results)]
pub fn results() -> Html {
    html! {
        <section id="results" class="section">
            <div class="section-inner">
                <h2 class="section-title reveal">
                    {"Results that "}
                    <span class="highlight">{"compound."}</span>
                </h2>
                <div class="card-grid">
                    { for RESULTS.iter().map(|(figure, caption)| html! {
                        <div class="card reveal">
                            <h3 class="highlight">{*figure}</h3>
                            <p>{*caption}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

const PROCESS_STEPS: [Card; 4] = [
    Card { icon: "01", title: "Diagnose", body: "We audit positioning, audience leverage and growth intent." },
    Card { icon: "02", title: "Architect", body: "We design the narrative structure and the content frameworks around it." },
    Card { icon: "03", title: "Execute", body: "We produce and refine high-impact content." },
    Card { icon: "04", title: "Compound", body: "We optimize for authority, not vanity metrics." },
];

#[function_component(ProcessTimeline)]
pub fn process_timeline() -> Html {
    html! {
        <section class="section">
            <div class="section-inner">
                <h2 class="section-title reveal">{"How it works"}</h2>
                <ol class="timeline">
                    { for PROCESS_STEPS.iter().map(|step| html! {
                        <li class="timeline-step reveal">
                            <span class="step-number">{step.icon}</span>
                            <h3>{step.title}</h3>
                            <p>{step.body}</p>
                        </li>
                    }) }
                </ol>
            </div>
        </section>
    }
}

const PRINCIPLES: [Card; 4] = [
    Card { icon: "⚡", title: "Built for Leverage", body: "Every piece moves perception forward." },
    Card { icon: "♥", title: "Retention-First Strategy", body: "Depth over dopamine spikes." },
    Card { icon: "♛", title: "Positioning Over Popularity", body: "Attention without authority does not last." },
    Card { icon: "⚙", title: "Systemized Growth", body: "No random posting. Structured compounding." },
];

#[function_component(Differentiation)]
pub fn differentiation() -> Html {
    html! {
        <section class="section">
            <div class="section-inner">
                <h2 class="section-title reveal">
                    {"Psychology dictates. "}
                    <span class="highlight">{"Systems execute."}</span>
                </h2>
                { card_grid(&PRINCIPLES) }
                <p class="section-lead reveal">
                    {"This is how we build "}
                    <span class="highlight">{"brands that last."}</span>
                </p>
            </div>
        </section>
    }
}

const ENGAGEMENT_STAGES: [Card; 3] = [
    Card { icon: "Stage One", title: "Positioning Clarity", body: "For brands that first need their market position and core narrative pinned down." },
    Card { icon: "Stage Two", title: "Narrative Infrastructure", body: "For brands that need content systems and distribution frameworks that compound." },
    Card { icon: "Stage Three", title: "Full-Scale Execution", body: "For brands that need a complete authority engine, execution and distribution aligned." },
];

#[function_component(Engagement)]
pub fn engagement() -> Html {
    html! {
        <section class="section">
            <div class="section-inner">
                <h2 class="section-title reveal">
                    {"Strategic "}
                    <span class="highlight">{"engagement"}</span>
                </h2>
                { card_grid(&ENGAGEMENT_STAGES) }
            </div>
        </section>
    }
}

const ENGAGEMENT_STEPS: [Card; 3] = [
    Card { icon: "01", title: "Strategy Call", body: "We assess alignment, positioning, and leverage potential." },
    Card { icon: "02", title: "Custom Narrative Blueprint", body: "If aligned, we craft a tailored proposal built around your objectives." },
    Card { icon: "03", title: "Structured Execution", body: "Clear deliverables. Clear timelines. Clear outcomes." },
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section class="section">
            <div class="section-inner">
                <h2 class="section-title reveal">
                    {"How engagements "}
                    <span class="highlight">{"work"}</span>
                </h2>
                { card_grid(&ENGAGEMENT_STEPS) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn trust_labels_are_unique() {
        let unique: HashSet<_> = TRUST_LABELS.iter().collect();
        assert_eq!(unique.len(), TRUST_LABELS.len());
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.icon, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn every_card_has_copy() {
        let tables: [&[Card]; 6] =
            [&PROBLEM_CARDS, &SERVICES, &PROCESS_STEPS, &PRINCIPLES, &ENGAGEMENT_STAGES, &ENGAGEMENT_STEPS];
        for card in tables.iter().flat_map(|cards| cards.iter()) {
            assert!(!card.title.is_empty());
            assert!(!card.body.is_empty());
        }
    }
}
