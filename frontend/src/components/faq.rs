use web_sys::MouseEvent;
use yew::prelude::*;

const FAQS: [(&str, &str); 4] = [
    (
        "Do you just edit videos?",
        "No. Editing is execution. We build positioning systems: the strategic narrative frameworks that guide every piece of content you create. Editing without positioning is just noise with better production value.",
    ),
    (
        "Is this for beginners?",
        "We work with operators serious about long-term brand leverage. Whether you're a founder, creator, or established brand, you need to be committed to building real authority, not chasing quick wins.",
    ),
    (
        "What platforms do you focus on?",
        "Short-form dominant ecosystems, where perception compounds fastest. Your positioning system still works across all channels because it's built on your core narrative, not platform trends.",
    ),
    (
        "Do you guarantee virality?",
        "No. We design authority. Virality is fragile and dependent on algorithms. Authority is built. It lasts and it compounds.",
    ),
];

/// Which item is open, if any, after clicking `clicked`.
fn toggle_expanded(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let expanded = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="section">
            <div class="section-inner">
                <h2 class="section-title reveal">
                    {"Common"}
                    <br />
                    <span class="highlight">{"Questions"}</span>
                </h2>
                <p class="section-lead reveal">{"Clear answers. No fluff."}</p>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(index, (question, answer))| {
                        let is_open = *expanded == Some(index);
                        let toggle = {
                            let expanded = expanded.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                expanded.set(toggle_expanded(*expanded, index));
                            })
                        };
                        html! {
                            <div key={index} class={classes!("faq-item", is_open.then(|| "expanded"))}>
                                <button class="faq-question" aria-expanded={is_open.to_string()} onclick={toggle}>
                                    <span>{*question}</span>
                                    <span class="faq-chevron">{"⌄"}</span>
                                </button>
                                <div class="faq-answer">{*answer}</div>
                            </div>
                        }
                    }) }
                </div>
                <p class="section-lead reveal" style="margin-top: 2.5rem;">
                    {"Still have questions? "}
                    <span class="highlight">{"Let's talk during a Strategy Call."}</span>
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_one_item_is_expanded() {
        assert_eq!(toggle_expanded(None, 2), Some(2));
        assert_eq!(toggle_expanded(Some(2), 1), Some(1));
        assert_eq!(toggle_expanded(Some(1), 1), None);
    }
}
