use log::{info, warn};
use yew::prelude::*;

use crate::components::{
    conversion::ConversionBlock,
    faq::Faq,
    footer::Footer,
    hero::Hero,
    investment::Investment,
    navbar::Navbar,
    sections::{
        Differentiation, Engagement, HowItWorks, Problem, ProcessTimeline, Results, Services, Solution,
        TrustStrip,
    },
};
use crate::hooks::use_reveal_on_scroll;
use crate::onboarding::{form::LeadForm, modal::OnboardingModal};

#[function_component(Home)]
pub fn home() -> Html {
    let modal_open = use_state(|| false);

    use_reveal_on_scroll();

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(true))
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    let on_success = Callback::from(|lead: LeadForm| match serde_json::to_string(&lead) {
        Ok(json) => info!("Lead: {}", json),
        Err(e) => warn!("Could not serialize lead: {}", e),
    });

    html! {
        <div class="landing-page">
            <Navbar on_open_modal={open_modal.clone()} />
            <Hero on_open_modal={open_modal.clone()} />
            <TrustStrip />
            <Problem />
            <Solution />
            <Services />
            <Results />
            <ProcessTimeline />
            <Differentiation />
            <Engagement />
            <HowItWorks />
            <Investment on_open_modal={open_modal.clone()} />
            <Faq />
            <ConversionBlock on_open_modal={open_modal} />
            <Footer />
            <OnboardingModal is_open={*modal_open} on_close={close_modal} {on_success} />
        </div>
    }
}
