use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use super::form::{Choice, Field, LeadForm, TextField};
use super::options::{Bottleneck, Budget, BusinessType, Channel, GrowthGoal, Revenue, Timeline};
use super::widgets::{choices_for, ChoiceGroup, SchedulerEmbed, TextInput};
use super::wizard::{Direction, Step, Transition, WizardState};

#[derive(Properties, PartialEq)]
pub struct OnboardingModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// Overrides [`config::get_scheduler_url`].
    #[prop_or_default]
    pub scheduler_url: Option<AttrValue>,
    /// Fired once per session, when the contact step is accepted.
    #[prop_or_default]
    pub on_success: Option<Callback<LeadForm>>,
}

fn set_body_overflow(value: &str) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        warn!("No document body to lock scrolling on");
        return;
    };
    if let Err(e) = body.style().set_property("overflow", value) {
        warn!("Failed to set body overflow: {:?}", e);
    }
}

#[function_component(OnboardingModal)]
pub fn onboarding_modal(props: &OnboardingModalProps) -> Html {
    let wizard = use_state(WizardState::default);
    // Set right after a step change, cleared a frame later so the body slides in.
    let entering = use_state(|| false);
    let pending_reset = use_mut_ref(|| None::<Timeout>);

    {
        use_effect_with_deps(
            move |is_open| {
                set_body_overflow(if *is_open { "hidden" } else { "" });
                || set_body_overflow("")
            },
            props.is_open,
        );
    }

    {
        let entering = entering.clone();
        use_effect_with_deps(
            move |_| {
                entering.set(true);
                let timeout = Timeout::new(20, move || entering.set(false));
                move || drop(timeout)
            },
            wizard.step,
        );
    }

    let handle_close = {
        let wizard = wizard.clone();
        let on_close = props.on_close.clone();
        let pending_reset = pending_reset.clone();
        Callback::from(move |_: ()| {
            on_close.emit(());
            let wizard = wizard.clone();
            let timeout = Timeout::new(config::MODAL_RESET_DELAY_MS, move || {
                let mut cleared = (*wizard).clone();
                cleared.reset();
                wizard.set(cleared);
            });
            // Replacing a pending reset cancels it.
            *pending_reset.borrow_mut() = Some(timeout);
        })
    };

    {
        let handle_close = handle_close.clone();
        let is_open = props.is_open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if is_open && e.key() == "Escape" {
                handle_close.emit(());
            }
        });
    }

    let on_select = {
        let wizard = wizard.clone();
        Callback::from(move |choice: Choice| {
            let mut next = (*wizard).clone();
            next.select(choice);
            wizard.set(next);
        })
    };

    let on_text = |field: TextField| {
        let wizard = wizard.clone();
        Callback::from(move |value: String| {
            let mut next = (*wizard).clone();
            next.input(field, value);
            wizard.set(next);
        })
    };

    let go_next = {
        let wizard = wizard.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*wizard).clone();
            if let Transition::Submitted(lead) = next.next() {
                info!("Onboarding completed, handing off to the scheduler");
                if let Some(on_success) = &on_success {
                    on_success.emit(lead);
                }
            }
            wizard.set(next);
        })
    };

    let go_back = {
        let wizard = wizard.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*wizard).clone();
            next.back();
            wizard.set(next);
        })
    };

    if !props.is_open {
        return html! {};
    }

    let state = &*wizard;
    let form = &state.form;
    let errors = &state.errors;
    let step = state.step;

    let body = match step {
        Step::Business => {
            let (business, business_selected) = choices_for(BusinessType::ALL, Choice::BusinessType, form);
            let (revenue, revenue_selected) = choices_for(Revenue::ALL, Choice::Revenue, form);
            let (goals, goals_selected) = choices_for(GrowthGoal::ALL, Choice::GrowthGoal, form);
            html! {
                <>
                    <ChoiceGroup label="Business type" options={business} selected={business_selected}
                        error={errors.get(Field::BusinessType)} on_select={on_select.clone()} />
                    <ChoiceGroup label="Monthly revenue" options={revenue} selected={revenue_selected}
                        error={errors.get(Field::Revenue)} on_select={on_select.clone()} />
                    <ChoiceGroup label="Primary growth goal" options={goals} selected={goals_selected}
                        error={errors.get(Field::GrowthGoal)} on_select={on_select.clone()} />
                </>
            }
        }
        Step::Growth => {
            let (channels, channels_selected) = choices_for(Channel::ALL, Choice::Channel, form);
            let (bottlenecks, bottleneck_selected) = choices_for(Bottleneck::ALL, Choice::Bottleneck, form);
            let (timelines, timeline_selected) = choices_for(Timeline::ALL, Choice::Timeline, form);
            html! {
                <>
                    <ChoiceGroup label="Active marketing channels (select all)" options={channels}
                        selected={channels_selected} error={errors.get(Field::Channels)} on_select={on_select.clone()} />
                    <ChoiceGroup label="Biggest growth bottleneck" options={bottlenecks}
                        selected={bottleneck_selected} error={errors.get(Field::Bottleneck)} on_select={on_select.clone()} />
                    <ChoiceGroup label="Desired timeline to results" options={timelines}
                        selected={timeline_selected} error={errors.get(Field::Timeline)} on_select={on_select.clone()} />
                </>
            }
        }
        Step::Contact => {
            let (budgets, budget_selected) = choices_for(Budget::ALL, Choice::Budget, form);
            html! {
                <>
                    <ChoiceGroup label="Monthly budget range" options={budgets} selected={budget_selected}
                        error={errors.get(Field::Budget)} on_select={on_select.clone()} />
                    <div class="contact-grid">
                        <TextInput label="Full name" required={true} value={form.text(TextField::Name).to_string()}
                            placeholder="Jane Smith" error={errors.get(Field::Name)}
                            on_input={on_text(TextField::Name)} />
                        <TextInput label="Work email" input_type="email" required={true} value={form.text(TextField::Email).to_string()}
                            placeholder="you@company.com" error={errors.get(Field::Email)}
                            on_input={on_text(TextField::Email)} />
                        <TextInput label="Phone" input_type="tel" value={form.text(TextField::Phone).to_string()}
                            placeholder="+1 555 000 0000" on_input={on_text(TextField::Phone)} />
                        <TextInput label="Company" value={form.text(TextField::Company).to_string()}
                            placeholder="Your company name" on_input={on_text(TextField::Company)} />
                    </div>
                </>
            }
        }
        Step::Booking => {
            let base_url = props
                .scheduler_url
                .clone()
                .unwrap_or_else(|| AttrValue::from(config::get_scheduler_url()));
            html! {
                <div class="booking">
                    <div class="booking-banner">
                        <span class="booking-check">{"✓"}</span>
                        <span>{"Application received, now lock in your call time below."}</span>
                    </div>
                    <SchedulerEmbed {base_url} form={form.clone()} />
                </div>
            }
        }
    };

    let nav = match step {
        Step::Booking => html! {},
        step => html! {
            <div class="wizard-nav">
                if step.prev().is_some() {
                    <button type="button" class="wizard-back" onclick={go_back}>{"← Back"}</button>
                } else {
                    <span />
                }
                <button type="button" class="wizard-next" onclick={go_next}>
                    { if step == Step::Contact { "Submit & book call →" } else { "Continue →" } }
                </button>
            </div>
        },
    };

    let slide = match state.direction {
        Direction::Forward => "forward",
        Direction::Backward => "backward",
    };

    let on_backdrop = {
        let handle_close = handle_close.clone();
        Callback::from(move |_: MouseEvent| handle_close.emit(()))
    };
    let on_close_button = {
        let handle_close = handle_close.clone();
        Callback::from(move |_: MouseEvent| handle_close.emit(()))
    };

    html! {
        <div class="onboarding-overlay" role="dialog" aria-modal="true">
            <div class="onboarding-backdrop" onclick={on_backdrop} />
            <div class="onboarding-panel">
                <button type="button" class="onboarding-close" aria-label="Close" onclick={on_close_button}>
                    {"✕"}
                </button>
                if !step.is_terminal() {
                    <div class="wizard-progress">
                        { for (0..Step::QUESTION_STEPS).map(|i| html! {
                            <div class={classes!("wizard-progress-segment", (i < step.number()).then(|| "lit"))} />
                        }) }
                    </div>
                }
                <div key={format!("head-{}", step.number())}
                    class={classes!("wizard-head", slide, (*entering).then(|| "entering"))}>
                    <div class="wizard-eyebrow">{step.eyebrow()}</div>
                    <h2 class="wizard-heading">{step.heading()}</h2>
                    <p class="wizard-sub">{step.subheading()}</p>
                </div>
                <div key={format!("body-{}", step.number())}
                    class={classes!("wizard-body", slide, (*entering).then(|| "entering"))}>
                    {body}
                </div>
                {nav}
            </div>
        </div>
    }
}
