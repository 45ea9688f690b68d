use log::warn;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::form::{Choice, LeadForm};
use super::handoff::build_handoff_url;

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub message: Option<&'static str>,
}

#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    match props.message {
        Some(message) => html! {
            <div class="field-error" role="alert">
                <span class="field-error-icon">{"!"}</span>
                <span>{message}</span>
            </div>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct ChoiceGroupProps {
    pub label: &'static str,
    pub options: Vec<Choice>,
    pub selected: Vec<Choice>,
    pub error: Option<&'static str>,
    pub on_select: Callback<Choice>,
}

/// A labelled row of option chips with its error line underneath.
#[function_component(ChoiceGroup)]
pub fn choice_group(props: &ChoiceGroupProps) -> Html {
    let invalid = props.error.is_some();

    html! {
        <div class="choice-group">
            <div class="choice-group-label">{props.label}</div>
            <div class="choice-chips">
                { for props.options.iter().map(|choice| {
                    let choice = *choice;
                    let selected = props.selected.contains(&choice);
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_select.emit(choice);
                        })
                    };
                    html! {
                        <button
                            type="button"
                            key={choice.label()}
                            class={classes!(
                                "option-chip",
                                selected.then(|| "selected"),
                                (invalid && !selected).then(|| "invalid"),
                            )}
                            aria-pressed={selected.to_string()}
                            {onclick}
                        >
                            {choice.label()}
                        </button>
                    }
                }) }
            </div>
            <FieldError message={props.error} />
        </div>
    }
}

/// Options of one question paired with what the form currently holds.
pub fn choices_for<T: Copy>(
    all: &[T],
    wrap: fn(T) -> Choice,
    form: &LeadForm,
) -> (Vec<Choice>, Vec<Choice>) {
    let options: Vec<Choice> = all.iter().copied().map(wrap).collect();
    let selected = options.iter().copied().filter(|c| form.is_selected(*c)).collect();
    (options, selected)
}

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub label: &'static str,
    #[prop_or("text")]
    pub input_type: &'static str,
    pub value: String,
    #[prop_or_default]
    pub placeholder: &'static str,
    #[prop_or_default]
    pub error: Option<&'static str>,
    #[prop_or_default]
    pub required: bool,
    pub on_input: Callback<String>,
}

#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <div class="text-field">
            <label class="text-field-label">
                {props.label}
                if props.required {
                    <span class="required-mark">{" *"}</span>
                }
            </label>
            <input
                class={classes!("text-field-input", props.error.is_some().then(|| "invalid"))}
                type={props.input_type}
                value={props.value.clone()}
                placeholder={props.placeholder}
                {oninput}
            />
            <FieldError message={props.error} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SchedulerEmbedProps {
    pub base_url: AttrValue,
    pub form: LeadForm,
}

/// Booking frame prefilled from the collected answers.
#[function_component(SchedulerEmbed)]
pub fn scheduler_embed(props: &SchedulerEmbedProps) -> Html {
    match build_handoff_url(&props.base_url, &props.form) {
        Ok(url) => html! {
            <iframe
                class="scheduler-frame"
                src={url.to_string()}
                width="100%"
                height="560"
                frameborder="0"
                title="Schedule a call"
            />
        },
        Err(e) => {
            warn!("Falling back to plain scheduler link: {}", e);
            html! {
                <a class="scheduler-fallback" href={props.base_url.clone()} target="_blank" rel="noopener noreferrer">
                    {"Open the booking page"}
                </a>
            }
        }
    }
}
