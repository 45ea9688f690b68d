//! Step controller for the onboarding wizard.
//!
//! The wizard walks Business -> Growth -> Contact -> Booking. Each forward
//! move is gated by [`LeadForm::validate`]; backward moves are free. Booking
//! is terminal for the session and only left by closing the modal, which
//! resets everything.

use log::debug;

use super::form::{Choice, FieldErrors, LeadForm, TextField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Business,
    Growth,
    Contact,
    Booking,
}

impl Step {
    /// Steps that ask questions, i.e. the ones shown in the progress bar.
    pub const QUESTION_STEPS: u8 = 3;

    pub fn number(self) -> u8 {
        match self {
            Step::Business => 1,
            Step::Growth => 2,
            Step::Contact => 3,
            Step::Booking => 4,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Business => Some(Step::Growth),
            Step::Growth => Some(Step::Contact),
            Step::Contact => Some(Step::Booking),
            Step::Booking => None,
        }
    }

    pub fn prev(self) -> Option<Step> {
        match self {
            Step::Growth => Some(Step::Business),
            Step::Contact => Some(Step::Growth),
            Step::Business | Step::Booking => None,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Step::Business => "Tell us about your business",
            Step::Growth => "Your growth infrastructure",
            Step::Contact => "Scope & contact",
            Step::Booking => "Book your strategy call",
        }
    }

    pub fn subheading(self) -> &'static str {
        match self {
            Step::Business => "Help us understand where you are right now.",
            Step::Growth => "What you're working with and where it's breaking.",
            Step::Contact => "Last step, then you'll book a call directly.",
            Step::Booking => "Pick a time that works for you. We'll be ready.",
        }
    }

    pub fn eyebrow(self) -> String {
        match self {
            Step::Booking => "Almost there".to_string(),
            step => format!("Step {} of {}", step.number(), Self::QUESTION_STEPS),
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

/// Which way the last navigation went, for the slide animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// What a navigation attempt did.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Validation failed or the move does not exist from this step.
    Stayed,
    Moved(Step),
    /// Contact details accepted; carries the record for the completion callback.
    Submitted(LeadForm),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    pub step: Step,
    pub form: LeadForm,
    pub errors: FieldErrors,
    pub direction: Direction,
}

impl WizardState {
    pub fn select(&mut self, choice: Choice) {
        self.form.apply_choice(choice);
        self.errors.clear(choice.field());
    }

    pub fn input(&mut self, field: TextField, value: String) {
        self.form.set_text(field, value);
        self.errors.clear(field.into());
    }

    pub fn next(&mut self) -> Transition {
        if self.step == Step::Contact {
            return self.submit();
        }
        self.direction = Direction::Forward;
        let Some(target) = self.step.next() else {
            return Transition::Stayed;
        };
        if !self.gate() {
            return Transition::Stayed;
        }
        debug!("onboarding: {:?} -> {:?}", self.step, target);
        self.step = target;
        Transition::Moved(target)
    }

    pub fn back(&mut self) -> Transition {
        let Some(target) = self.step.prev() else {
            return Transition::Stayed;
        };
        self.direction = Direction::Backward;
        self.errors = FieldErrors::default();
        debug!("onboarding: back {:?} -> {:?}", self.step, target);
        self.step = target;
        Transition::Moved(target)
    }

    pub fn submit(&mut self) -> Transition {
        if self.step != Step::Contact {
            return Transition::Stayed;
        }
        self.direction = Direction::Forward;
        if !self.gate() {
            return Transition::Stayed;
        }
        debug!("onboarding: contact details accepted");
        self.step = Step::Booking;
        Transition::Submitted(self.form.clone())
    }

    pub fn reset(&mut self) {
        *self = WizardState::default();
    }

    fn gate(&mut self) -> bool {
        let errors = self.form.validate(self.step);
        let passed = errors.is_empty();
        if !passed {
            debug!("onboarding: {:?} blocked on {:?}", self.step, errors.fields().collect::<Vec<_>>());
        }
        self.errors = errors;
        passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::form::Field;
    use crate::onboarding::options::*;
    use pretty_assertions::assert_eq;

    fn at_contact_step() -> WizardState {
        let mut state = WizardState::default();
        state.select(Choice::BusinessType(BusinessType::Agency));
        state.select(Choice::Revenue(Revenue::From10kTo50k));
        state.select(Choice::GrowthGoal(GrowthGoal::LeadGeneration));
        assert_eq!(state.next(), Transition::Moved(Step::Growth));
        state.select(Choice::Channel(Channel::Email));
        state.select(Choice::Bottleneck(Bottleneck::InconsistentLeads));
        state.select(Choice::Timeline(Timeline::Asap));
        assert_eq!(state.next(), Transition::Moved(Step::Contact));
        state
    }

    #[test]
    fn business_step_blocks_on_each_missing_field() {
        let all = [
            Choice::BusinessType(BusinessType::Saas),
            Choice::Revenue(Revenue::Over500k),
            Choice::GrowthGoal(GrowthGoal::BrandAwareness),
        ];
        for mask in 0u8..7 {
            let mut state = WizardState::default();
            let mut expected = Vec::new();
            for (i, choice) in all.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    state.select(*choice);
                } else {
                    expected.push(choice.field());
                }
            }
            assert_eq!(state.next(), Transition::Stayed);
            assert_eq!(state.step, Step::Business);
            assert_eq!(state.errors.fields().collect::<Vec<_>>(), expected, "mask {:03b}", mask);
        }
    }

    #[test]
    fn growth_step_requires_a_channel() {
        let mut state = at_contact_step();
        state.back();
        state.select(Choice::Channel(Channel::Email));
        assert!(state.form.channels.is_empty());

        assert_eq!(state.next(), Transition::Stayed);
        assert_eq!(state.step, Step::Growth);
        assert_eq!(state.errors.get(Field::Channels), Some("Select at least one channel"));
    }

    #[test]
    fn valid_submit_reaches_booking_once_with_the_record() {
        let mut state = at_contact_step();
        state.select(Choice::Budget(Budget::From5kTo10k));
        state.input(TextField::Name, "Jane Smith".to_string());
        state.input(TextField::Email, "a@b.com".to_string());

        let expected = state.form.clone();
        assert_eq!(state.submit(), Transition::Submitted(expected));
        assert_eq!(state.step, Step::Booking);

        assert_eq!(state.submit(), Transition::Stayed);
        assert_eq!(state.next(), Transition::Stayed);
        assert_eq!(state.back(), Transition::Stayed);
        assert_eq!(state.step, Step::Booking);
    }

    #[test]
    fn malformed_email_blocks_submit() {
        let mut state = at_contact_step();
        state.select(Choice::Budget(Budget::From5kTo10k));
        state.input(TextField::Name, "Jane".to_string());
        state.input(TextField::Email, "not-an-email".to_string());

        assert_eq!(state.submit(), Transition::Stayed);
        assert_eq!(state.step, Step::Contact);
        assert_eq!(state.errors.get(Field::Email), Some("Enter a valid email"));
    }

    #[test]
    fn next_on_contact_step_submits() {
        let mut state = at_contact_step();
        state.select(Choice::Budget(Budget::Over25k));
        state.input(TextField::Name, "Jane".to_string());
        state.input(TextField::Email, "jane@acme.com".to_string());
        assert!(matches!(state.next(), Transition::Submitted(_)));
    }

    #[test]
    fn back_clears_errors_keeps_answers_and_skips_validation() {
        let mut state = at_contact_step();
        assert_eq!(state.submit(), Transition::Stayed);
        assert!(!state.errors.is_empty());

        assert_eq!(state.back(), Transition::Moved(Step::Growth));
        assert!(state.errors.is_empty());
        assert_eq!(state.direction, Direction::Backward);
        assert_eq!(state.form.channels, vec![Channel::Email]);

        assert_eq!(state.back(), Transition::Moved(Step::Business));
        assert_eq!(state.back(), Transition::Stayed);
        assert_eq!(state.step, Step::Business);
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut state = WizardState::default();
        state.next();
        state.select(Choice::Revenue(Revenue::UpTo10k));

        assert_eq!(state.errors.get(Field::Revenue), None);
        assert!(state.errors.get(Field::BusinessType).is_some());
        assert!(state.errors.get(Field::GrowthGoal).is_some());
    }

    #[test]
    fn edited_field_stays_quiet_until_next_attempt() {
        let mut state = at_contact_step();
        state.input(TextField::Email, "bad".to_string());
        state.submit();
        assert!(state.errors.get(Field::Email).is_some());

        state.input(TextField::Email, "still-bad".to_string());
        assert_eq!(state.errors.get(Field::Email), None);

        state.submit();
        assert_eq!(state.errors.get(Field::Email), Some("Enter a valid email"));
    }

    #[test]
    fn reset_returns_to_an_empty_first_step() {
        let mut state = at_contact_step();
        state.input(TextField::Company, "Acme".to_string());
        state.submit();
        state.reset();
        assert_eq!(state, WizardState::default());
        assert_eq!(state.step, Step::Business);
        assert_eq!(state.form, LeadForm::default());
    }

    #[test]
    fn reset_from_a_blocked_step_clears_errors() {
        let mut state = WizardState::default();
        state.select(Choice::BusinessType(BusinessType::ALL[0]));
        state.select(Choice::Revenue(Revenue::ALL[0]));
        state.select(Choice::GrowthGoal(GrowthGoal::ALL[0]));
        assert_eq!(state.next(), Transition::Moved(Step::Growth));
        assert_eq!(state.next(), Transition::Stayed);
        assert!(!state.errors.is_empty());
        state.reset();
        assert_eq!(state, WizardState::default());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn step_copy() {
        assert_eq!(Step::Business.eyebrow(), "Step 1 of 3");
        assert_eq!(Step::Contact.eyebrow(), "Step 3 of 3");
        assert_eq!(Step::Booking.eyebrow(), "Almost there");
        assert!(Step::Booking.is_terminal());
        assert_eq!(Step::Growth.prev(), Some(Step::Business));
        assert_eq!(Step::Booking.prev(), None);
    }
}
