use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

use super::options::{Bottleneck, Budget, BusinessType, Channel, GrowthGoal, Revenue, Timeline};
use super::wizard::Step;

// Same looseness as the browser-side check the site always used: something,
// an @, something, a dot, something.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Everything the wizard collects during one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    pub business_type: Option<BusinessType>,
    pub revenue: Option<Revenue>,
    pub growth_goal: Option<GrowthGoal>,
    pub channels: Vec<Channel>,
    pub bottleneck: Option<Bottleneck>,
    pub timeline: Option<Timeline>,
    pub budget: Option<Budget>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    BusinessType,
    Revenue,
    GrowthGoal,
    Channels,
    Bottleneck,
    Timeline,
    Budget,
    Name,
    Email,
    Phone,
    Company,
}

/// A click on one option chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    BusinessType(BusinessType),
    Revenue(Revenue),
    GrowthGoal(GrowthGoal),
    Channel(Channel),
    Bottleneck(Bottleneck),
    Timeline(Timeline),
    Budget(Budget),
}

impl Choice {
    pub fn field(self) -> Field {
        match self {
            Choice::BusinessType(_) => Field::BusinessType,
            Choice::Revenue(_) => Field::Revenue,
            Choice::GrowthGoal(_) => Field::GrowthGoal,
            Choice::Channel(_) => Field::Channels,
            Choice::Bottleneck(_) => Field::Bottleneck,
            Choice::Timeline(_) => Field::Timeline,
            Choice::Budget(_) => Field::Budget,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Choice::BusinessType(v) => v.label(),
            Choice::Revenue(v) => v.label(),
            Choice::GrowthGoal(v) => v.label(),
            Choice::Channel(v) => v.label(),
            Choice::Bottleneck(v) => v.label(),
            Choice::Timeline(v) => v.label(),
            Choice::Budget(v) => v.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Email,
    Phone,
    Company,
}

impl From<TextField> for Field {
    fn from(field: TextField) -> Self {
        match field {
            TextField::Name => Field::Name,
            TextField::Email => Field::Email,
            TextField::Phone => Field::Phone,
            TextField::Company => Field::Company,
        }
    }
}

impl LeadForm {
    /// Single-select fields are overwritten, channels are toggled.
    pub fn apply_choice(&mut self, choice: Choice) {
        match choice {
            Choice::BusinessType(v) => self.business_type = Some(v),
            Choice::Revenue(v) => self.revenue = Some(v),
            Choice::GrowthGoal(v) => self.growth_goal = Some(v),
            Choice::Channel(v) => {
                self.toggle_channel(v);
            }
            Choice::Bottleneck(v) => self.bottleneck = Some(v),
            Choice::Timeline(v) => self.timeline = Some(v),
            Choice::Budget(v) => self.budget = Some(v),
        }
    }

    /// Removes the channel if present, appends it otherwise. Returns whether
    /// it is selected afterwards.
    pub fn toggle_channel(&mut self, channel: Channel) -> bool {
        if let Some(pos) = self.channels.iter().position(|c| *c == channel) {
            self.channels.remove(pos);
            false
        } else {
            self.channels.push(channel);
            true
        }
    }

    pub fn is_selected(&self, choice: Choice) -> bool {
        match choice {
            Choice::BusinessType(v) => self.business_type == Some(v),
            Choice::Revenue(v) => self.revenue == Some(v),
            Choice::GrowthGoal(v) => self.growth_goal == Some(v),
            Choice::Channel(v) => self.channels.contains(&v),
            Choice::Bottleneck(v) => self.bottleneck == Some(v),
            Choice::Timeline(v) => self.timeline == Some(v),
            Choice::Budget(v) => self.budget == Some(v),
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
            TextField::Company => &self.company,
        }
    }

    pub fn set_text(&mut self, field: TextField, value: String) {
        match field {
            TextField::Name => self.name = value,
            TextField::Email => self.email = value,
            TextField::Phone => self.phone = value,
            TextField::Company => self.company = value,
        }
    }

    /// Checks the fields gated by `step`. Booking has nothing to check.
    pub fn validate(&self, step: Step) -> FieldErrors {
        let mut errors = FieldErrors::default();
        match step {
            Step::Business => {
                if self.business_type.is_none() {
                    errors.insert(Field::BusinessType, "Pick a business type");
                }
                if self.revenue.is_none() {
                    errors.insert(Field::Revenue, "Select a revenue range");
                }
                if self.growth_goal.is_none() {
                    errors.insert(Field::GrowthGoal, "Choose a primary goal");
                }
            }
            Step::Growth => {
                if self.channels.is_empty() {
                    errors.insert(Field::Channels, "Select at least one channel");
                }
                if self.bottleneck.is_none() {
                    errors.insert(Field::Bottleneck, "Pick your biggest bottleneck");
                }
                if self.timeline.is_none() {
                    errors.insert(Field::Timeline, "Choose a timeline");
                }
            }
            Step::Contact => {
                if self.budget.is_none() {
                    errors.insert(Field::Budget, "Select a budget range");
                }
                if self.name.trim().is_empty() {
                    errors.insert(Field::Name, "Name is required");
                }
                if self.email.trim().is_empty() {
                    errors.insert(Field::Email, "Email is required");
                } else if !is_valid_email(&self.email) {
                    errors.insert(Field::Email, "Enter a valid email");
                }
            }
            Step::Booking => {}
        }
        errors
    }
}

/// Per-field messages shown under the offending input or chip group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("jane.smith@acme.co.uk"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("jane@acme"));
        assert!(!is_valid_email("@acme.com"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane @acme.com"));
    }

    #[test]
    fn toggling_a_channel_flips_presence_once() {
        let mut form = LeadForm::default();
        assert!(form.toggle_channel(Channel::Email));
        assert!(form.toggle_channel(Channel::Seo));
        assert_eq!(form.channels, vec![Channel::Email, Channel::Seo]);

        assert!(!form.toggle_channel(Channel::Email));
        assert_eq!(form.channels, vec![Channel::Seo]);

        assert!(form.toggle_channel(Channel::Email));
        assert_eq!(form.channels, vec![Channel::Seo, Channel::Email]);
    }

    #[test]
    fn channel_toggles_never_duplicate() {
        let mut form = LeadForm::default();
        for round in 0..5 {
            for channel in Channel::ALL {
                let before = form.channels.contains(channel);
                form.apply_choice(Choice::Channel(*channel));
                assert_eq!(form.channels.contains(channel), !before, "round {}", round);
                let count = form.channels.iter().filter(|c| *c == channel).count();
                assert!(count <= 1);
            }
        }
    }

    #[test]
    fn single_select_overwrites() {
        let mut form = LeadForm::default();
        form.apply_choice(Choice::BusinessType(BusinessType::Agency));
        form.apply_choice(Choice::BusinessType(BusinessType::Creator));
        assert_eq!(form.business_type, Some(BusinessType::Creator));
        assert!(form.is_selected(Choice::BusinessType(BusinessType::Creator)));
        assert!(!form.is_selected(Choice::BusinessType(BusinessType::Agency)));
    }

    #[test]
    fn business_step_reports_only_unset_fields() {
        let mut form = LeadForm::default();
        form.revenue = Some(Revenue::UpTo10k);

        let errors = form.validate(Step::Business);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![Field::BusinessType, Field::GrowthGoal]
        );
        assert_eq!(errors.get(Field::GrowthGoal), Some("Choose a primary goal"));
    }

    #[test]
    fn contact_step_checks_email_shape_after_presence() {
        let mut form = LeadForm {
            budget: Some(Budget::Over25k),
            name: "Jane".to_string(),
            email: "   ".to_string(),
            ..LeadForm::default()
        };
        assert_eq!(form.validate(Step::Contact).get(Field::Email), Some("Email is required"));

        form.email = "not-an-email".to_string();
        assert_eq!(form.validate(Step::Contact).get(Field::Email), Some("Enter a valid email"));

        form.email = "a@b.com".to_string();
        assert!(form.validate(Step::Contact).is_empty());
    }

    #[test]
    fn blank_name_is_rejected() {
        let form = LeadForm {
            budget: Some(Budget::From2kTo5k),
            name: "  ".to_string(),
            email: "a@b.com".to_string(),
            ..LeadForm::default()
        };
        let errors = form.validate(Step::Contact);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Name]);
    }

    #[test]
    fn optional_fields_are_never_required() {
        let form = LeadForm {
            budget: Some(Budget::From2kTo5k),
            name: "Jane".to_string(),
            email: "a@b.com".to_string(),
            ..LeadForm::default()
        };
        let errors = form.validate(Step::Contact);
        assert_eq!(errors.get(Field::Phone), None);
        assert_eq!(errors.get(Field::Company), None);
        assert!(form.validate(Step::Booking).is_empty());
    }

    #[test]
    fn serializes_with_labels() {
        let form = LeadForm {
            business_type: Some(BusinessType::Saas),
            channels: vec![Channel::PaidAds],
            name: "Jane".to_string(),
            ..LeadForm::default()
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["businessType"], "SaaS");
        assert_eq!(value["channels"][0], "Paid Ads");
        assert_eq!(value["revenue"], serde_json::Value::Null);
    }
}
