//! Prefill contract of the external scheduling page.
//!
//! The scheduler only knows a `name` and an `email` field, so every
//! qualifying answer is packed into `name` where it ends up in the calendar
//! event title. Nothing is read back from the scheduler.

use thiserror::Error;
use url::Url;

use super::form::LeadForm;

const SEPARATOR: &str = " | ";
const NAME_PARAM: &str = "name";
const EMAIL_PARAM: &str = "email";
const DISPLAY_FLAGS: [(&str, &str); 2] = [("hide_event_type_details", "1"), ("hide_gdpr_banner", "1")];

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("invalid scheduler url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Joins the non-empty answers in the order the scheduler shows them.
pub fn pack_prefill(form: &LeadForm) -> String {
    let channels = form
        .channels
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ");

    let parts = [
        Some(form.name.clone()),
        (!form.company.is_empty()).then(|| format!("@ {}", form.company)),
        form.business_type.map(|v| v.label().to_string()),
        form.revenue.map(|v| v.label().to_string()),
        form.growth_goal.map(|v| v.label().to_string()),
        form.budget.map(|v| v.label().to_string()),
        form.bottleneck.map(|v| v.label().to_string()),
        form.timeline.map(|v| format!("Timeline: {}", v)),
        (!channels.is_empty()).then(|| format!("Via: {}", channels)),
        (!form.phone.is_empty()).then(|| format!("📞 {}", form.phone)),
    ];

    parts
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Builds the scheduler URL for `form` on top of `base_url`.
///
/// Parameters this function sets replace any of the same name already on
/// the base URL; other parameters are kept.
pub fn build_handoff_url(base_url: &str, form: &LeadForm) -> Result<Url, HandoffError> {
    let mut url = Url::parse(base_url).map_err(|source| HandoffError::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    })?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !is_overridden(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(NAME_PARAM, &pack_prefill(form))
        .append_pair(EMAIL_PARAM, &form.email)
        .extend_pairs(DISPLAY_FLAGS);

    Ok(url)
}

fn is_overridden(key: &str) -> bool {
    key == NAME_PARAM || key == EMAIL_PARAM || DISPLAY_FLAGS.iter().any(|(flag, _)| *flag == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::options::*;
    use pretty_assertions::assert_eq;

    fn jane() -> LeadForm {
        LeadForm {
            business_type: Some(BusinessType::Agency),
            revenue: Some(Revenue::From10kTo50k),
            growth_goal: Some(GrowthGoal::LeadGeneration),
            channels: vec![Channel::Email, Channel::Seo],
            bottleneck: Some(Bottleneck::InconsistentLeads),
            timeline: Some(Timeline::Asap),
            budget: Some(Budget::From5kTo10k),
            name: "Jane Smith".to_string(),
            email: "jane@acme.com".to_string(),
            phone: String::new(),
            company: "Acme".to_string(),
        }
    }

    fn param(url: &Url, key: &str) -> Vec<String> {
        url.query_pairs()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .collect()
    }

    #[test]
    fn packs_every_present_answer_in_order() {
        assert_eq!(
            pack_prefill(&jane()),
            "Jane Smith | @ Acme | Agency | $10k–$50k/mo | Lead Generation | $5k–$10k/mo | Inconsistent Leads | Timeline: ASAP | Via: Email, SEO"
        );
    }

    #[test]
    fn phone_goes_last_when_given() {
        let form = LeadForm {
            phone: "+1 555 000 0000".to_string(),
            ..jane()
        };
        assert!(pack_prefill(&form).ends_with(" | Via: Email, SEO | 📞 +1 555 000 0000"));
    }

    #[test]
    fn empty_answers_leave_no_gaps() {
        let form = LeadForm {
            name: "Jane".to_string(),
            timeline: Some(Timeline::ThreeToSixMonths),
            ..LeadForm::default()
        };
        assert_eq!(pack_prefill(&form), "Jane | Timeline: 3–6 Months");
        assert_eq!(pack_prefill(&LeadForm::default()), "");
    }

    #[test]
    fn url_carries_prefill_email_and_display_flags() {
        let url = build_handoff_url("https://calendly.com/flux/30min", &jane()).unwrap();

        assert_eq!(url.host_str(), Some("calendly.com"));
        assert_eq!(url.path(), "/flux/30min");
        assert_eq!(param(&url, "name"), vec![pack_prefill(&jane())]);
        assert_eq!(param(&url, "email"), vec!["jane@acme.com".to_string()]);
        assert_eq!(param(&url, "hide_event_type_details"), vec!["1".to_string()]);
        assert_eq!(param(&url, "hide_gdpr_banner"), vec!["1".to_string()]);
    }

    #[test]
    fn base_parameters_are_replaced_not_duplicated() {
        let url = build_handoff_url(
            "https://calendly.com/flux/30min?email=old@x.com&month=2026-10&hide_gdpr_banner=0",
            &jane(),
        )
        .unwrap();

        assert_eq!(param(&url, "email"), vec!["jane@acme.com".to_string()]);
        assert_eq!(param(&url, "hide_gdpr_banner"), vec!["1".to_string()]);
        assert_eq!(param(&url, "month"), vec!["2026-10".to_string()]);
    }

    #[test]
    fn query_is_form_encoded() {
        let url = build_handoff_url("https://calendly.com/flux/30min", &jane()).unwrap();
        let query = url.query().unwrap_or_default();
        assert!(query.starts_with("name=Jane+Smith+%7C+%40+Acme"), "{}", query);
        assert!(query.contains("email=jane%40acme.com"), "{}", query);
    }

    #[test]
    fn relative_base_is_rejected() {
        let err = build_handoff_url("calendly.com/flux", &jane()).unwrap_err();
        assert!(matches!(err, HandoffError::InvalidBaseUrl { .. }));
        assert!(err.to_string().contains("calendly.com/flux"));
    }
}
