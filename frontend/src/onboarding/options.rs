//! Fixed option sets offered by the onboarding wizard.
//!
//! Every single-select question maps to one of these enums, so a value the
//! wizard never offered cannot end up in a [`LeadForm`](super::form::LeadForm).

use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! choice_set {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every option, in the order the chips are rendered.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

choice_set! {
    BusinessType {
        Agency => "Agency",
        Saas => "SaaS",
        Ecommerce => "E-commerce",
        Creator => "Creator",
        Consultant => "Consultant",
        Other => "Other",
    }
}

choice_set! {
    /// Monthly revenue bracket.
    Revenue {
        UpTo10k => "$0–$10k/mo",
        From10kTo50k => "$10k–$50k/mo",
        From50kTo100k => "$50k–$100k/mo",
        From100kTo500k => "$100k–$500k/mo",
        Over500k => "$500k+/mo",
    }
}

choice_set! {
    GrowthGoal {
        BrandAwareness => "Brand Awareness",
        LeadGeneration => "Lead Generation",
        RevenueGrowth => "Revenue Growth",
        AuthorityBuilding => "Authority Building",
        MarketExpansion => "Market Expansion",
    }
}

choice_set! {
    /// Marketing channels already in use. The only multi-select question.
    Channel {
        SocialMedia => "Social Media",
        PaidAds => "Paid Ads",
        ContentMarketing => "Content Marketing",
        Email => "Email",
        Seo => "SEO",
        Referrals => "Referrals",
    }
}

choice_set! {
    Bottleneck {
        NoClearStrategy => "No Clear Strategy",
        InconsistentLeads => "Inconsistent Leads",
        LowConversion => "Low Conversion",
        ScalingIssues => "Scaling Issues",
        BrandPositioning => "Brand Positioning",
    }
}

choice_set! {
    Timeline {
        Asap => "ASAP",
        OneToThreeMonths => "1–3 Months",
        ThreeToSixMonths => "3–6 Months",
        SixToTwelveMonths => "6–12 Months",
    }
}

choice_set! {
    /// Monthly budget bracket.
    Budget {
        From2kTo5k => "$2k–$5k/mo",
        From5kTo10k => "$5k–$10k/mo",
        From10kTo25k => "$10k–$25k/mo",
        Over25k => "$25k+/mo",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique_within_each_set() {
        fn assert_unique(labels: Vec<&'static str>) {
            let mut sorted = labels.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), labels.len(), "duplicate label in {:?}", labels);
        }

        assert_unique(BusinessType::ALL.iter().map(|o| o.label()).collect());
        assert_unique(Revenue::ALL.iter().map(|o| o.label()).collect());
        assert_unique(GrowthGoal::ALL.iter().map(|o| o.label()).collect());
        assert_unique(Channel::ALL.iter().map(|o| o.label()).collect());
        assert_unique(Bottleneck::ALL.iter().map(|o| o.label()).collect());
        assert_unique(Timeline::ALL.iter().map(|o| o.label()).collect());
        assert_unique(Budget::ALL.iter().map(|o| o.label()).collect());
    }

    #[test]
    fn serializes_as_display_label() {
        let json = serde_json::to_string(&Revenue::From10kTo50k).unwrap();
        assert_eq!(json, "\"$10k–$50k/mo\"");
        assert_eq!(Channel::Seo.to_string(), "SEO");
    }
}
