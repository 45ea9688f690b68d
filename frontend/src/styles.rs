//! Site-wide stylesheet, mounted once by `App`.

use log::warn;
use stylist::yew::Global;
use stylist::StyleSource;
use yew::prelude::*;

const GLOBAL_CSS: &str = r#"
html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: #0b0b0f;
    color: #f1f5f9;
    font-family: 'Inter', system-ui, sans-serif;
    -webkit-font-smoothing: antialiased;
}

a {
    color: inherit;
}

.section {
    position: relative;
    padding: 6rem 1.5rem;
}

.section-inner {
    max-width: 1100px;
    margin: 0 auto;
}

.section-title {
    font-size: 2.75rem;
    line-height: 1.1;
    margin: 0 0 1.5rem;
}

.highlight {
    color: #e8d5b0;
}

.section-lead {
    color: #94a3b8;
    font-size: 1.1rem;
    max-width: 640px;
}

.reveal {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.visible {
    opacity: 1;
    transform: none;
}

.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.25rem;
    margin-top: 2.5rem;
}

.card {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.08);
    border-radius: 14px;
    padding: 1.75rem;
}

.card h3 {
    margin: 0.75rem 0 0.5rem;
    font-size: 1.15rem;
}

.card p {
    margin: 0;
    color: #94a3b8;
    line-height: 1.6;
}

.card-icon {
    font-size: 1.5rem;
    color: #e8d5b0;
}

.cta-button {
    background: #e8d5b0;
    color: #0b0b0f;
    border: none;
    border-radius: 999px;
    padding: 0.9rem 2rem;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
    transition: transform 0.15s ease, box-shadow 0.15s ease;
}

.cta-button:hover {
    transform: translateY(-2px);
    box-shadow: 0 10px 30px rgba(232, 213, 176, 0.25);
}

.ghost-link {
    color: #e8d5b0;
    text-decoration: none;
    border-bottom: 1px solid rgba(232, 213, 176, 0.4);
}

.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    transition: background 0.3s ease, backdrop-filter 0.3s ease;
}

.top-nav.scrolled {
    background: rgba(11, 11, 15, 0.85);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid rgba(255, 255, 255, 0.06);
}

.nav-content {
    max-width: 1100px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    font-weight: 700;
    letter-spacing: 0.08em;
    text-decoration: none;
}

.nav-links {
    display: flex;
    gap: 1.75rem;
    align-items: center;
}

.nav-link {
    color: #94a3b8;
    text-decoration: none;
    font-size: 0.95rem;
}

.nav-link:hover {
    color: #f1f5f9;
}

.burger-menu {
    display: none;
    background: none;
    border: none;
    color: #f1f5f9;
    font-size: 1.5rem;
    cursor: pointer;
}

.mobile-menu {
    display: none;
}

@media (max-width: 768px) {
    .nav-links {
        display: none;
    }
    .burger-menu {
        display: block;
    }
    .mobile-menu.open {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        padding: 1rem 1.5rem 1.5rem;
        background: rgba(11, 11, 15, 0.95);
    }
    .section-title {
        font-size: 2rem;
    }
}

.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 8rem 1.5rem 4rem;
    background: radial-gradient(circle at 30% 20%, rgba(232, 213, 176, 0.08), transparent 60%);
}

.hero h1 {
    font-size: 4rem;
    line-height: 1.05;
    margin: 0 0 1.5rem;
}

.hero-sub {
    color: #94a3b8;
    font-size: 1.2rem;
    max-width: 620px;
    line-height: 1.6;
}

.hero-cta-group {
    display: flex;
    gap: 1.5rem;
    align-items: center;
    margin-top: 2.5rem;
}

.step-number {
    font-family: 'DM Mono', monospace;
    color: #e8d5b0;
    font-size: 0.85rem;
}

.check-list {
    list-style: none;
    padding: 0;
    display: grid;
    gap: 1rem;
}

.check-list li::before {
    content: "✓ ";
    color: #e8d5b0;
}

.trust-strip {
    padding: 2.5rem 1.5rem;
    border-top: 1px solid rgba(255, 255, 255, 0.06);
    border-bottom: 1px solid rgba(255, 255, 255, 0.06);
    text-align: center;
}

.trust-caption {
    color: #64748b;
    font-size: 0.85rem;
    letter-spacing: 0.08em;
    text-transform: uppercase;
}

.trust-row {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 0.75rem 2rem;
    max-width: 1100px;
    margin: 1rem auto 0;
    color: #94a3b8;
    font-family: 'DM Mono', monospace;
    font-size: 0.9rem;
}

.timeline {
    list-style: none;
    padding: 0;
    margin: 2.5rem 0 0;
    display: grid;
    gap: 2rem;
    border-left: 1px solid rgba(232, 213, 176, 0.25);
}

.timeline-step {
    padding-left: 1.75rem;
}

.timeline-step h3 {
    margin: 0.4rem 0;
}

.timeline-step p {
    margin: 0;
    color: #94a3b8;
}

.faq-item {
    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
}

.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    background: none;
    border: none;
    color: #f1f5f9;
    font-size: 1.15rem;
    padding: 1.5rem 0;
    cursor: pointer;
    text-align: left;
}

.faq-answer {
    max-height: 0;
    overflow: hidden;
    color: #94a3b8;
    line-height: 1.7;
    transition: max-height 0.3s ease;
}

.faq-item.expanded .faq-answer {
    max-height: 320px;
    padding-bottom: 1.5rem;
}

.faq-chevron {
    transition: transform 0.3s ease;
}

.faq-item.expanded .faq-chevron {
    transform: rotate(180deg);
}

.conversion-block {
    text-align: center;
    border: 1px solid rgba(232, 213, 176, 0.2);
    border-radius: 24px;
    padding: 4rem 2rem;
    background: linear-gradient(180deg, rgba(232, 213, 176, 0.06), transparent);
}

.site-footer {
    border-top: 1px solid rgba(255, 255, 255, 0.06);
    padding: 2.5rem 1.5rem;
    color: #64748b;
}

.footer-inner {
    max-width: 1100px;
    margin: 0 auto;
    display: flex;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 1rem;
}

.footer-links {
    display: flex;
    gap: 1.5rem;
}

.onboarding-overlay {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}

.onboarding-backdrop {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.7);
    backdrop-filter: blur(6px);
}

.onboarding-panel {
    position: relative;
    width: 100%;
    max-width: 640px;
    max-height: 92vh;
    overflow-y: auto;
    background: #111118;
    border: 1px solid rgba(255, 255, 255, 0.08);
    border-radius: 20px;
    padding: 2.25rem;
}

.onboarding-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    background: rgba(255, 255, 255, 0.05);
    border: none;
    border-radius: 8px;
    color: #94a3b8;
    width: 32px;
    height: 32px;
    cursor: pointer;
}

.wizard-progress {
    display: flex;
    gap: 6px;
    margin-bottom: 1.5rem;
}

.wizard-progress-segment {
    flex: 1;
    height: 3px;
    border-radius: 2px;
    background: rgba(255, 255, 255, 0.08);
    transition: background 0.3s ease;
}

.wizard-progress-segment.lit {
    background: #e8d5b0;
}

.wizard-eyebrow {
    font-family: 'DM Mono', monospace;
    font-size: 0.75rem;
    letter-spacing: 0.12em;
    text-transform: uppercase;
    color: #e8d5b0;
}

.wizard-heading {
    margin: 0.5rem 0 0.25rem;
    font-size: 1.6rem;
}

.wizard-sub {
    margin: 0 0 1.75rem;
    color: #94a3b8;
}

.wizard-head,
.wizard-body {
    transition: opacity 0.22s ease-in-out, transform 0.22s ease-in-out;
}

.wizard-head.entering,
.wizard-body.entering {
    opacity: 0;
    transition: none;
}

.wizard-head.entering.forward,
.wizard-body.entering.forward {
    transform: translateX(32px);
}

.wizard-head.entering.backward,
.wizard-body.entering.backward {
    transform: translateX(-32px);
}

.choice-group {
    margin-bottom: 1.5rem;
}

.choice-group-label,
.text-field-label {
    display: block;
    font-size: 0.8rem;
    letter-spacing: 0.06em;
    text-transform: uppercase;
    color: #64748b;
    margin-bottom: 0.75rem;
}

.choice-chips {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.option-chip {
    padding: 8px 16px;
    border-radius: 8px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.03);
    color: #94a3b8;
    font-size: 13px;
    font-family: 'DM Mono', monospace;
    cursor: pointer;
    white-space: nowrap;
    transition: all 0.15s;
}

.option-chip.selected {
    border-color: #e8d5b0;
    background: rgba(232, 213, 176, 0.15);
    color: #e8d5b0;
}

.option-chip.invalid {
    border-color: rgba(239, 68, 68, 0.5);
}

.field-error {
    display: flex;
    align-items: center;
    gap: 6px;
    margin-top: 0.5rem;
    color: #ef4444;
    font-size: 0.8rem;
}

.field-error-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 14px;
    height: 14px;
    border-radius: 50%;
    border: 1px solid #ef4444;
    font-size: 10px;
}

.contact-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}

@media (max-width: 600px) {
    .contact-grid {
        grid-template-columns: 1fr;
    }
}

.text-field-input {
    width: 100%;
    box-sizing: border-box;
    padding: 0.75rem 1rem;
    border-radius: 8px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.03);
    color: #f1f5f9;
    font-size: 0.95rem;
}

.text-field-input.invalid {
    border-color: rgba(239, 68, 68, 0.5);
}

.required-mark {
    color: #e8d5b0;
}

.wizard-nav {
    display: flex;
    justify-content: space-between;
    margin-top: 2rem;
}

.wizard-back {
    background: none;
    border: none;
    color: #94a3b8;
    cursor: pointer;
}

.wizard-next {
    background: #e8d5b0;
    color: #0b0b0f;
    border: none;
    border-radius: 10px;
    padding: 0.75rem 1.5rem;
    font-weight: 600;
    cursor: pointer;
}

.booking-banner {
    display: flex;
    gap: 0.75rem;
    align-items: center;
    padding: 0.9rem 1rem;
    border-radius: 10px;
    background: rgba(34, 197, 94, 0.08);
    color: #86efac;
    margin-bottom: 1.25rem;
}

.scheduler-frame {
    border: none;
    border-radius: 12px;
    background: #ffffff;
}
"#;

/// Registers [`GLOBAL_CSS`] for the lifetime of the app.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    match GLOBAL_CSS.parse::<StyleSource>() {
        Ok(css) => html! { <Global {css} /> },
        Err(e) => {
            warn!("Failed to parse global stylesheet: {}", e);
            html! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_css_parses() {
        assert!(GLOBAL_CSS.parse::<StyleSource>().is_ok());
    }

    #[test]
    fn global_css_covers_reveal_and_wizard_classes() {
        for class in [".reveal.visible", ".option-chip.selected", ".wizard-body.entering"] {
            assert!(GLOBAL_CSS.contains(class), "missing {}", class);
        }
    }
}
