use log::Level;

/// Booking page the onboarding wizard hands finished leads over to.
pub fn get_scheduler_url() -> &'static str {
    "https://calendly.com/jaspreet99100/30min"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Wizard transitions are logged at debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How long the modal's exit transition runs before the wizard is wiped.
pub const MODAL_RESET_DELAY_MS: u32 = 300;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduler_url_is_absolute() {
        let url = url::Url::parse(get_scheduler_url()).unwrap();
        assert_eq!(url.scheme(), "https");
    }
}
