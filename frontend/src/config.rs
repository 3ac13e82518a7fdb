use crate::showcase::layout::LayoutConfig;

const DEFAULT_AUTOPLAY_MS: u32 = 5000;
const DEFAULT_TITLE_ROTATION_MS: u32 = 2500;
const DEFAULT_WHATSAPP_NUMBER: &str = "+923218232174";
const DEFAULT_WHATSAPP_MESSAGE: &str =
    "Hi! I'm interested in your software development services. Can we discuss my project?";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShowcaseConfig {
    pub autoplay: bool,
    pub autoplay_interval_ms: u32,
    pub layout: LayoutConfig,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_MS,
            layout: LayoutConfig::default(),
        }
    }
}

pub fn get_showcase_config() -> ShowcaseConfig {
    ShowcaseConfig {
        autoplay: parse_flag(option_env!("PORTFOLIO_AUTOPLAY")).unwrap_or(false),
        autoplay_interval_ms: parse_ms(option_env!("PORTFOLIO_AUTOPLAY_MS"))
            .unwrap_or(DEFAULT_AUTOPLAY_MS),
        ..ShowcaseConfig::default()
    }
}

pub fn get_title_rotation_ms() -> u32 {
    parse_ms(option_env!("PORTFOLIO_TITLE_ROTATION_MS")).unwrap_or(DEFAULT_TITLE_ROTATION_MS)
}

pub fn get_whatsapp_number() -> &'static str {
    option_env!("PORTFOLIO_WHATSAPP_NUMBER").unwrap_or(DEFAULT_WHATSAPP_NUMBER)
}

pub fn get_whatsapp_message() -> &'static str {
    option_env!("PORTFOLIO_WHATSAPP_MESSAGE").unwrap_or(DEFAULT_WHATSAPP_MESSAGE)
}

fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            log::warn!("Ignoring unrecognised boolean setting '{}'", other);
            None
        }
    }
}

// Zero would spin the timers, so it counts as unset.
fn parse_ms(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse::<u32>().ok().filter(|ms| *ms > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_tuning() {
        let config = ShowcaseConfig::default();
        assert!(!config.autoplay);
        assert_eq!(config.autoplay_interval_ms, 5000);
        assert_eq!(config.layout.min_width, 1024.0);
    }

    #[test]
    fn flags_parse_loosely() {
        assert_eq!(parse_flag(Some(" TRUE ")), Some(true));
        assert_eq!(parse_flag(Some("off")), Some(false));
        assert_eq!(parse_flag(Some("maybe")), None);
        assert_eq!(parse_flag(None), None);
    }

    #[test]
    fn zero_and_garbage_intervals_fall_back() {
        assert_eq!(parse_ms(Some("1500")), Some(1500));
        assert_eq!(parse_ms(Some("0")), None);
        assert_eq!(parse_ms(Some("soon")), None);
    }
}
