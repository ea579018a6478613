use super::Theme;
use console::Style;
use once_cell::sync::Lazy;

/// Style names used by templates and message levels.
pub mod names {
    pub const PROMPT_USER: &str = "prompt_user";
    pub const PROMPT_PATH: &str = "prompt_path";
    pub const LABEL: &str = "label";
    pub const ARROW: &str = "arrow";
    pub const CARD_NAME: &str = "card_name";
    pub const HEADING: &str = "heading";
    pub const COMMAND: &str = "command";
    pub const TIME: &str = "time";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
}

// xterm-256 palette indexes of the web terminal theme.
const VIOLET: u8 = 141;
const BLUE: u8 = 69;
const RED: u8 = 203;
const GREEN: u8 = 83;
const GREY: u8 = 246;

pub static WITCH_THEME: Lazy<Theme> = Lazy::new(|| {
    let s = || Style::new().force_styling(true);
    Theme::new()
        .add(names::PROMPT_USER, s().color256(VIOLET))
        .add(names::PROMPT_PATH, s().color256(BLUE))
        .add(names::LABEL, s().color256(VIOLET))
        .add(names::ARROW, s().color256(BLUE))
        .add(names::CARD_NAME, s().bold())
        .add(names::HEADING, s().color256(VIOLET).bold())
        .add(names::COMMAND, s().color256(BLUE))
        .add(names::TIME, s().color256(GREY).italic())
        .add(names::INFO, s().dim())
        .add(names::SUCCESS, s().color256(GREEN))
        .add(names::WARNING, s().color256(RED))
});
