//! Fuzz target for settings parsing.
//!
//! Arbitrary TOML and setting values must parse or fail cleanly, and the
//! derived cutoff and highlight style must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use paren_hl::color::Rgba;
use paren_hl::config::max_line_width;
use paren_hl::{AssociateStyle, ConfigStore, HIGHLIGHT_BG_SETTING, MAX_LINE_LENGTH_SETTING, Settings};

fuzz_target!(|data: &str| {
    let _ = Settings::from_toml_str(data);

    let _ = Rgba::from_hex(data);
    if !data.starts_with('#') {
        let _ = Rgba::from_hex(&format!("#{data}"));
    }

    let mut settings = Settings::new();
    settings.set(MAX_LINE_LENGTH_SETTING, data);
    settings.set(HIGHLIGHT_BG_SETTING, data);
    let _ = max_line_width(&settings);
    let _ = AssociateStyle::from_settings(&settings);
});
