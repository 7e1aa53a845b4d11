//! Report and catalog rendering

pub mod catalog;
pub mod console;
pub mod formatter;

/// Force plain output when color is disabled; otherwise terminal detection decides.
pub fn set_color_enabled(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}
