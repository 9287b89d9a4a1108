//! Sounds shipped with every library.

use crate::model::{Icon, SoundEffect};
use once_cell::sync::Lazy;

const BELL_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M18 8A6 6 0 0 0 6 8c0 7-3 9-3 9h18s-3-2-3-9"/><path d="M13.73 21a2 2 0 0 1-3.46 0"/></svg>"#;

const CHECK_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><polyline points="22 4 12 14.01 9 11.01"/></svg>"#;

const CROSS_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><line x1="15" y1="9" x2="9" y2="15"/><line x1="9" y1="9" x2="15" y2="15"/></svg>"#;

const RAIN_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="16" y1="13" x2="16" y2="21"/><line x1="8" y1="13" x2="8" y2="21"/><line x1="12" y1="15" x2="12" y2="23"/><path d="M20 16.58A5 5 0 0 0 18 7h-1.26A8 8 0 1 0 4 15.25"/></svg>"#;

/// Color of the default icon, also used for category placeholders
pub const DEFAULT_ICON_COLOR: &str = "#4a6cf7";

static BUILTINS: Lazy<Vec<SoundEffect>> = Lazy::new(|| {
    vec![
        SoundEffect::new(1, "Button Click", "UI", "/sounds/click.mp3")
            .with_description("Clean button click sound for interfaces")
            .with_icon(Icon::default_svg(Some(DEFAULT_ICON_COLOR))),
        SoundEffect::new(2, "Notification", "UI", "/sounds/notification.mp3")
            .with_description("Standard notification alert tone")
            .with_icon(Icon::svg(BELL_SVG, "#f5a623")),
        SoundEffect::new(3, "Success", "UI", "/sounds/success.wav")
            .with_description("Positive confirmation sound")
            .with_icon(Icon::svg(CHECK_SVG, "#4caf50")),
        SoundEffect::new(4, "Error", "UI", "/sounds/error.mp3")
            .with_description("Alert sound for errors")
            .with_icon(Icon::svg(CROSS_SVG, "#f44336")),
        SoundEffect::new(5, "Rain", "Nature", "/sounds/rain.mp3")
            .with_description("Gentle rainfall ambience")
            .with_icon(Icon::svg(RAIN_SVG, "#00bcd4")),
    ]
});

/// The built-in sounds, in display order
pub fn builtins() -> &'static [SoundEffect] {
    &BUILTINS
}

/// The shipped version of a built-in sound
pub fn builtin(id: u32) -> Option<&'static SoundEffect> {
    BUILTINS.iter().find(|s| s.id == id)
}

/// Whether `id` belongs to a built-in sound
pub fn is_builtin(id: u32) -> bool {
    builtin(id).is_some()
}

/// Unique built-in categories in first-seen order
pub fn builtin_categories() -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for sound in builtins() {
        if !categories.contains(&sound.category) {
            categories.push(sound.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_set() {
        let ids: Vec<u32> = builtins().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(builtins().iter().all(|s| s.validate().is_ok()));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(builtin(5).map(|s| s.name.as_str()), Some("Rain"));
        assert!(is_builtin(1));
        assert!(!is_builtin(6));
    }

    #[test]
    fn test_builtin_categories() {
        assert_eq!(builtin_categories(), vec!["UI", "Nature"]);
    }
}
