#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Components in `ui` refer to these classes by name; a refactor of the shared
theme that renames or drops one leaves the matching screen unstyled. When a
selector is renamed on purpose, update the markup and this list together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".app {",
    ".page {",
    ".card {",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--secondary",
    ".button--ghost",
    ".button--outline",
    ".button--block",
    // Gate
    ".splash",
    ".login__card",
    ".login__form",
    ".login__divider",
    // Shell & tabs
    ".shell__header",
    ".shell__page",
    ".tab-nav {",
    ".tab-nav__item--active",
    // Quotes
    ".quote-card__text",
    ".quote-card__reflection",
    ".quote-card__love--active",
    // Videos
    ".player__frame",
    ".video-card__thumb",
    ".video-card__play",
    // Calendar
    ".month-grid",
    ".month-card__event",
    ".month-card__more",
    ".event-card__header",
    ".badge--meditation",
    ".badge--teaching",
    ".badge--celebration",
    ".badge--retreat",
    ".dialog-backdrop",
    ".dialog__title",
    // Teacher
    ".teacher-bio__drop-cap",
    ".teacher-bio__featured",
    ".teachings__grid",
    // Admin
    ".segmented__item--active",
    ".admin-form",
    ".field__label",
    ".activity__item",
    // Notices
    ".toast-host",
    ".toast--destructive",
    ".toast__close",
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 8_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}

#[test]
fn every_event_kind_has_a_badge() {
    for kind in ["meditation", "teaching", "celebration", "retreat"] {
        assert!(
            THEME_CSS.contains(&format!(".badge--{kind} {{")),
            "no badge style for {kind}"
        );
    }
}
