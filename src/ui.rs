use crate::core::{Preferences, PAGE_HIDDEN_CLASS, QUIET_BODY_CLASS};
use web_sys as web;

pub const QUIET_TOGGLE_ID: &str = "quietToggle";
pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Mirror preferences onto `<body>` and the two toggle buttons.
pub fn apply_prefs(document: &web::Document, prefs: &Preferences) {
    if let Some(body) = document.body() {
        _ = body.class_list().toggle_with_force(QUIET_BODY_CLASS, prefs.quiet);
        _ = body.set_attribute("data-theme", prefs.theme.as_str());
    }
    set_button(document, QUIET_TOGGLE_ID, prefs.quiet, &prefs.quiet_label());
    set_button(
        document,
        THEME_TOGGLE_ID,
        prefs.theme_pressed(),
        &prefs.theme_label(),
    );
}

/// Stylesheets pause their own animations off this class.
pub fn set_page_hidden(document: &web::Document, hidden: bool) {
    if let Some(body) = document.body() {
        _ = body.class_list().toggle_with_force(PAGE_HIDDEN_CLASS, hidden);
    }
}

#[inline]
fn set_button(document: &web::Document, id: &str, pressed: bool, label: &str) {
    if let Some(btn) = document.get_element_by_id(id) {
        _ = btn.set_attribute("aria-pressed", if pressed { "true" } else { "false" });
        btn.set_text_content(Some(label));
    }
}
