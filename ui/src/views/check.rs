use dioxus::prelude::*;

use crate::check::CheckView;

#[component]
pub fn Check() -> Element {
    // Subscribe to global language code (if provided) so this view re-renders
    // immediately when the locale changes from the navbar.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        // Hidden marker node ensures reactive dependency on language signal.
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-check",
            h1 { {crate::t!("check-title")} }
            p { class: "page-check__intro", {crate::t!("check-intro")} }
            CheckView {}
        }
    }
}
