//! Password input visibility toggles.
//!
//! Each `.password-toggle` control flips the password input next to it
//! between `password` and `text` and swaps the eye icon. Wired per control
//! at mount; a toggle without a sibling input or icon is a no-op.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

const INPUT_SELECTOR: &str = "input[type=\"password\"], input[type=\"text\"]";

/// Wire every `.password-toggle` on the page.
pub fn wire(document: &Document) -> Vec<EventListener> {
    let Ok(toggles) = document.query_selector_all(".password-toggle") else {
        return Vec::new();
    };

    let mut listeners = Vec::with_capacity(toggles.length() as usize);
    for i in 0..toggles.length() {
        let Some(toggle) = toggles.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let control = toggle.clone();
        listeners.push(EventListener::new(&toggle, "click", move |_| {
            flip(&control);
        }));
    }
    listeners
}

fn flip(toggle: &Element) {
    let Some(parent) = toggle.parent_element() else {
        return;
    };
    let Some(input) = parent
        .query_selector(INPUT_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let icon = toggle.query_selector("i").ok().flatten();

    if input.type_() == "password" {
        input.set_type("text");
        if let Some(icon) = icon {
            icon.set_class_name("fas fa-eye-slash");
        }
    } else {
        input.set_type("password");
        if let Some(icon) = icon {
            icon.set_class_name("fas fa-eye");
        }
    }
}
