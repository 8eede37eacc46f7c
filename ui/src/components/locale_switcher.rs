use dioxus::prelude::*;
use tracing::info;

use crate::core::locale_switch::LocaleSwitch;
use crate::core::source::site_config;
use crate::t;

/// One button per configured locale; the current one is marked and inert.
///
/// Switching keeps the visitor on the same page: the leading locale segment
/// of `current_path` is swapped and the router replaces the history entry.
#[component]
pub fn LocaleSwitcher(locale: String, current_path: String) -> Element {
    let switch = LocaleSwitch::new(locale, site_config());
    let label = t!("locale-switcher-label");

    rsx! {
        div { class: "locale-switcher", role: "group", aria_label: "{label}",
            for code in switch.supported.iter().cloned() {
                LocaleButton {
                    key: "{code}",
                    current: switch.is_current(&code),
                    target: switch.switch_to(&current_path, &code),
                    code,
                }
            }
        }
    }
}

#[component]
fn LocaleButton(code: String, current: bool, target: Option<String>) -> Element {
    let short = display_code(&code);
    let language = language_name(&code);
    let aria = t!("locale-switch-to", language = language);

    rsx! {
        button {
            r#type: "button",
            class: if current { "locale-switcher__option locale-switcher__option--current" } else { "locale-switcher__option" },
            aria_current: current.then_some("true"),
            aria_label: "{aria}",
            disabled: current,
            onclick: move |_| {
                let Some(path) = target.clone() else {
                    return;
                };
                info!(path = %path, "switching locale");
                navigator().replace(path);
            },
            "{short}"
        }
    }
}

/// `en` -> `En`
fn display_code(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn language_name(code: &str) -> String {
    match code {
        "en" => t!("language-en"),
        "fr" => t!("language-fr"),
        other => display_code(other),
    }
}
