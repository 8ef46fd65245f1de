use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use reactive_button::Button;

use crate::{
    control_descriptors, usage_snippet, ControlDescriptor, ControlKind, SelectOption, SettingKey,
    SettingUpdate, Settings, SettingsError,
};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const MAIN_CSS: Asset = asset!("/assets/main.css");

const TEXT_INPUT_CLASS: &str = "rounded-md border-gray-300 shadow-sm focus:border-blue-500 focus:ring-blue-500 sm:text-sm px-3 py-2 w-64";
const TOGGLE_TRACK_CLASS: &str = "w-11 h-6 bg-gray-200 peer-focus:outline-none peer-focus:ring-4 peer-focus:ring-blue-300 rounded-full peer peer-checked:after:translate-x-full peer-checked:after:border-white after:content-[''] after:absolute after:top-[2px] after:left-[2px] after:bg-white after:border-gray-300 after:border after:rounded-full after:h-5 after:w-5 after:transition-all peer-checked:bg-blue-600";

/// Classes of one select option button.
pub fn select_option_class(active: bool) -> &'static str {
    if active {
        "px-3 py-1 rounded-md text-sm bg-blue-100 text-blue-700"
    } else {
        "px-3 py-1 rounded-md text-sm bg-gray-100 text-gray-700 hover:bg-gray-200"
    }
}

/// The root of the app: document head plus the playground.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Reactive Button Component Demo" }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: MAIN_CSS }
        Playground {}
    }
}

/// Owns the [`Settings`] and renders the preview, the control panel and the
/// usage example.
#[component]
pub fn Playground(#[props(default)] initial: Settings) -> Element {
    let mut settings = use_signal(move || initial);
    let controls = use_hook(control_descriptors);

    let update_setting = use_callback(move |update: SettingUpdate| {
        debug!(%update, "updating button setting");
        settings.write().apply(update);
    });

    let current = settings.read().clone();
    let snippet = usage_snippet(&current);

    rsx! {
        div { class: "min-h-screen bg-gray-50 py-12 px-4",
            div { class: "max-w-3xl mx-auto",
                h1 { class: "text-3xl font-bold text-gray-900 mb-8", "Reactive Button Component Demo" }

                div { class: "bg-white rounded-lg shadow p-6 mb-8",
                    h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Preview" }
                    div { class: "flex justify-center mb-8",
                        Button {
                            variant: current.variant,
                            size: current.size,
                            disabled: current.disabled,
                            is_loading: current.loading,
                            outline: current.outline,
                            "{current.text}"
                        }
                    }

                    div { class: "space-y-4",
                        for descriptor in controls {
                            div {
                                key: "{descriptor.key}",
                                class: "flex items-center justify-between",
                                span { class: "text-sm font-medium text-gray-700", "{descriptor.label}" }
                                {render_control(descriptor.clone(), &current, update_setting)}
                            }
                        }
                    }
                }

                div { class: "bg-white rounded-lg shadow p-6",
                    h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Usage Example" }
                    pre { class: "bg-gray-50 p-4 rounded-md overflow-x-auto",
                        code { class: "text-sm text-gray-800", "{snippet}" }
                    }
                }
            }
        }
    }
}

fn render_control(
    descriptor: ControlDescriptor,
    settings: &Settings,
    on_update: Callback<SettingUpdate>,
) -> Element {
    let setting = descriptor.key;

    match descriptor.kind {
        ControlKind::Text => rsx! {
            TextControl {
                setting,
                value: settings.text_of(setting).unwrap_or_default().to_string(),
                placeholder: descriptor.placeholder(),
                on_update,
            }
        },
        ControlKind::Toggle => rsx! {
            ToggleControl {
                setting,
                checked: settings.flag_of(setting).unwrap_or_default(),
                on_update,
            }
        },
        ControlKind::Select(options) => rsx! {
            SelectControl {
                setting,
                options,
                active: settings.option_of(setting),
                on_update,
            }
        },
    }
}

fn emit(on_update: EventHandler<SettingUpdate>, update: Result<SettingUpdate, SettingsError>) {
    match update {
        Ok(update) => on_update.call(update),
        Err(err) => warn!(%err, "ignoring control input"),
    }
}

#[component]
fn TextControl(
    setting: SettingKey,
    value: String,
    placeholder: String,
    on_update: EventHandler<SettingUpdate>,
) -> Element {
    rsx! {
        input {
            r#type: "text",
            class: TEXT_INPUT_CLASS,
            value: "{value}",
            placeholder: "{placeholder}",
            oninput: move |evt| emit(on_update, setting.text(evt.value())),
        }
    }
}

#[component]
fn ToggleControl(setting: SettingKey, checked: bool, on_update: EventHandler<SettingUpdate>) -> Element {
    rsx! {
        label { class: "relative inline-flex items-center cursor-pointer",
            input {
                r#type: "checkbox",
                class: "sr-only peer",
                checked,
                onchange: move |_| emit(on_update, setting.flag(!checked)),
            }
            div { class: TOGGLE_TRACK_CLASS }
        }
    }
}

#[component]
fn SelectControl(
    setting: SettingKey,
    options: Vec<SelectOption>,
    active: Option<&'static str>,
    on_update: EventHandler<SettingUpdate>,
) -> Element {
    rsx! {
        div { class: "flex gap-2",
            for option in options {
                button {
                    key: "{option.value}",
                    r#type: "button",
                    class: select_option_class(active == Some(option.value)),
                    aria_pressed: (active == Some(option.value)).to_string(),
                    onclick: move |_| emit(on_update, setting.parse_option(option.value)),
                    "{option.label}"
                }
            }
        }
    }
}
