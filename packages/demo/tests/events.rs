//! Drives the control panel through real DOM events and checks the re-rendered page.

use std::{any::Any, rc::Rc};

use dioxus::prelude::*;
use dioxus_core::{ElementId, Event, Mutation, Mutations};
use dioxus_html::{
    PlatformEventData, SerializedFormData, SerializedHtmlEventConverter, SerializedMouseData,
};
use pretty_assertions::assert_eq;
use reactive_button::{resolve_class, ButtonSize, ButtonVariant, LOADING_TEXT};
use reactive_button_demo::*;

fn app() -> Element {
    rsx! {
        Playground {}
    }
}

/// A rebuilt playground plus every listener the initial render registered.
struct Page {
    dom: VirtualDom,
    listeners: Vec<(String, ElementId)>,
}

impl Page {
    fn new() -> Self {
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

        let mut dom = VirtualDom::new(app);
        let mut mutations = Mutations::default();
        dom.rebuild(&mut mutations);

        let listeners = mutations
            .edits
            .into_iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } => Some((name, id)),
                _ => None,
            })
            .collect();

        Self { dom, listeners }
    }

    fn listeners(&self, name: &str) -> Vec<ElementId> {
        self.listeners
            .iter()
            .filter(|(listener, _)| listener == name)
            .map(|(_, id)| *id)
            .collect()
    }

    fn fire(&mut self, name: &str, id: ElementId, data: Box<dyn Any>) {
        let event = Event::new(Rc::new(PlatformEventData::new(data)) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event(name, event, id);
        self.dom.render_immediate_to_vec();
    }

    fn click(&mut self, id: ElementId) {
        self.fire("click", id, Box::new(SerializedMouseData::default()));
    }

    fn form_event(&mut self, name: &str, id: ElementId, value: &str) {
        self.fire(
            name,
            id,
            Box::new(SerializedFormData::new(value.to_string(), vec![])),
        );
    }

    fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    fn preview(&self) -> String {
        let html = self.html();
        let start = html.find("<button").expect("the preview button renders first");
        let end = start + html[start..].find("</button>").unwrap();
        html[start..end].to_string()
    }
}

/// Element ids are allocated deterministically, so a listener found on one
/// fresh page addresses the same control on the next.
fn locate(
    name: &str,
    data: impl Fn() -> Box<dyn Any>,
    matches: impl Fn(&str) -> bool,
) -> ElementId {
    Page::new()
        .listeners(name)
        .into_iter()
        .find(|id| {
            let mut page = Page::new();
            page.fire(name, *id, data());
            matches(&page.html())
        })
        .unwrap_or_else(|| panic!("no `{name}` listener produced the expected page"))
}

fn has_disabled_attr(button: &str) -> bool {
    button.contains(" disabled=") || button.contains(" disabled>") || button.contains(" disabled ")
}

fn active_labels(html: &str) -> Vec<String> {
    html.split("<button")
        .skip(1)
        .filter_map(|rest| rest.split("</button>").next())
        .filter(|button| button.contains(r#"aria-pressed="true""#))
        .filter_map(|button| button.rsplit('>').next())
        .map(str::to_string)
        .collect()
}

#[test]
fn clicking_success_selects_the_success_variant() {
    let success = locate(
        "click",
        || Box::new(SerializedMouseData::default()),
        |html| html.contains("variant: ButtonVariant::Success,"),
    );

    let mut page = Page::new();
    assert_eq!(active_labels(&page.html()), vec!["Primary", "Medium"]);

    page.click(success);
    let html = page.html();
    assert_eq!(active_labels(&html), vec!["Success", "Medium"]);

    let class = resolve_class(ButtonVariant::Success, ButtonSize::Medium, false, None);
    let preview = page.preview();
    assert!(preview.contains(&format!(r#"class="{class}""#)), "{preview}");
    assert!(preview.ends_with(">Hello Button"), "{preview}");

    page.click(success);
    assert_eq!(page.html(), html);
}

#[test]
fn loading_toggle_inverts_on_every_change() {
    let loading = locate(
        "change",
        || Box::new(SerializedFormData::new("on".to_string(), vec![])),
        |html| html.contains("is_loading: true,"),
    );

    let mut page = Page::new();
    assert!(!has_disabled_attr(&page.preview()));

    page.form_event("change", loading, "on");
    let preview = page.preview();
    assert!(preview.contains(LOADING_TEXT), "{preview}");
    assert!(has_disabled_attr(&preview), "{preview}");
    assert!(page.html().contains("is_loading: true,"));
    assert!(page.html().contains("disabled: false,"));

    page.form_event("change", loading, "off");
    let preview = page.preview();
    assert!(preview.ends_with(">Hello Button"), "{preview}");
    assert!(!has_disabled_attr(&preview), "{preview}");
    assert!(page.html().contains("is_loading: false,"));
}

#[test]
fn typing_replaces_only_the_label() {
    let mut page = Page::new();
    let inputs = page.listeners("input");
    assert_eq!(inputs.len(), 1);

    page.form_event("input", inputs[0], "Hi");

    let preview = page.preview();
    assert!(preview.ends_with(">Hi"), "{preview}");
    assert!(page.html().contains(r#"value="Hi""#));

    let html = page.html();
    for unchanged in [
        "variant: ButtonVariant::Primary,",
        "size: ButtonSize::Medium,",
        "disabled: false,",
        "is_loading: false,",
        "outline: false,",
    ] {
        assert!(html.contains(unchanged), "missing `{unchanged}`");
    }
}
