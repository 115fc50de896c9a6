// src/web.rs
// Live-browser host for the controller. Built with `--features web` for wasm32.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, KeyboardEvent, NodeList, Window,
};

use crate::roster::Roster;
use crate::ui::dom::Dom;
use crate::ui::featured::ThreadRng;
use crate::ui::{Controller, EventOutcome};

pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

impl Dom for WebDom {
    type Node = Element;

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, scope: Option<&Element>, selector: &str) -> Option<Element> {
        let found = match scope {
            Some(s) => s.query_selector(selector),
            None => self.document.query_selector(selector),
        };
        found.ok().flatten()
    }

    fn query_all(&self, scope: Option<&Element>, selector: &str) -> Vec<Element> {
        let found = match scope {
            Some(s) => s.query_selector_all(selector),
            None => self.document.query_selector_all(selector),
        };
        found.map(elements).unwrap_or_default()
    }

    fn closest(&self, node: &Element, selector: &str) -> Option<Element> {
        node.closest(selector).ok().flatten()
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &web_sys::Node = node;
        ancestor.contains(Some(node))
    }

    fn attr(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attr(&mut self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn remove_attr(&mut self, node: &Element, name: &str) {
        let _ = node.remove_attribute(name);
    }

    fn toggle_class(&mut self, node: &Element, class: &str, on: bool) {
        let _ = node.class_list().toggle_with_force(class, on);
    }

    fn set_inner_html(&mut self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn append_html(&mut self, node: &Element, html: &str) {
        let _ = node.insert_adjacent_html("beforeend", html);
    }

    fn outer_html(&self, node: &Element) -> String {
        node.outer_html()
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_hidden(&mut self, node: &Element, hidden: bool) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            el.set_hidden(hidden);
        }
    }

    fn focus(&mut self, node: &Element) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            let _ = el.focus();
        }
    }

    fn active_element(&self) -> Option<Element> {
        self.document.active_element()
    }

    fn matches_media(&self, query: &str) -> bool {
        self.window
            .match_media(query)
            .ok()
            .flatten()
            .is_some_and(|m| m.matches())
    }

    fn value(&self, node: &Element) -> Option<String> {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            return Some(select.value());
        }
        node.dyn_ref::<HtmlTextAreaElement>().map(|t| t.value())
    }

    fn checked(&self, node: &Element) -> bool {
        node.dyn_ref::<HtmlInputElement>().is_some_and(|i| i.checked())
    }

    fn reset_form(&mut self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }
}

/* ---------------- entry point ---------------- */

struct App {
    dom: WebDom,
    controller: Controller<'static, Element>,
}

type Handler = fn(&mut App, &Event) -> EventOutcome;

fn target_of(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn click(app: &mut App, event: &Event) -> EventOutcome {
    let App { dom, controller } = app;
    match target_of(event) {
        Some(target) => controller.on_click(dom, &target),
        None => EventOutcome::default(),
    }
}

fn keydown(app: &mut App, event: &Event) -> EventOutcome {
    let App { dom, controller } = app;
    match event.dyn_ref::<KeyboardEvent>() {
        Some(key) => controller.on_keydown(dom, &key.key(), key.shift_key()),
        None => EventOutcome::default(),
    }
}

fn input(app: &mut App, event: &Event) -> EventOutcome {
    let App { dom, controller } = app;
    match target_of(event) {
        Some(target) => controller.on_input(dom, &target),
        None => EventOutcome::default(),
    }
}

fn submit(app: &mut App, event: &Event) -> EventOutcome {
    let App { dom, controller } = app;
    match target_of(event) {
        Some(target) => controller.on_submit(dom, &target),
        None => EventOutcome::default(),
    }
}

fn listen(document: &Document, kind: &str, app: &Rc<RefCell<App>>, handler: Handler) -> Result<(), JsValue> {
    let app = Rc::clone(app);
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        // A handler that triggers another event synchronously finds the app busy; skip it.
        let Ok(mut app) = app.try_borrow_mut() else {
            return;
        };
        if handler(&mut *app, &event).prevent_default {
            event.prevent_default();
        }
    });
    document.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    callback.forget();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let roster = Roster::bundled().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let roster: &'static Roster = Box::leak(Box::new(roster));

    let Some(mut dom) = WebDom::new() else {
        return Ok(());
    };
    let controller = Controller::attach(&mut dom, roster, &mut ThreadRng);
    let document = dom.document().clone();
    let app = Rc::new(RefCell::new(App { dom, controller }));

    listen(&document, "click", &app, click)?;
    listen(&document, "keydown", &app, keydown)?;
    listen(&document, "input", &app, input)?;
    listen(&document, "submit", &app, submit)?;
    Ok(())
}
