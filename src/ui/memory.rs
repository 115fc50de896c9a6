// src/ui/memory.rs
// Headless document: a parsed `scraper::Html` whose tree is edited in place.
// Every lookup goes through `scraper::Selector`, so the controller runs (and is
// tested) against real selector semantics without a browser.

use std::collections::HashMap;

use scraper::node::{Element, Text};
use scraper::{ElementRef, Html, Node, Selector};

use super::dom::Dom;
use crate::core::sanitize::normalize_ws;

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(ego_tree::NodeId);

pub struct MemoryDom {
    html: Html,
    focused: Option<NodeId>,
    viewport_width: u32,
    /// Live control state; a missing entry means the markup's initial state.
    values: HashMap<NodeId, String>,
    checked: HashMap<NodeId, bool>,
}

/// `Element` caches its id and class list on first read. Attribute edits are
/// written into a copy that has never been read.
fn fresh_element(from: &Element) -> Element {
    let mut el = Html::parse_fragment("").root_element().value().clone();
    el.name = from.name.clone();
    el.attrs = from.attrs.clone();
    el
}

fn selector(s: &str) -> Option<Selector> {
    Selector::parse(s).ok()
}

impl MemoryDom {
    pub fn parse(html: &str) -> Self {
        MemoryDom {
            html: Html::parse_document(html),
            focused: None,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            values: HashMap::new(),
            checked: HashMap::new(),
        }
    }

    pub fn with_viewport(mut self, width: u32) -> Self {
        self.viewport_width = width;
        self
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    /// Document-wide `querySelector`.
    pub fn select(&self, selector: &str) -> Option<NodeId> {
        self.query(None, selector)
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(Element::name)
    }

    /// Text content with whitespace collapsed.
    pub fn text(&self, node: NodeId) -> String {
        normalize_ws(&self.raw_text(node))
    }

    /// Simulate typing into (or choosing in) a control.
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        self.values.insert(node, value.to_string());
    }

    /// Simulate ticking a checkbox or radio. Checking a radio unchecks the
    /// rest of its group within the same form.
    pub fn set_checked(&mut self, node: NodeId, on: bool) {
        if on && self.attr(&node, "type").as_deref() == Some("radio") {
            if let Some(name) = self.attr(&node, "name") {
                let form = self.closest(&node, "form");
                let group = self.query_all(form.as_ref(), &format!("input[type='radio'][name='{name}']"));
                for other in group {
                    self.checked.insert(other, false);
                }
            }
        }
        self.checked.insert(node, on);
    }

    /// Reachable from the document root.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let root = NodeId(self.html.tree.root().id());
        self.contains(&root, &node)
    }

    /* ---------------- reading ---------------- */

    fn element_ref(&self, node: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(node.0).and_then(ElementRef::wrap)
    }

    fn element(&self, node: NodeId) -> Option<&Element> {
        self.element_ref(node).map(|e| e.value())
    }

    fn raw_text(&self, node: NodeId) -> String {
        self.element_ref(node).map(|e| e.text().collect()).unwrap_or_default()
    }

    /// Attached elements in document order.
    fn all_elements(&self) -> impl Iterator<Item = ElementRef<'_>> + '_ {
        self.html.tree.root().descendants().filter_map(ElementRef::wrap)
    }

    fn initial_value(&self, node: NodeId) -> Option<String> {
        let el = self.element(node)?;
        match el.name() {
            "input" => {
                let toggle = matches!(el.attr("type"), Some("radio" | "checkbox"));
                let fallback = if toggle { "on" } else { "" };
                Some(el.attr("value").unwrap_or(fallback).to_string())
            }
            "textarea" => Some(self.raw_text(node)),
            "select" => {
                let options = self.query_all(Some(&node), "option");
                let chosen = options
                    .iter()
                    .find(|o| self.has_attr(o, "selected"))
                    .or_else(|| options.first());
                Some(chosen.map(|o| self.option_value(*o)).unwrap_or_default())
            }
            _ => None,
        }
    }

    fn option_value(&self, option: NodeId) -> String {
        match self.attr(&option, "value") {
            Some(v) => v,
            None => self.text(option),
        }
    }

    /* ---------------- writing ---------------- */

    fn edit_element(&mut self, node: NodeId, edit: impl FnOnce(&mut Element)) {
        let Some(mut el) = self.element(node).map(fresh_element) else {
            return;
        };
        edit(&mut el);
        if let Some(mut n) = self.html.tree.get_mut(node.0) {
            *n.value() = Node::Element(el);
        }
    }

    fn clear_children(&mut self, node: NodeId) {
        let Some(n) = self.html.tree.get(node.0) else {
            return;
        };
        let children: Vec<ego_tree::NodeId> = n.children().map(|c| c.id()).collect();
        for id in children {
            if let Some(mut c) = self.html.tree.get_mut(id) {
                c.detach();
            }
        }
    }

    /// Parse `markup` as a body fragment and append copies of its nodes.
    fn append_markup(&mut self, node: NodeId, markup: &str) {
        let fragment = Html::parse_fragment(markup);
        self.copy_children(node.0, *fragment.root_element());
    }

    fn copy_children(&mut self, parent: ego_tree::NodeId, src: ego_tree::NodeRef<'_, Node>) {
        for child in src.children() {
            let Some(mut target) = self.html.tree.get_mut(parent) else {
                return;
            };
            let id = target.append(child.value().clone()).id();
            self.copy_children(id, child);
        }
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn body(&self) -> Option<NodeId> {
        self.query(None, "body")
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.all_elements()
            .find(|e| e.value().id() == Some(id))
            .map(|e| NodeId(e.id()))
    }

    fn query(&self, scope: Option<&NodeId>, selector_text: &str) -> Option<NodeId> {
        self.query_all(scope, selector_text).into_iter().next()
    }

    fn query_all(&self, scope: Option<&NodeId>, selector_text: &str) -> Vec<NodeId> {
        let Some(sel) = selector(selector_text) else {
            return Vec::new();
        };
        match scope {
            Some(s) => match self.element_ref(*s) {
                Some(scope_el) => scope_el.select(&sel).map(|e| NodeId(e.id())).collect(),
                None => Vec::new(),
            },
            None => self
                .all_elements()
                .filter(|e| sel.matches(e))
                .map(|e| NodeId(e.id()))
                .collect(),
        }
    }

    fn closest(&self, node: &NodeId, selector_text: &str) -> Option<NodeId> {
        let sel = selector(selector_text)?;
        let start = self.html.tree.get(node.0)?;
        std::iter::once(start)
            .chain(start.ancestors())
            .filter_map(ElementRef::wrap)
            .find(|e| sel.matches(e))
            .map(|e| NodeId(e.id()))
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        if ancestor == node {
            return true;
        }
        self.html
            .tree
            .get(node.0)
            .is_some_and(|n| n.ancestors().any(|a| a.id() == ancestor.0))
    }

    fn attr(&self, node: &NodeId, name: &str) -> Option<String> {
        self.element(*node)?.attr(name).map(str::to_string)
    }

    fn set_attr(&mut self, node: &NodeId, name: &str, value: &str) {
        self.edit_element(*node, |el| {
            if let Some((_, v)) = el.attrs.iter_mut().find(|(k, _)| &*k.local == name) {
                *v = value.into();
                return;
            }
            let mut key = el.name.clone();
            key.prefix = None;
            key.ns = Default::default();
            key.local = name.into();
            el.attrs.insert(key, value.into());
        });
    }

    fn remove_attr(&mut self, node: &NodeId, name: &str) {
        self.edit_element(*node, |el| el.attrs.retain(|k, _| &*k.local != name));
    }

    fn toggle_class(&mut self, node: &NodeId, class: &str, on: bool) {
        let current = self.attr(node, "class").unwrap_or_default();
        let mut classes: Vec<&str> = current.split_whitespace().filter(|c| *c != class).collect();
        if on {
            classes.push(class);
        }
        let joined = classes.join(" ");
        self.set_attr(node, "class", &joined);
    }

    fn set_inner_html(&mut self, node: &NodeId, html: &str) {
        if self.element(*node).is_none() {
            return;
        }
        self.clear_children(*node);
        self.append_markup(*node, html);
    }

    fn append_html(&mut self, node: &NodeId, html: &str) {
        if self.element(*node).is_some() {
            self.append_markup(*node, html);
        }
    }

    fn outer_html(&self, node: &NodeId) -> String {
        self.element_ref(*node).map(|e| e.html()).unwrap_or_default()
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        if self.element(*node).is_none() {
            return;
        }
        self.clear_children(*node);
        if let Some(mut n) = self.html.tree.get_mut(node.0) {
            n.append(Node::Text(Text { text: text.into() }));
        }
    }

    fn set_hidden(&mut self, node: &NodeId, hidden: bool) {
        if hidden {
            self.set_attr(node, "hidden", "");
        } else {
            self.remove_attr(node, "hidden");
        }
    }

    fn focus(&mut self, node: &NodeId) {
        if self.element(*node).is_some() {
            self.focused = Some(*node);
        }
    }

    fn active_element(&self) -> Option<NodeId> {
        self.focused
            .filter(|n| self.is_attached(*n))
            .or_else(|| self.body())
    }

    fn matches_media(&self, query: &str) -> bool {
        media_matches(self.viewport_width, query)
    }

    fn value(&self, node: &NodeId) -> Option<String> {
        match self.values.get(node) {
            Some(v) => Some(v.clone()),
            None => self.initial_value(*node),
        }
    }

    fn checked(&self, node: &NodeId) -> bool {
        match self.checked.get(node) {
            Some(on) => *on,
            None => self.has_attr(node, "checked"),
        }
    }

    fn reset_form(&mut self, form: &NodeId) {
        let Some(f) = self.html.tree.get(form.0) else {
            return;
        };
        let controls: Vec<NodeId> = f.descendants().map(|n| NodeId(n.id())).collect();
        for n in controls {
            self.values.remove(&n);
            self.checked.remove(&n);
        }
    }
}

/// `(max-width: Npx)` / `(min-width: Npx)` against a fixed viewport width.
fn media_matches(width: u32, query: &str) -> bool {
    let q = query.trim().trim_start_matches('(').trim_end_matches(')');
    let Some((feature, value)) = q.split_once(':') else {
        return false;
    };
    let Ok(px) = value.trim().trim_end_matches("px").trim().parse::<u32>() else {
        return false;
    };
    match feature.trim() {
        "max-width" => width <= px,
        "min-width" => width >= px,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html><html><body data-page="home">
        <nav class="primary-nav"><ul>
            <li><a href="index.html" data-nav="home">Home</a></li>
            <li><a href="divisions.html" data-nav="divisions" class="x">Divisions</a></li>
        </ul></nav>
        <form id="f">
            <select name="category"><option value="all">All</option><option value="men" selected>Men</option></select>
            <input name="search" value="jon" />
            <button disabled>Go</button>
        </form>
        <div id="out"><p>Tom &amp; <b>Jerry</b></p></div>
    </body></html>"#;

    #[test]
    fn selectors_cover_compounds_and_descendants() {
        let dom = MemoryDom::parse(PAGE);
        assert_eq!(dom.query_all(None, ".primary-nav [data-nav]").len(), 2);
        let link = dom.select("a[data-nav='divisions'].x").unwrap();
        assert_eq!(dom.attr(&link, "href").as_deref(), Some("divisions.html"));
        assert_eq!(dom.query_all(None, "nav > ul > li > a").len(), 2);
        assert!(dom.select("nav > a").is_none());
        assert_eq!(dom.query_all(None, "a:not(.x)").len(), 1);
        assert_eq!(dom.query_all(None, "select, input").len(), 2);
        assert!(dom.select("#out b").is_some());
    }

    #[test]
    fn closest_and_contains_are_inclusive() {
        let dom = MemoryDom::parse(PAGE);
        let b = dom.select("#out b").unwrap();
        let out = dom.by_id("out").unwrap();
        assert_eq!(dom.closest(&b, "#out"), Some(out));
        assert_eq!(dom.closest(&b, "b"), Some(b));
        assert!(dom.contains(&out, &b));
        assert!(dom.contains(&b, &b));
        assert!(!dom.contains(&b, &out));
    }

    #[test]
    fn inner_html_replaces_and_detaches() {
        let mut dom = MemoryDom::parse(PAGE);
        let out = dom.by_id("out").unwrap();
        let old = dom.select("#out b").unwrap();
        assert_eq!(dom.text(out), "Tom & Jerry");

        dom.set_inner_html(&out, r#"<span class="n">1 &lt; 2</span>"#);
        assert!(!dom.is_attached(old));
        assert_eq!(dom.outer_html(&out), r#"<div id="out"><span class="n">1 &lt; 2</span></div>"#);

        dom.append_html(&out, "<i>more</i>");
        assert_eq!(dom.text(out), "1 < 2more");
    }

    #[test]
    fn form_values_and_reset() {
        let mut dom = MemoryDom::parse(PAGE);
        let select = dom.select("[name='category']").unwrap();
        let search = dom.select("[name=search]").unwrap();
        assert_eq!(dom.value(&select).as_deref(), Some("men"));
        assert_eq!(dom.value(&search).as_deref(), Some("jon"));

        dom.set_value(search, "ali");
        assert_eq!(dom.value(&search).as_deref(), Some("ali"));
        let form = dom.by_id("f").unwrap();
        dom.reset_form(&form);
        assert_eq!(dom.value(&search).as_deref(), Some("jon"));
    }

    #[test]
    fn radio_groups_track_the_checked_member() {
        let mut dom = MemoryDom::parse(r#"<form id="f">
            <input type="radio" name="tier" value="all" checked>
            <input type="radio" name="tier" value="heavy">
            <input type="checkbox" name="x">
        </form>"#);
        let radios = dom.query_all(None, "input[type='radio']");
        assert!(dom.checked(&radios[0]) && !dom.checked(&radios[1]));

        dom.set_checked(radios[1], true);
        assert!(!dom.checked(&radios[0]) && dom.checked(&radios[1]));
        assert_eq!(dom.value(&radios[1]).as_deref(), Some("heavy"));
        let boxed = dom.select("[name=x]").unwrap();
        assert_eq!(dom.value(&boxed).as_deref(), Some("on"));

        let form = dom.by_id("f").unwrap();
        dom.reset_form(&form);
        assert!(dom.checked(&radios[0]) && !dom.checked(&radios[1]));
    }

    #[test]
    fn id_and_class_edits_are_visible_to_selectors() {
        let mut dom = MemoryDom::parse(PAGE);
        let out = dom.by_id("out").unwrap();
        assert!(dom.select(".fresh").is_none());
        dom.toggle_class(&out, "fresh", true);
        assert_eq!(dom.select(".fresh"), Some(out));

        dom.remove_attr(&out, "id");
        assert!(dom.by_id("out").is_none());
        assert!(dom.select("#out").is_none());
        dom.set_attr(&out, "id", "moved");
        assert_eq!(dom.select("div#moved.fresh"), Some(out));
        assert_eq!(dom.tag(out), Some("div"));
    }

    #[test]
    fn viewport_queries() {
        assert!(media_matches(740, "(max-width: 740px)"));
        assert!(!media_matches(741, "(max-width: 740px)"));
        assert!(media_matches(900, "(min-width:900px)"));
        assert!(!media_matches(900, "(orientation: portrait)"));
    }

    #[test]
    fn class_toggle_is_idempotent() {
        let mut dom = MemoryDom::parse(PAGE);
        let link = dom.select("[data-nav='home']").unwrap();
        dom.toggle_class(&link, "active", true);
        dom.toggle_class(&link, "active", true);
        assert_eq!(dom.attr(&link, "class").as_deref(), Some("active"));
        dom.toggle_class(&link, "active", false);
        assert!(dom.select(".active").is_none());
    }
}
