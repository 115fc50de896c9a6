// src/ui/dom.rs
// The slice of the document API the controller needs. Implemented by the
// headless `MemoryDom` and, behind the `web` feature, by `WebDom`.

/// Document host. Lookups return `None`/empty when nothing matches; mutations
/// on a node that has since been detached are ignored by implementations.
pub trait Dom {
    /// Cheap handle to an element. Equality is identity.
    type Node: Clone + PartialEq;

    fn body(&self) -> Option<Self::Node>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;

    /// First descendant of `scope` (or of the document) matching `selector`.
    fn query(&self, scope: Option<&Self::Node>, selector: &str) -> Option<Self::Node>;
    /// All matches, in document order.
    fn query_all(&self, scope: Option<&Self::Node>, selector: &str) -> Vec<Self::Node>;
    /// `node` itself or its nearest ancestor matching `selector`.
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;
    /// Inclusive: a node contains itself.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn attr(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attr(&mut self, node: &Self::Node, name: &str, value: &str);
    fn remove_attr(&mut self, node: &Self::Node, name: &str);
    fn has_attr(&self, node: &Self::Node, name: &str) -> bool {
        self.attr(node, name).is_some()
    }
    fn toggle_class(&mut self, node: &Self::Node, class: &str, on: bool);

    /// Replace the children with parsed markup.
    fn set_inner_html(&mut self, node: &Self::Node, html: &str);
    /// Parse markup and append it after the existing children.
    fn append_html(&mut self, node: &Self::Node, html: &str);
    fn outer_html(&self, node: &Self::Node) -> String;
    fn set_text(&mut self, node: &Self::Node, text: &str);
    fn set_hidden(&mut self, node: &Self::Node, hidden: bool);

    fn focus(&mut self, node: &Self::Node);
    fn active_element(&self) -> Option<Self::Node>;

    /// Evaluated on every call; never cached by the controller.
    fn matches_media(&self, query: &str) -> bool;

    /// Current value of a form control.
    fn value(&self, node: &Self::Node) -> Option<String>;
    /// Checked state of a checkbox or radio.
    fn checked(&self, node: &Self::Node) -> bool;
    /// Restore every control in `form` to its initial value.
    fn reset_form(&mut self, form: &Self::Node);
}
