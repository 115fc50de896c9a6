// src/ui/focus_trap.rs
use super::dom::Dom;

pub const FOCUSABLE: &str = "a[href], button, input, select, textarea, [tabindex]:not([tabindex='-1'])";

/// Boundary elements of an active trap, fixed at activation time.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusTrap<N> {
    pub first: N,
    pub last: N,
}

/// Focusable, enabled descendants of `container` in document order.
pub fn focusable<D: Dom>(dom: &D, container: &D::Node) -> Vec<D::Node> {
    dom.query_all(Some(container), FOCUSABLE)
        .into_iter()
        .filter(|n| !dom.has_attr(n, "disabled"))
        .collect()
}

impl<N: Clone + PartialEq> FocusTrap<N> {
    /// Compute the boundaries and focus the first element.
    /// `None` (and no focus change) when nothing inside can take focus.
    pub fn activate<D: Dom<Node = N>>(dom: &mut D, container: &N) -> Option<Self> {
        let items = focusable(&*dom, container);
        let first = items.first()?.clone();
        let last = items.last()?.clone();
        dom.focus(&first);
        logd!("Focus trap active over {} element(s)", items.len());
        Some(Self { first, last })
    }

    /// Handle Tab / Shift+Tab. Returns true when focus was wrapped
    /// (the caller should then suppress the default move).
    pub fn on_tab<D: Dom<Node = N>>(&self, dom: &mut D, shift: bool) -> bool {
        let active = dom.active_element();
        if shift && active.as_ref() == Some(&self.first) {
            dom.focus(&self.last);
            true
        } else if !shift && active.as_ref() == Some(&self.last) {
            dom.focus(&self.first);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::memory::MemoryDom;

    const PANEL: &str = r#"<div id="panel">
        <a href="/x">link</a>
        <a>no href</a>
        <button disabled>off</button>
        <div tabindex="-1">skipped</div>
        <span tabindex="0">span</span>
        <button>last</button>
    </div>"#;

    #[test]
    fn skips_disabled_and_negative_tabindex() {
        let dom = MemoryDom::parse(PANEL);
        let panel = dom.by_id("panel").unwrap();
        let items = focusable(&dom, &panel);
        let tags: Vec<&str> = items.iter().filter_map(|n| dom.tag(*n)).collect();
        assert_eq!(tags, ["a", "span", "button"]);
    }

    #[test]
    fn tab_wraps_at_both_ends() {
        let mut dom = MemoryDom::parse(PANEL);
        let panel = dom.by_id("panel").unwrap();
        let trap = FocusTrap::activate(&mut dom, &panel).unwrap();
        assert_eq!(dom.active_element(), Some(trap.first));

        assert!(trap.on_tab(&mut dom, true));
        assert_eq!(dom.active_element(), Some(trap.last));
        assert!(trap.on_tab(&mut dom, false));
        assert_eq!(dom.active_element(), Some(trap.first));
    }
}
