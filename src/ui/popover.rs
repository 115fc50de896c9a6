// src/ui/popover.rs
// Quick-browse popovers. A single state value decides what is open:
// nothing, one inline popover, or the shared modal.

use super::dom::Dom;
use super::focus_trap::FocusTrap;
use crate::config::consts::NARROW_VIEWPORT_QUERY;
use crate::render::{popover_id, quick_browse};
use crate::roster::Roster;

#[derive(Clone, Debug, PartialEq)]
pub enum Popover<N> {
    Closed,
    Inline { division: String, trigger: N },
    Modal { division: String, trigger: N, trap: Option<FocusTrap<N>> },
}

impl<N: Clone + PartialEq> Popover<N> {
    pub fn inline_division(&self) -> Option<&str> {
        match self {
            Popover::Inline { division, .. } => Some(division),
            _ => None,
        }
    }

    pub fn open_division(&self) -> Option<&str> {
        match self {
            Popover::Closed => None,
            Popover::Inline { division, .. } | Popover::Modal { division, .. } => Some(division),
        }
    }

    pub fn is_modal(&self) -> bool {
        matches!(self, Popover::Modal { .. })
    }

    pub fn trap(&self) -> Option<&FocusTrap<N>> {
        match self {
            Popover::Modal { trap, .. } => trap.as_ref(),
            _ => None,
        }
    }
}

/// Render one trigger + popover per division into `#quick-browse-list`.
pub fn render_list<D: Dom>(dom: &mut D, roster: &Roster) -> bool {
    let Some(list) = dom.by_id("quick-browse-list") else {
        return false;
    };
    dom.append_html(&list, &quick_browse(roster));
    true
}

fn hide_inline<D: Dom>(dom: &mut D, division: &str) {
    if let Some(pop) = dom.by_id(&popover_id(division)) {
        dom.set_attr(&pop, "aria-hidden", "true");
    }
}

/// Hide whatever is open without moving focus. Returns its trigger.
fn hide<D: Dom>(dom: &mut D, state: &mut Popover<D::Node>) -> Option<D::Node> {
    match std::mem::replace(state, Popover::Closed) {
        Popover::Closed => None,
        Popover::Inline { division, trigger } => {
            hide_inline(dom, &division);
            logd!("Popover {division} closed");
            Some(trigger)
        }
        Popover::Modal { division, trigger, .. } => {
            if let Some(modal) = dom.by_id("popover-modal") {
                dom.set_attr(&modal, "aria-hidden", "true");
            }
            logd!("Modal for {division} closed");
            Some(trigger)
        }
    }
}

/// Close whatever is open and return focus to its trigger. Idempotent.
pub fn close<D: Dom>(dom: &mut D, state: &mut Popover<D::Node>) {
    if let Some(trigger) = hide(dom, state) {
        dom.focus(&trigger);
    }
}

/// A trigger was clicked. The viewport is queried now, not at render time.
pub fn on_trigger<D: Dom>(dom: &mut D, roster: &Roster, state: &mut Popover<D::Node>, trigger: D::Node, division: String) {
    if dom.matches_media(NARROW_VIEWPORT_QUERY) {
        open_modal(dom, roster, state, trigger, division);
        return;
    }

    if state.inline_division() == Some(division.as_str()) {
        close(dom, state);
        return;
    }
    // Switching popovers leaves focus on the trigger just clicked.
    hide(dom, state);

    let Some(pop) = dom.by_id(&popover_id(&division)) else {
        return;
    };
    dom.set_attr(&pop, "aria-hidden", "false");
    logd!("Popover {division} opened");
    *state = Popover::Inline { division, trigger };
}

fn open_modal<D: Dom>(dom: &mut D, roster: &Roster, state: &mut Popover<D::Node>, trigger: D::Node, division: String) {
    let Some(modal) = dom.by_id("popover-modal") else {
        return;
    };

    // Inline and modal are never open together.
    hide(dom, state);

    let source = dom.by_id(&popover_id(&division)).map(|p| dom.outer_html(&p));
    if let Some(content) = dom.query(Some(&modal), "#popover-content") {
        dom.set_inner_html(&content, source.as_deref().unwrap_or(""));
        if let Some(clone) = dom.query(Some(&content), ".quick-browse__popover") {
            // Ids must stay unique in the document.
            dom.remove_attr(&clone, "id");
            dom.set_attr(&clone, "aria-hidden", "false");
        }
    }
    if let (Some(title), Some(d)) = (dom.query(Some(&modal), "#popover-title"), roster.division(&division)) {
        dom.set_text(&title, &d.name);
    }

    dom.set_attr(&modal, "aria-hidden", "false");
    let trap = FocusTrap::activate(dom, &modal);
    logd!("Modal for {division} opened");
    *state = Popover::Modal { division, trigger, trap };
}

/// Document click outside the open inline popover and its trigger closes it.
pub fn dismiss_outside<D: Dom>(dom: &mut D, state: &mut Popover<D::Node>, target: &D::Node) {
    let Popover::Inline { division, trigger } = &*state else {
        return;
    };
    let Some(pop) = dom.by_id(&popover_id(division)) else {
        return;
    };
    if dom.contains(&pop, target) || dom.contains(trigger, target) {
        return;
    }
    close(dom, state);
}
