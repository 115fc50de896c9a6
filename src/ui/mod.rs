// src/ui/mod.rs
// Browser-side controller. Owns all interactive state and exposes one entry
// point per document event; each handler runs to completion against a `Dom`.

pub mod dom;
pub mod featured;
pub mod filters;
pub mod focus_trap;
pub mod memory;
pub mod nav;
pub mod popover;

use dom::Dom;
use featured::PickIndex;
use filters::DivisionFilters;
use nav::NavToggle;
use popover::Popover;

use crate::filter::FilterSummary;
use crate::roster::Roster;

/// What the host should do with the native event afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub prevent_default: bool,
}

impl EventOutcome {
    fn prevent() -> Self {
        Self { prevent_default: true }
    }
}

pub struct Controller<'r, N> {
    roster: &'r Roster,
    popover: Popover<N>,
    nav: Option<NavToggle<N>>,
    filters: Option<DivisionFilters<N>>,
    featured: Option<String>,
}

impl<'r, N: Clone + PartialEq> Controller<'r, N> {
    /// Wire every feature the page has. Missing elements switch the
    /// corresponding feature off; nothing here fails.
    pub fn attach<D: Dom<Node = N>>(dom: &mut D, roster: &'r Roster, rng: &mut dyn PickIndex) -> Self {
        nav::highlight(dom);
        let nav = NavToggle::bind(&*dom);
        let featured = featured::hydrate(dom, roster, rng);
        let quick_browse = popover::render_list(dom, roster);

        let page = dom.body().and_then(|b| dom.attr(&b, "data-page"));
        let filters = match page.as_deref() {
            Some("divisions") => DivisionFilters::bind(&*dom),
            _ => None,
        };
        if let Some(f) = &filters {
            f.render(dom, roster);
        }

        logf!(
            "Attached: page={} nav={} featured={} quick_browse={} filters={}",
            page.as_deref().unwrap_or("-"),
            nav.is_some(),
            featured.as_deref().unwrap_or("-"),
            quick_browse,
            filters.is_some()
        );

        Self { roster, popover: Popover::Closed, nav, filters, featured }
    }

    pub fn popover(&self) -> &Popover<N> {
        &self.popover
    }

    /// Slug shown in the featured strip, if the page has one.
    pub fn featured(&self) -> Option<&str> {
        self.featured.as_deref()
    }

    pub fn has_filters(&self) -> bool {
        self.filters.is_some()
    }

    /// Re-render the division grid from the current form state.
    pub fn refresh_filters<D: Dom<Node = N>>(&self, dom: &mut D) -> Option<FilterSummary> {
        self.filters.as_ref().map(|f| f.render(dom, self.roster))
    }

    pub fn on_click<D: Dom<Node = N>>(&mut self, dom: &mut D, target: &N) -> EventOutcome {
        let trigger = dom.closest(target, "[data-division-id]");
        if trigger.is_none() {
            popover::dismiss_outside(dom, &mut self.popover, target);
        }

        if let Some(nav) = &self.nav {
            if dom.contains(&nav.toggle, target) {
                nav.toggle(dom);
                return EventOutcome::default();
            }
        }

        if self.popover.is_modal() && dom.closest(target, "[data-action='close-popover']").is_some() {
            popover::close(dom, &mut self.popover);
            return EventOutcome::default();
        }

        if let Some(f) = &self.filters {
            if dom.closest(target, "[data-action='reset-filters']").is_some() {
                f.reset(dom, self.roster);
                return EventOutcome::default();
            }
        }

        if let Some(trigger) = trigger {
            if let Some(division) = dom.attr(&trigger, "data-division-id") {
                popover::on_trigger(dom, self.roster, &mut self.popover, trigger, division);
            }
        }
        EventOutcome::default()
    }

    pub fn on_keydown<D: Dom<Node = N>>(&mut self, dom: &mut D, key: &str, shift: bool) -> EventOutcome {
        match key {
            "Escape" => {
                if let Some(nav) = &self.nav {
                    if nav.is_open(&*dom) {
                        nav.toggle(dom);
                    }
                }
                popover::close(dom, &mut self.popover);
                EventOutcome::default()
            }
            "Tab" => match self.popover.trap() {
                Some(trap) if trap.on_tab(dom, shift) => EventOutcome::prevent(),
                _ => EventOutcome::default(),
            },
            _ => EventOutcome::default(),
        }
    }

    /// Any edit inside the filter form re-renders the grid.
    pub fn on_input<D: Dom<Node = N>>(&mut self, dom: &mut D, target: &N) -> EventOutcome {
        if let Some(f) = &self.filters {
            if dom.contains(&f.form, target) {
                f.render(dom, self.roster);
            }
        }
        EventOutcome::default()
    }

    /// The filter form never navigates.
    pub fn on_submit<D: Dom<Node = N>>(&mut self, dom: &mut D, target: &N) -> EventOutcome {
        match &self.filters {
            Some(f) if dom.contains(&f.form, target) => EventOutcome::prevent(),
            _ => EventOutcome::default(),
        }
    }
}
