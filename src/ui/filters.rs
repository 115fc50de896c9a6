// src/ui/filters.rs
use super::dom::Dom;
use crate::filter::{FilterQuery, FilterSummary, apply};
use crate::render::division_cards;
use crate::roster::Roster;

/// Elements of the divisions-page filter UI. Form and grid are required;
/// the count line and empty-state block are optional.
#[derive(Clone, Debug, PartialEq)]
pub struct DivisionFilters<N> {
    pub form: N,
    pub grid: N,
    pub count: Option<N>,
    pub empty: Option<N>,
}

impl<N: Clone + PartialEq> DivisionFilters<N> {
    pub fn bind<D: Dom<Node = N>>(dom: &D) -> Option<Self> {
        Some(Self {
            form: dom.by_id("division-filters")?,
            grid: dom.by_id("division-grid")?,
            count: dom.by_id("division-count"),
            empty: dom.by_id("empty-state"),
        })
    }

    /// What the form would submit for `name`: the checked member of a radio
    /// group (nothing if none is checked), otherwise the control's value.
    fn field<D: Dom<Node = N>>(&self, dom: &D, name: &str) -> Option<String> {
        let controls = dom.query_all(Some(&self.form), &format!("[name='{name}']"));
        let first = controls.first()?;
        if dom.attr(first, "type").as_deref() == Some("radio") {
            let on = controls.iter().find(|c| dom.checked(c))?;
            return dom.value(on);
        }
        dom.value(first)
    }

    /// Current form state as a query.
    pub fn read<D: Dom<Node = N>>(&self, dom: &D) -> FilterQuery {
        FilterQuery::from_fields(
            self.field(dom, "category").as_deref(),
            self.field(dom, "weight").as_deref(),
            self.field(dom, "search").as_deref(),
        )
    }

    /// Re-run the filter and replace the grid wholesale.
    pub fn render<D: Dom<Node = N>>(&self, dom: &mut D, roster: &Roster) -> FilterSummary {
        let query = self.read(&*dom);
        let shown = apply(roster, &query);
        let summary = FilterSummary::of(&shown);

        dom.set_inner_html(&self.grid, "");
        if let Some(empty) = &self.empty {
            dom.set_hidden(empty, !summary.is_empty());
        }
        if !summary.is_empty() {
            dom.set_inner_html(&self.grid, &division_cards(&shown));
        }
        if let Some(count) = &self.count {
            dom.set_text(count, &summary.label());
        }

        logd!("Filter {:?} → {}", query, summary.label());
        summary
    }

    pub fn reset<D: Dom<Node = N>>(&self, dom: &mut D, roster: &Roster) -> FilterSummary {
        dom.reset_form(&self.form);
        self.render(dom, roster)
    }
}
