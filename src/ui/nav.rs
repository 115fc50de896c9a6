// src/ui/nav.rs
use super::dom::Dom;

/// Page identity (`<body data-page>`) → nav entry to highlight.
pub fn nav_target(page: Option<&str>) -> Option<&str> {
    match page {
        Some("fighter") => Some("divisions"),
        other => other,
    }
}

/// Mark the `.primary-nav [data-nav]` link for the current page as active.
pub fn highlight<D: Dom>(dom: &mut D) {
    let page = dom.body().and_then(|b| dom.attr(&b, "data-page"));
    let target = nav_target(page.as_deref()).map(str::to_string);

    for link in dom.query_all(None, ".primary-nav [data-nav]") {
        let on = dom.attr(&link, "data-nav").is_some_and(|v| Some(&v) == target.as_ref());
        dom.toggle_class(&link, "active", on);
    }
}

/// Mobile nav disclosure: the `.nav-toggle` button and the `.primary-nav` panel.
#[derive(Clone, Debug, PartialEq)]
pub struct NavToggle<N> {
    pub toggle: N,
    pub panel: N,
}

impl<N: Clone + PartialEq> NavToggle<N> {
    pub fn bind<D: Dom<Node = N>>(dom: &D) -> Option<Self> {
        Some(Self {
            toggle: dom.query(None, ".nav-toggle")?,
            panel: dom.query(None, ".primary-nav")?,
        })
    }

    pub fn is_open<D: Dom<Node = N>>(&self, dom: &D) -> bool {
        dom.attr(&self.panel, "data-open").as_deref() == Some("true")
    }

    /// Flip the expanded state. Opening focuses the first nav link,
    /// closing hands focus back to the toggle.
    pub fn toggle<D: Dom<Node = N>>(&self, dom: &mut D) {
        let expanded = dom.attr(&self.toggle, "aria-expanded").as_deref() == Some("true");
        let open = !expanded;
        dom.set_attr(&self.toggle, "aria-expanded", if open { "true" } else { "false" });
        dom.set_attr(&self.panel, "data-open", if open { "true" } else { "false" });

        if open {
            if let Some(first) = dom.query(Some(&self.panel), "a") {
                dom.focus(&first);
            }
        } else {
            dom.focus(&self.toggle);
        }
        logd!("Nav {}", if open { "opened" } else { "closed" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fighter_pages_highlight_divisions() {
        assert_eq!(nav_target(Some("fighter")), Some("divisions"));
        assert_eq!(nav_target(Some("about")), Some("about"));
        assert_eq!(nav_target(None), None);
    }
}
