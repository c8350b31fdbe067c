//! Scroll spy: keeps exactly one outline link marked as the reading position.
//!
//! # Module Structure
//!
//! - `observer` - band geometry, layout lookup, `IntersectionObserver`
//! - `ScrollSpy` - single-active selection over observer batches
//! - `mark_active` - reflects the selection onto the outline list

mod observer;

pub use observer::{Band, IntersectionEntry, IntersectionObserver, Layout, Subscription, Viewport};

use crate::node::Element;
use crate::outline::{Outline, HEADING_ID_ATTR, TOC_LINK_CLASS};

/// Class marking the active outline link.
pub const ACTIVE_CLASS: &str = "active";

// =============================================================================
// ScrollSpy
// =============================================================================

/// Active-heading tracker for one rendered document.
#[derive(Debug)]
pub struct ScrollSpy {
    observer: IntersectionObserver,
    active: Option<String>,
}

impl ScrollSpy {
    /// Observe every heading of `outline`, in document order.
    pub fn attach(outline: &Outline, band: Band) -> Self {
        let mut observer = IntersectionObserver::new(band);
        for id in outline.ids() {
            observer.observe(id);
        }
        tracing::debug!(targets = observer.targets().len(), "scroll spy attached");
        Self {
            observer,
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn targets(&self) -> &[String] {
        self.observer.targets()
    }

    pub fn subscription(&self) -> Subscription {
        self.observer.subscription()
    }

    /// Process a scroll; returns the newly active heading when it changed.
    ///
    /// At the top of the page the first heading is active. Otherwise the
    /// first heading inside the band wins; with none inside, the previous
    /// selection stays.
    pub fn on_scroll<L: Layout>(&mut self, viewport: Viewport, layout: &L) -> Option<&str> {
        if self.is_disposed() {
            return None;
        }
        let entries = self.observer.update(viewport, layout);

        let candidate = if viewport.at_top() {
            self.observer.targets().first().map(String::as_str)
        } else if entries.is_empty() {
            None
        } else {
            self.observer.intersecting().next()
        };

        match candidate {
            Some(id) if self.active.as_deref() != Some(id) => {
                tracing::debug!(heading = id, "active heading changed");
                self.active = Some(id.to_string());
                self.active.as_deref()
            }
            _ => None,
        }
    }

    /// Activate a heading from an outline click; returns the scroll target.
    pub fn select(&mut self, id: &str) -> Option<&str> {
        if self.is_disposed() || !self.observer.targets().iter().any(|t| t == id) {
            return None;
        }
        self.active = Some(id.to_string());
        self.active.as_deref()
    }

    pub fn dispose(&self) {
        self.observer.disconnect();
    }

    pub fn is_disposed(&self) -> bool {
        self.observer.is_disconnected()
    }
}

/// Set `active` on the outline link for `active` and clear it everywhere else.
pub fn mark_active(toc: &mut Element, active: Option<&str>) {
    toc.for_each_element_mut(&mut |elem: &mut Element| {
        if !elem.has_class(TOC_LINK_CLASS) {
            return;
        }
        let matches = active.is_some_and(|id| elem.get_attr(HEADING_ID_ATTR) == Some(id));
        if matches {
            elem.add_class(ACTIVE_CLASS);
        } else {
            elem.remove_class(ACTIVE_CLASS);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::outline::OutlineNode;
    use rustc_hash::FxHashMap;

    fn outline() -> Outline {
        let mut intro = OutlineNode::leaf(1, "Intro", "intro");
        intro.children.push(OutlineNode::leaf(2, "Setup", "setup"));
        Outline::Forest(vec![intro, OutlineNode::leaf(1, "Next", "next")])
    }

    fn page() -> FxHashMap<String, f64> {
        [("intro", 0.0), ("setup", 900.0), ("next", 1000.0)]
            .into_iter()
            .map(|(id, y)| (id.to_string(), y))
            .collect()
    }

    #[test]
    fn test_top_of_page_activates_first() {
        let mut spy = ScrollSpy::attach(&outline(), Band::default());
        assert_eq!(spy.targets(), ["intro", "setup", "next"]);
        assert_eq!(spy.on_scroll(Viewport::new(0.0, 1000.0), &page()), Some("intro"));
        assert_eq!(spy.active(), Some("intro"));
    }

    #[test]
    fn test_no_headings_nothing_active_at_top() {
        let mut spy = ScrollSpy::attach(&Outline::Empty, Band::default());
        assert!(spy.targets().is_empty());
        assert_eq!(spy.on_scroll(Viewport::new(0.0, 1000.0), &page()), None);
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn test_first_intersecting_wins() {
        let mut spy = ScrollSpy::attach(&outline(), Band::default());
        // band is [1000, 1600): setup (900) is out, next (1000) is in
        assert_eq!(spy.on_scroll(Viewport::new(800.0, 1000.0), &page()), Some("next"));

        // band is [740, 1160): setup and next both inside
        assert_eq!(spy.on_scroll(Viewport::new(600.0, 700.0), &page()), Some("setup"));
        assert_eq!(spy.active(), Some("setup"));
    }

    #[test]
    fn test_nothing_intersecting_keeps_previous() {
        let mut spy = ScrollSpy::attach(&outline(), Band::default());
        spy.on_scroll(Viewport::new(0.0, 1000.0), &page());
        assert_eq!(spy.on_scroll(Viewport::new(5000.0, 1000.0), &page()), None);
        assert_eq!(spy.active(), Some("intro"));
    }

    #[test]
    fn test_select() {
        let mut spy = ScrollSpy::attach(&outline(), Band::default());
        assert_eq!(spy.select("setup"), Some("setup"));
        assert_eq!(spy.select("missing"), None);
        assert_eq!(spy.active(), Some("setup"));
    }

    #[test]
    fn test_disposed_spy_is_silent() {
        let mut spy = ScrollSpy::attach(&outline(), Band::default());
        spy.dispose();
        assert!(spy.is_disposed());
        assert_eq!(spy.on_scroll(Viewport::new(0.0, 1000.0), &page()), None);
        assert_eq!(spy.select("intro"), None);
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn test_mark_active_is_exclusive() {
        let mut toc = Element::new("ul")
            .children(outline().to_list_items().into_iter().filter_map(Node::into_element));

        mark_active(&mut toc, Some("setup"));
        let mut active = Vec::new();
        toc.for_each_element(&mut |e: &Element| {
            if e.has_class(ACTIVE_CLASS) {
                active.extend(e.get_attr(HEADING_ID_ATTR).map(str::to_string));
            }
        });
        assert_eq!(active, vec!["setup"]);

        mark_active(&mut toc, None);
        assert!(toc.find(|e| e.has_class(ACTIVE_CLASS)).is_none());
    }
}
