//! Intersection observation over a fixed list of heading targets.

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// =============================================================================
// Geometry
// =============================================================================

/// Observation band, as fractions of the viewport height from its top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Band {
    pub top: f64,
    pub bottom: f64,
}

impl Default for Band {
    fn default() -> Self {
        Self { top: 0.2, bottom: 0.8 }
    }
}

impl Band {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// `0 <= top < bottom <= 1`
    pub fn is_valid(&self) -> bool {
        self.top.is_finite()
            && self.bottom.is_finite()
            && 0.0 <= self.top
            && self.top < self.bottom
            && self.bottom <= 1.0
    }

    /// Absolute `[start, end)` of the band for `viewport`.
    pub fn bounds(&self, viewport: Viewport) -> (f64, f64) {
        (
            viewport.scroll_top + viewport.height * self.top,
            viewport.scroll_top + viewport.height * self.bottom,
        )
    }

    pub fn contains(&self, viewport: Viewport, offset: f64) -> bool {
        let (start, end) = self.bounds(viewport);
        start <= offset && offset < end
    }
}

/// Visible region of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Scroll offset of the viewport's top edge
    pub scroll_top: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_top: f64, height: f64) -> Self {
        Self { scroll_top, height }
    }

    pub fn at_top(&self) -> bool {
        self.scroll_top <= 0.0
    }
}

/// Page layout: document offsets of elements by id.
pub trait Layout {
    /// Offset of the element's top edge, `None` if it is not laid out.
    fn offset_top(&self, id: &str) -> Option<f64>;
}

impl<S: BuildHasher> Layout for HashMap<String, f64, S> {
    fn offset_top(&self, id: &str) -> Option<f64> {
        self.get(id).copied()
    }
}

impl<T: Layout> Layout for &T {
    fn offset_top(&self, id: &str) -> Option<f64> {
        (**self).offset_top(id)
    }
}

// =============================================================================
// Subscription
// =============================================================================

/// Disposable handle on an observer; disposing any clone silences it.
#[derive(Debug, Clone, Default)]
pub struct Subscription {
    disposed: Arc<AtomicBool>,
}

impl Subscription {
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::Release);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}

// =============================================================================
// IntersectionObserver
// =============================================================================

/// A change in one target's intersecting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub target: String,
    pub is_intersecting: bool,
}

/// Tracks which targets lie inside the band.
#[derive(Debug)]
pub struct IntersectionObserver {
    band: Band,
    targets: Vec<String>,
    intersecting: Vec<bool>,
    subscription: Subscription,
}

impl IntersectionObserver {
    pub fn new(band: Band) -> Self {
        Self {
            band,
            targets: Vec::new(),
            intersecting: Vec::new(),
            subscription: Subscription::default(),
        }
    }

    /// Start observing `target`; observing a target twice is a no-op.
    pub fn observe(&mut self, target: impl Into<String>) {
        let target = target.into();
        if !self.targets.contains(&target) {
            self.targets.push(target);
            self.intersecting.push(false);
        }
    }

    pub fn band(&self) -> Band {
        self.band
    }

    /// Observed targets, in observation order.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn is_intersecting(&self, target: &str) -> bool {
        self.targets
            .iter()
            .position(|t| t == target)
            .is_some_and(|i| self.intersecting[i])
    }

    /// Targets currently inside the band, in observation order.
    pub fn intersecting(&self) -> impl Iterator<Item = &str> {
        self.targets
            .iter()
            .zip(&self.intersecting)
            .filter(|(_, inside)| **inside)
            .map(|(t, _)| t.as_str())
    }

    /// Re-evaluate every target and report the ones whose state changed.
    ///
    /// Targets missing from `layout` count as outside the band. A disposed
    /// observer reports nothing and keeps its last state.
    pub fn update<L: Layout>(&mut self, viewport: Viewport, layout: &L) -> Vec<IntersectionEntry> {
        if self.subscription.is_disposed() {
            return Vec::new();
        }

        let mut entries = Vec::new();
        for (target, was) in self.targets.iter().zip(self.intersecting.iter_mut()) {
            let inside = layout
                .offset_top(target)
                .is_some_and(|offset| self.band.contains(viewport, offset));
            if inside != *was {
                *was = inside;
                entries.push(IntersectionEntry {
                    target: target.clone(),
                    is_intersecting: inside,
                });
            }
        }
        entries
    }

    /// Handle for disposing this observer.
    pub fn subscription(&self) -> Subscription {
        self.subscription.clone()
    }

    pub fn disconnect(&self) {
        self.subscription.dispose();
    }

    pub fn is_disconnected(&self) -> bool {
        self.subscription.is_disposed()
    }
}
