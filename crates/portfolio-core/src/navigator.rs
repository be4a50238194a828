//! Section-scroll navigator.
//!
//! Keeps the highlighted nav link in step with the window scroll position and
//! drives smooth scrolling when a link is clicked. The navigator never touches
//! the document directly: geometry comes through [`SectionLocator`], scrolling
//! goes out through [`ScrollHost`], and the page-wide scroll suppression used
//! while the mobile menu is open goes through [`ScrollLock`].
//!
//! ## Activation rule
//!
//! Each section's top is shifted up by a lookahead bias
//! ([`ACTIVATION_LOOKAHEAD`]) so a link lights up slightly before its section
//! reaches the top of the viewport. A section is a candidate when
//! `scroll_y ∈ [top - lookahead, top - lookahead + height)`. With no candidate
//! the previous active section is kept.
//!
//! ## Permissiveness
//!
//! Nothing here returns an error once constructed. Sections that are not
//! rendered yet are skipped, unknown ids are no-ops. The outcome enums exist
//! so callers and tests can see which path was taken.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Scroll offset above which the nav bar switches to its blurred background.
pub const SCROLLED_THRESHOLD: f64 = 20.0;

/// How far ahead of the viewport top a section becomes active, in pixels.
pub const ACTIVATION_LOOKAHEAD: f64 = 550.0;

/// Space left above a section after a programmatic scroll (fixed header).
pub const HEADER_CLEARANCE: f64 = 100.0;

/// A single entry of the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Element id of the section this item points at
    pub id: String,
    /// Text shown in the nav bar
    pub label: String,
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// In-page anchor for this item (`#Home`).
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

/// The four sections of the landing page, in page order.
pub fn default_nav_items() -> Vec<NavItem> {
    ["Home", "About", "Portofolio", "Contact"]
        .into_iter()
        .map(|name| NavItem::new(name, name))
        .collect()
}

/// Raw document geometry of a rendered section.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    /// Document-relative top (`offsetTop`)
    pub top: f64,
    /// Rendered height (`offsetHeight`)
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Geometry of a section as seen by the activation rule.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionGeometry {
    pub id: String,
    /// Document top minus the lookahead bias
    pub top_offset: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(id: impl Into<String>, bounds: SectionBounds, lookahead: f64) -> Self {
        Self {
            id: id.into(),
            top_offset: bounds.top - lookahead,
            height: bounds.height,
        }
    }

    /// Whether `scroll_y` falls inside `[top_offset, top_offset + height)`.
    pub fn contains(&self, scroll_y: f64) -> bool {
        span_contains(self.top_offset, self.height, scroll_y)
    }
}

fn span_contains(top: f64, height: f64, y: f64) -> bool {
    y >= top && y < top + height
}

/// Read access to the rendered document.
///
/// Returns `None` when no element carries the given id, which is normal
/// before the page has finished rendering.
pub trait SectionLocator {
    fn locate(&self, id: &str) -> Option<SectionBounds>;
}

impl SectionLocator for HashMap<String, SectionBounds> {
    fn locate(&self, id: &str) -> Option<SectionBounds> {
        self.get(id).copied()
    }
}

impl<F> SectionLocator for F
where
    F: Fn(&str) -> Option<SectionBounds>,
{
    fn locate(&self, id: &str) -> Option<SectionBounds> {
        self(id)
    }
}

/// How a programmatic scroll should move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

impl ScrollBehavior {
    /// Value of the DOM `ScrollToOptions.behavior` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Instant => "instant",
        }
    }
}

/// The viewport's scroll-to-position primitive.
pub trait ScrollHost {
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);
}

impl<T: ScrollHost + ?Sized> ScrollHost for &T {
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        (**self).scroll_to(top, behavior)
    }
}

/// Page-wide scroll suppression.
///
/// This is global display state that belongs to the host document. The
/// navigator is its only writer while the menu is open and always releases it
/// when dropped.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

impl<T: ScrollLock + ?Sized> ScrollLock for &T {
    fn lock(&self) {
        (**self).lock()
    }

    fn unlock(&self) {
        (**self).unlock()
    }
}

/// Which candidate wins when section ranges overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// First candidate in nav item order
    #[default]
    FirstDeclared,
    /// Candidate whose adjusted top is furthest down the page; ties go to the
    /// earlier nav item
    LatestStarted,
}

/// Mutable navigator state, owned by one nav bar instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigatorState {
    /// Always one of the nav item ids
    pub active_section_id: String,
    pub is_menu_open: bool,
    pub is_scrolled: bool,
}

/// Result of a scroll evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// A section matched and is now active
    Activated(String),
    /// No section matched; the previous active id was kept
    Retained,
}

/// Result of a navigation request.
#[derive(Clone, Debug, PartialEq)]
pub enum NavigateOutcome {
    /// A scroll to `top` was issued
    Scrolled { top: f64 },
    /// The target is not in the document; only the menu was closed
    SectionMissing,
}

/// Scroll-synchronized navigation controller.
pub struct SectionNavigator<H: ScrollHost, L: ScrollLock> {
    items: Vec<NavItem>,
    state: NavigatorState,
    host: H,
    lock: L,
    lock_held: bool,
    lookahead: f64,
    header_clearance: f64,
    overlap: OverlapPolicy,
}

impl<H: ScrollHost, L: ScrollLock> SectionNavigator<H, L> {
    /// Create a navigator for a fixed, non-empty list of nav items.
    ///
    /// The first item starts out active.
    pub fn new(items: Vec<NavItem>, host: H, lock: L) -> PortfolioResult<Self> {
        let first = items
            .first()
            .map(|item| item.id.clone())
            .ok_or_else(|| PortfolioError::Config("navigator needs at least one nav item".into()))?;

        Ok(Self {
            items,
            state: NavigatorState {
                active_section_id: first,
                is_menu_open: false,
                is_scrolled: false,
            },
            host,
            lock,
            lock_held: false,
            lookahead: ACTIVATION_LOOKAHEAD,
            header_clearance: HEADER_CLEARANCE,
            overlap: OverlapPolicy::default(),
        })
    }

    pub fn with_lookahead(mut self, lookahead: f64) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn with_header_clearance(mut self, clearance: f64) -> Self {
        self.header_clearance = clearance;
        self
    }

    pub fn with_overlap_policy(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn active_section(&self) -> &str {
        &self.state.active_section_id
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.state.active_section_id == id
    }

    pub fn is_menu_open(&self) -> bool {
        self.state.is_menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.state.is_scrolled
    }

    /// Geometry of every nav item whose section is currently rendered.
    pub fn section_geometry<D>(&self, document: &D) -> Vec<SectionGeometry>
    where
        D: SectionLocator + ?Sized,
    {
        self.items
            .iter()
            .filter_map(|item| {
                document
                    .locate(&item.id)
                    .map(|bounds| SectionGeometry::new(item.id.as_str(), bounds, self.lookahead))
            })
            .collect()
    }

    /// Re-derive `is_scrolled` and the active section from a scroll offset.
    pub fn evaluate<D>(&mut self, scroll_y: f64, document: &D) -> Evaluation
    where
        D: SectionLocator + ?Sized,
    {
        self.state.is_scrolled = scroll_y > SCROLLED_THRESHOLD;

        match self.winner(scroll_y, document) {
            Some(index) => {
                let id = self.items[index].id.clone();
                if self.state.active_section_id != id {
                    tracing::trace!(section = %id, scroll_y, "active section changed");
                }
                self.state.active_section_id = id.clone();
                Evaluation::Activated(id)
            }
            None => Evaluation::Retained,
        }
    }

    /// Whether [`evaluate`](Self::evaluate) at `scroll_y` would change the state.
    pub fn needs_update<D>(&self, scroll_y: f64, document: &D) -> bool
    where
        D: SectionLocator + ?Sized,
    {
        if (scroll_y > SCROLLED_THRESHOLD) != self.state.is_scrolled {
            return true;
        }
        self.winner(scroll_y, document)
            .is_some_and(|index| self.items[index].id != self.state.active_section_id)
    }

    fn winner<D>(&self, scroll_y: f64, document: &D) -> Option<usize>
    where
        D: SectionLocator + ?Sized,
    {
        // Runs on every scroll event: walk the items without building geometry.
        let lookahead = self.lookahead;
        let candidates = self.items.iter().enumerate().filter_map(|(index, item)| {
            let bounds = document.locate(&item.id)?;
            let top = bounds.top - lookahead;
            span_contains(top, bounds.height, scroll_y).then_some((index, top))
        });

        match self.overlap {
            OverlapPolicy::FirstDeclared => candidates.map(|(index, _)| index).next(),
            OverlapPolicy::LatestStarted => candidates
                .fold(None, |best: Option<(usize, f64)>, (index, top)| match best {
                    Some((_, best_top)) if top <= best_top => best,
                    _ => Some((index, top)),
                })
                .map(|(index, _)| index),
        }
    }

    /// Smooth-scroll to a section, leaving room for the fixed header.
    ///
    /// The menu is closed whether or not the section exists.
    pub fn navigate_to<D>(&mut self, id: &str, document: &D) -> NavigateOutcome
    where
        D: SectionLocator + ?Sized,
    {
        let outcome = match document.locate(id) {
            Some(bounds) => {
                let top = bounds.top - self.header_clearance;
                self.host.scroll_to(top, ScrollBehavior::Smooth);
                tracing::debug!(section = %id, top, "scrolling to section");
                NavigateOutcome::Scrolled { top }
            }
            None => {
                tracing::debug!(section = %id, "navigation target not rendered");
                NavigateOutcome::SectionMissing
            }
        };
        self.close_menu();
        outcome
    }

    /// Flip the mobile menu. Returns the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        let open = !self.state.is_menu_open;
        self.set_menu_open(open);
        open
    }

    pub fn close_menu(&mut self) {
        self.set_menu_open(false);
    }

    fn set_menu_open(&mut self, open: bool) {
        self.state.is_menu_open = open;
        match (open, self.lock_held) {
            (true, false) => {
                self.lock.lock();
                self.lock_held = true;
            }
            (false, true) => {
                self.lock.unlock();
                self.lock_held = false;
            }
            _ => {}
        }
    }
}

impl<H: ScrollHost, L: ScrollLock> Drop for SectionNavigator<H, L> {
    fn drop(&mut self) {
        if self.lock_held {
            self.lock.unlock();
            self.lock_held = false;
        }
    }
}

impl<H: ScrollHost, L: ScrollLock> fmt::Debug for SectionNavigator<H, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionNavigator")
            .field("items", &self.items)
            .field("state", &self.state)
            .field("lock_held", &self.lock_held)
            .field("overlap", &self.overlap)
            .finish()
    }
}

/// Releases an event subscription exactly once, when dropped or on
/// [`ListenerGuard::release`].
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn release(mut self) {
        self.run();
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    fn run(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingHost {
        scrolls: RefCell<Vec<(f64, ScrollBehavior)>>,
    }

    impl ScrollHost for RecordingHost {
        fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
            self.scrolls.borrow_mut().push((top, behavior));
        }
    }

    #[derive(Default)]
    struct CountingLock {
        locked: Cell<bool>,
        locks: Cell<u32>,
        unlocks: Cell<u32>,
    }

    impl ScrollLock for CountingLock {
        fn lock(&self) {
            self.locked.set(true);
            self.locks.set(self.locks.get() + 1);
        }

        fn unlock(&self) {
            self.locked.set(false);
            self.unlocks.set(self.unlocks.get() + 1);
        }
    }

    fn page() -> HashMap<String, SectionBounds> {
        HashMap::from([
            ("Home".to_string(), SectionBounds::new(0.0, 800.0)),
            ("About".to_string(), SectionBounds::new(800.0, 900.0)),
            ("Portofolio".to_string(), SectionBounds::new(1700.0, 1200.0)),
            ("Contact".to_string(), SectionBounds::new(2900.0, 1000.0)),
        ])
    }

    #[test]
    fn starts_on_first_item() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        let nav = SectionNavigator::new(default_nav_items(), &host, &lock).unwrap();

        assert_eq!(nav.active_section(), "Home");
        assert!(!nav.is_menu_open());
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn rejects_empty_item_list() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        let result = SectionNavigator::new(Vec::new(), &host, &lock);
        assert!(matches!(result, Err(PortfolioError::Config(_))));
    }

    #[test]
    fn scrolled_threshold_is_exclusive() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        let mut nav = SectionNavigator::new(default_nav_items(), &host, &lock).unwrap();
        let doc = page();

        nav.evaluate(20.0, &doc);
        assert!(!nav.is_scrolled());
        nav.evaluate(21.0, &doc);
        assert!(nav.is_scrolled());
        nav.evaluate(0.0, &doc);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn lookahead_activates_section_early() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        let mut nav = SectionNavigator::new(default_nav_items(), &host, &lock).unwrap();
        let doc = page();

        // Home spans [-550, 250); About takes over at 800 - 550.
        assert_eq!(
            nav.evaluate(249.0, &doc),
            Evaluation::Activated("Home".to_string())
        );
        assert_eq!(nav.active_section(), "Home");
        assert_eq!(
            nav.evaluate(250.0, &doc),
            Evaluation::Activated("About".to_string())
        );
    }

    #[test]
    fn needs_update_only_on_state_change() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        let mut nav = SectionNavigator::new(default_nav_items(), &host, &lock).unwrap();
        let doc = page();

        assert!(!nav.needs_update(10.0, &doc));
        assert!(nav.needs_update(100.0, &doc));
        nav.evaluate(100.0, &doc);
        assert!(!nav.needs_update(200.0, &doc));
        assert!(nav.needs_update(300.0, &doc));
        nav.evaluate(300.0, &doc);
        assert!(!nav.needs_update(400.0, &doc));
    }

    #[test]
    fn gap_between_sections_retains_active() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        let mut nav = SectionNavigator::new(default_nav_items(), &host, &lock).unwrap();
        let doc = HashMap::from([
            ("Home".to_string(), SectionBounds::new(0.0, 400.0)),
            ("About".to_string(), SectionBounds::new(1200.0, 600.0)),
        ]);

        // Home covers [-550, -150), About [650, 1250)
        nav.evaluate(700.0, &doc);
        assert_eq!(nav.active_section(), "About");
        assert_eq!(nav.evaluate(300.0, &doc), Evaluation::Retained);
        assert_eq!(nav.active_section(), "About");
    }

    #[test]
    fn missing_sections_are_skipped() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        let mut nav = SectionNavigator::new(default_nav_items(), &host, &lock).unwrap();
        let mut doc = page();
        doc.remove("About");

        assert_eq!(nav.section_geometry(&doc).len(), 3);
        assert_eq!(nav.evaluate(300.0, &doc), Evaluation::Retained);
        assert_eq!(nav.active_section(), "Home");
    }

    #[test]
    fn nothing_rendered_keeps_previous_section() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        let mut nav = SectionNavigator::new(default_nav_items(), &host, &lock).unwrap();
        let empty = |_: &str| -> Option<SectionBounds> { None };

        assert_eq!(nav.evaluate(5000.0, &empty), Evaluation::Retained);
        assert_eq!(nav.active_section(), "Home");
        assert!(nav.is_scrolled());
    }

    #[test]
    fn geometry_subtracts_lookahead() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        let nav = SectionNavigator::new(default_nav_items(), &host, &lock).unwrap();
        let geometry = nav.section_geometry(&page());

        assert_eq!(geometry[0].id, "Home");
        assert_eq!(geometry[0].top_offset, -550.0);
        assert_eq!(geometry[1].top_offset, 250.0);
        assert_eq!(geometry[1].height, 900.0);
    }

    #[test]
    fn overlap_prefers_first_declared_by_default() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        let mut nav = SectionNavigator::new(default_nav_items(), &host, &lock)
            .unwrap()
            .with_lookahead(0.0);
        let doc = |id: &str| match id {
            "Home" => Some(SectionBounds::new(0.0, 500.0)),
            "About" => Some(SectionBounds::new(450.0, 500.0)),
            _ => None,
        };

        assert_eq!(nav.evaluate(470.0, &doc), Evaluation::Activated("Home".into()));
    }

    #[test]
    fn overlap_latest_started_prefers_deeper_section() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        let mut nav = SectionNavigator::new(default_nav_items(), &host, &lock)
            .unwrap()
            .with_lookahead(0.0)
            .with_overlap_policy(OverlapPolicy::LatestStarted);
        let doc = |id: &str| match id {
            "Home" => Some(SectionBounds::new(0.0, 500.0)),
            "About" => Some(SectionBounds::new(450.0, 500.0)),
            _ => None,
        };

        assert_eq!(nav.evaluate(470.0, &doc), Evaluation::Activated("About".into()));
        assert_eq!(nav.evaluate(10.0, &doc), Evaluation::Activated("Home".into()));
    }

    #[test]
    fn navigate_scrolls_below_header_and_closes_menu() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        let mut nav = SectionNavigator::new(default_nav_items(), &host, &lock).unwrap();
        nav.toggle_menu();
        assert!(lock.locked.get());

        let outcome = nav.navigate_to("Portofolio", &page());

        assert_eq!(outcome, NavigateOutcome::Scrolled { top: 1600.0 });
        assert_eq!(
            host.scrolls.borrow().as_slice(),
            &[(1600.0, ScrollBehavior::Smooth)]
        );
        assert!(!nav.is_menu_open());
        assert!(!lock.locked.get());
    }

    #[test]
    fn navigate_to_missing_section_still_closes_menu() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        let mut nav = SectionNavigator::new(default_nav_items(), &host, &lock).unwrap();
        nav.toggle_menu();

        let outcome = nav.navigate_to("Blog", &page());

        assert_eq!(outcome, NavigateOutcome::SectionMissing);
        assert!(host.scrolls.borrow().is_empty());
        assert!(!nav.is_menu_open());
        assert!(!lock.locked.get());
    }

    #[test]
    fn navigate_with_closed_menu_does_not_touch_lock() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        let mut nav = SectionNavigator::new(default_nav_items(), &host, &lock).unwrap();

        nav.navigate_to("About", &page());

        assert_eq!(lock.locks.get(), 0);
        assert_eq!(lock.unlocks.get(), 0);
    }

    #[test]
    fn toggle_twice_restores_state_and_lock() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        let mut nav = SectionNavigator::new(default_nav_items(), &host, &lock).unwrap();

        assert!(nav.toggle_menu());
        assert!(lock.locked.get());
        assert!(!nav.toggle_menu());
        assert!(!lock.locked.get());
        assert_eq!(lock.locks.get(), 1);
        assert_eq!(lock.unlocks.get(), 1);
    }

    #[test]
    fn drop_releases_held_lock() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        {
            let mut nav = SectionNavigator::new(default_nav_items(), &host, &lock).unwrap();
            nav.toggle_menu();
            assert!(lock.locked.get());
        }
        assert!(!lock.locked.get());
        assert_eq!(lock.unlocks.get(), 1);
    }

    #[test]
    fn drop_without_lock_does_not_unlock() {
        let host = RecordingHost::default();
        let lock = CountingLock::default();
        drop(SectionNavigator::new(default_nav_items(), &host, &lock).unwrap());
        assert_eq!(lock.unlocks.get(), 0);
    }

    #[test]
    fn listener_guard_releases_once() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let guard = ListenerGuard::new(move || counter.set(counter.get() + 1));
        assert!(guard.is_active());
        guard.release();
        assert_eq!(count.get(), 1);

        let counter = count.clone();
        drop(ListenerGuard::new(move || counter.set(counter.get() + 1)));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn nav_item_anchor() {
        let items = default_nav_items();
        assert_eq!(items.len(), 4);
        assert_eq!(items[2].anchor(), "#Portofolio");
        assert_eq!(items[3].label, "Contact");
    }
}
