//! Portfolio showcase state: tabs, swipe navigation and "See More" toggles.

use serde::{Deserialize, Serialize};

/// Viewport width below which the compact layout is used.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShowcaseTab {
    #[default]
    Projects,
    Certificates,
    TechStack,
}

impl ShowcaseTab {
    pub const ALL: [ShowcaseTab; 3] = [
        ShowcaseTab::Projects,
        ShowcaseTab::Certificates,
        ShowcaseTab::TechStack,
    ];

    pub fn index(&self) -> usize {
        match self {
            ShowcaseTab::Projects => 0,
            ShowcaseTab::Certificates => 1,
            ShowcaseTab::TechStack => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShowcaseTab::Projects => "Projects",
            ShowcaseTab::Certificates => "Certificates",
            ShowcaseTab::TechStack => "Tech Stack",
        }
    }

    /// DOM id of the tab button; the panel is labelled by it.
    pub fn dom_id(&self) -> String {
        format!("full-width-tab-{}", self.index())
    }

    pub fn panel_id(&self) -> String {
        format!("full-width-tabpanel-{}", self.index())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// The three lists that can be expanded independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowcaseCollection {
    Projects,
    Certificates,
    TechStacks,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Viewport {
    Mobile,
    #[default]
    Desktop,
}

impl Viewport {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ShowcaseState {
    tab: ShowcaseTab,
    viewport: Viewport,
    show_all_projects: bool,
    show_all_certificates: bool,
    show_all_tech_stacks: bool,
}

impl ShowcaseState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn tab(&self) -> ShowcaseTab {
        self.tab
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn select(&mut self, tab: ShowcaseTab) {
        self.tab = tab;
    }

    /// Swiping left moves to the next tab, right to the previous one.
    /// Stops at either end.
    pub fn swipe(&mut self, direction: SwipeDirection) -> ShowcaseTab {
        let index = self.tab.index();
        let next = match direction {
            SwipeDirection::Left => index + 1,
            SwipeDirection::Right => index.saturating_sub(1),
        };
        if let Some(tab) = ShowcaseTab::from_index(next) {
            self.tab = tab;
        }
        self.tab
    }

    /// Number of entries shown before "See More".
    pub fn initial_count(&self, collection: ShowcaseCollection) -> usize {
        match (collection, self.viewport) {
            (ShowcaseCollection::TechStacks, Viewport::Mobile) => 6,
            (ShowcaseCollection::TechStacks, Viewport::Desktop) => 12,
            (_, Viewport::Mobile) => 4,
            (_, Viewport::Desktop) => 6,
        }
    }

    pub fn is_expanded(&self, collection: ShowcaseCollection) -> bool {
        match collection {
            ShowcaseCollection::Projects => self.show_all_projects,
            ShowcaseCollection::Certificates => self.show_all_certificates,
            ShowcaseCollection::TechStacks => self.show_all_tech_stacks,
        }
    }

    pub fn toggle_expanded(&mut self, collection: ShowcaseCollection) -> bool {
        let flag = match collection {
            ShowcaseCollection::Projects => &mut self.show_all_projects,
            ShowcaseCollection::Certificates => &mut self.show_all_certificates,
            ShowcaseCollection::TechStacks => &mut self.show_all_tech_stacks,
        };
        *flag = !*flag;
        *flag
    }

    /// The part of `items` to render for `collection`.
    pub fn visible<'a, T>(&self, collection: ShowcaseCollection, items: &'a [T]) -> &'a [T] {
        if self.is_expanded(collection) {
            items
        } else {
            &items[..items.len().min(self.initial_count(collection))]
        }
    }

    /// Whether the "See More" / "See Less" toggle is shown.
    pub fn has_more(&self, collection: ShowcaseCollection, total: usize) -> bool {
        total > self.initial_count(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_is_clamped() {
        let mut state = ShowcaseState::default();
        assert_eq!(state.swipe(SwipeDirection::Right), ShowcaseTab::Projects);
        assert_eq!(state.swipe(SwipeDirection::Left), ShowcaseTab::Certificates);
        assert_eq!(state.swipe(SwipeDirection::Left), ShowcaseTab::TechStack);
        assert_eq!(state.swipe(SwipeDirection::Left), ShowcaseTab::TechStack);
        assert_eq!(state.swipe(SwipeDirection::Right), ShowcaseTab::Certificates);
    }

    #[test]
    fn initial_counts_depend_on_viewport() {
        let mobile = ShowcaseState::new(Viewport::from_width(500.0));
        let desktop = ShowcaseState::new(Viewport::from_width(768.0));

        assert_eq!(mobile.initial_count(ShowcaseCollection::Projects), 4);
        assert_eq!(mobile.initial_count(ShowcaseCollection::TechStacks), 6);
        assert_eq!(desktop.initial_count(ShowcaseCollection::Certificates), 6);
        assert_eq!(desktop.initial_count(ShowcaseCollection::TechStacks), 12);
    }

    #[test]
    fn visible_prefix_and_expansion() {
        let mut state = ShowcaseState::new(Viewport::Desktop);
        let items: Vec<u32> = (0..10).collect();

        assert_eq!(state.visible(ShowcaseCollection::Projects, &items).len(), 6);
        assert!(state.has_more(ShowcaseCollection::Projects, items.len()));

        assert!(state.toggle_expanded(ShowcaseCollection::Projects));
        assert_eq!(state.visible(ShowcaseCollection::Projects, &items).len(), 10);
        // Other collections are unaffected.
        assert_eq!(state.visible(ShowcaseCollection::Certificates, &items).len(), 6);
    }

    #[test]
    fn short_lists_are_shown_whole() {
        let state = ShowcaseState::new(Viewport::Mobile);
        let items = ["a", "b"];
        assert_eq!(state.visible(ShowcaseCollection::Certificates, &items), &items);
        assert!(!state.has_more(ShowcaseCollection::Certificates, items.len()));
    }

    #[test]
    fn tab_ids() {
        assert_eq!(ShowcaseTab::TechStack.dom_id(), "full-width-tab-2");
        assert_eq!(ShowcaseTab::Projects.panel_id(), "full-width-tabpanel-0");
        assert_eq!(ShowcaseTab::from_index(3), None);
    }
}
