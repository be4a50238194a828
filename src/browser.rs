//! Webview bridge for the section navigator.
//!
//! The navigator in `portfolio-core` only sees three seams. This module fills
//! them from inside the webview:
//! - [`PageSnapshot`]: scroll offset plus section geometry, streamed from a
//!   JS scroll/resize listener
//! - [`WindowScroll`]: `window.scrollTo`
//! - [`BodyScrollLock`]: `document.body.style.overflow`
//!
//! The listener is installed once per landing page and removed through a
//! [`ListenerGuard`] when the page unmounts.

use std::collections::HashMap;

use dioxus::prelude::*;
use portfolio_core::{
    ListenerGuard, NavItem, NavigatorState, ScrollBehavior, ScrollHost, ScrollLock,
    SectionBounds, SectionLocator, SectionNavigator, Viewport,
};
use serde::Deserialize;

/// Installs the listener. Receives the section ids, then sends one snapshot
/// per scroll, resize or layout change.
const SCROLL_BRIDGE: &str = r#"
const ids = await dioxus.recv();
const snapshot = () => {
  const sections = {};
  for (const id of ids) {
    const el = document.getElementById(id);
    if (el) sections[id] = { top: el.offsetTop, height: el.offsetHeight };
  }
  dioxus.send({ scroll_y: window.scrollY, viewport_width: window.innerWidth, sections });
};
const observer = new ResizeObserver(snapshot);
observer.observe(document.body);
window.addEventListener("scroll", snapshot, { passive: true });
window.addEventListener("resize", snapshot);
window.__portfolioReleaseScroll = () => {
  window.removeEventListener("scroll", snapshot);
  window.removeEventListener("resize", snapshot);
  observer.disconnect();
  delete window.__portfolioReleaseScroll;
};
snapshot();
"#;

/// Stops any smooth scroll still in flight, then detaches the listeners.
const RELEASE_BRIDGE: &str = r#"
window.scrollTo({ top: window.scrollY, behavior: "instant" });
if (window.__portfolioReleaseScroll) { window.__portfolioReleaseScroll(); }
"#;

/// What the page looked like at the last scroll event.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PageSnapshot {
    pub scroll_y: f64,
    pub viewport_width: f64,
    /// Only sections that were rendered at the time
    #[serde(default)]
    pub sections: HashMap<String, SectionBounds>,
}

impl PageSnapshot {
    pub fn viewport(&self) -> Viewport {
        // Before the first snapshot arrives the width is unknown
        if self.viewport_width <= 0.0 {
            return Viewport::Desktop;
        }
        Viewport::from_width(self.viewport_width)
    }
}

impl SectionLocator for PageSnapshot {
    fn locate(&self, id: &str) -> Option<SectionBounds> {
        self.sections.locate(id)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

impl ScrollHost for WindowScroll {
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let _ = document::eval(&scroll_script(top, behavior));
    }
}

fn scroll_script(top: f64, behavior: ScrollBehavior) -> String {
    format!(
        "window.scrollTo({{ top: {}, behavior: \"{}\" }});",
        top,
        behavior.as_str()
    )
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        let _ = document::eval("document.body.style.overflow = \"hidden\";");
    }

    fn unlock(&self) {
        let _ = document::eval("document.body.style.overflow = \"\";");
    }
}

pub type PageNavigator = SectionNavigator<WindowScroll, BodyScrollLock>;

/// Copyable access to the landing page's navigator.
#[derive(Clone, Copy)]
pub struct NavigatorHandle {
    navigator: Signal<Option<PageNavigator>>,
    page: Signal<PageSnapshot>,
}

impl NavigatorHandle {
    pub fn items(&self) -> Vec<NavItem> {
        self.navigator
            .read()
            .as_ref()
            .map(|nav| nav.items().to_vec())
            .unwrap_or_default()
    }

    pub fn state(&self) -> Option<NavigatorState> {
        self.navigator.read().as_ref().map(|nav| nav.state().clone())
    }

    pub fn viewport(&self) -> Viewport {
        self.page.read().viewport()
    }

    /// Scroll to a section and close the menu.
    pub fn navigate(&mut self, id: &str) {
        let page = self.page.peek();
        if let Some(nav) = self.navigator.write().as_mut() {
            nav.navigate_to(id, &*page);
        }
    }

    pub fn toggle_menu(&mut self) {
        if let Some(nav) = self.navigator.write().as_mut() {
            nav.toggle_menu();
        }
    }

    pub fn close_menu(&mut self) {
        if let Some(nav) = self.navigator.write().as_mut() {
            nav.close_menu();
        }
    }
}

/// Create the navigator for the current page and start streaming geometry
/// into it. Provides the handle to child components as context.
pub fn use_section_navigator(items: Vec<NavItem>) -> NavigatorHandle {
    let navigator = use_signal(move || {
        let ids: Vec<String> = items.iter().map(|item| item.id.clone()).collect();
        tracing::debug!(sections = ?ids, "Creating section navigator");
        match SectionNavigator::new(items, WindowScroll, BodyScrollLock) {
            Ok(nav) => Some(nav),
            Err(e) => {
                tracing::error!("Failed to create section navigator: {}", e);
                None
            }
        }
    });
    let mut page = use_signal(PageSnapshot::default);
    let mut listener: Signal<Option<ListenerGuard>> = use_signal(|| None);

    // Start the scroll listener on mount
    use_hook(move || {
        let ids: Vec<String> = navigator
            .peek()
            .as_ref()
            .map(|nav| nav.items().iter().map(|item| item.id.clone()).collect())
            .unwrap_or_default();

        spawn(async move {
            let mut bridge = document::eval(SCROLL_BRIDGE);
            if let Err(e) = bridge.send(ids) {
                tracing::warn!("Failed to start scroll listener: {:?}", e);
                return;
            }
            listener.set(Some(ListenerGuard::new(|| {
                let _ = document::eval(RELEASE_BRIDGE);
            })));

            loop {
                match bridge.recv::<PageSnapshot>().await {
                    Ok(snapshot) => page.set(snapshot),
                    Err(e) => {
                        tracing::debug!("Scroll listener closed: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    // Re-evaluate the active section; only write (and re-render) on change
    let mut nav_signal = navigator;
    use_effect(move || {
        let snapshot = page.read();
        let stale = nav_signal
            .peek()
            .as_ref()
            .is_some_and(|nav| nav.needs_update(snapshot.scroll_y, &*snapshot));
        if !stale {
            return;
        }
        if let Some(nav) = nav_signal.write().as_mut() {
            nav.evaluate(snapshot.scroll_y, &*snapshot);
        }
    });

    // Tear down: remove the listener and release the body lock
    use_drop(move || {
        if let Some(guard) = listener.write().take() {
            guard.release();
        }
        if let Some(nav) = nav_signal.write().as_mut() {
            nav.close_menu();
        }
    });

    let handle = NavigatorHandle { navigator, page };
    use_context_provider(|| handle)
}

/// Navigator of the enclosing page.
pub fn use_page_navigator() -> NavigatorHandle {
    use_context::<NavigatorHandle>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_decodes_listener_payload() {
        let raw = r#"{
            "scroll_y": 470.5,
            "viewport_width": 390,
            "sections": { "Home": { "top": 0, "height": 900 } }
        }"#;
        let snapshot: PageSnapshot = serde_json::from_str(raw).unwrap();

        assert_eq!(snapshot.scroll_y, 470.5);
        assert_eq!(snapshot.viewport(), Viewport::Mobile);
        assert_eq!(snapshot.locate("Home"), Some(SectionBounds::new(0.0, 900.0)));
        assert_eq!(snapshot.locate("About"), None);
    }

    #[test]
    fn unknown_width_counts_as_desktop() {
        assert_eq!(PageSnapshot::default().viewport(), Viewport::Desktop);
    }

    #[test]
    fn release_script_stops_pending_scroll_first() {
        let stop = RELEASE_BRIDGE
            .find(r#"window.scrollTo({ top: window.scrollY, behavior: "instant" })"#)
            .expect("release must halt smooth scrolling");
        let detach = RELEASE_BRIDGE.find("__portfolioReleaseScroll()").unwrap();
        assert!(stop < detach);
    }

    #[test]
    fn scroll_script_carries_behavior() {
        assert_eq!(
            scroll_script(1100.0, ScrollBehavior::Smooth),
            "window.scrollTo({ top: 1100, behavior: \"smooth\" });"
        );
    }
}
