//! Tab Bar Component
//!
//! Horizontal tab strip used by the portfolio showcase. The selected tab is
//! highlighted with the accent gradient.

use dioxus::prelude::*;
use portfolio_core::ShowcaseTab;

/// Properties for the TabBar component
#[derive(Clone, PartialEq, Props)]
pub struct TabBarProps {
    /// Currently selected tab
    pub selected: ShowcaseTab,
    /// Handler called when a tab is selected
    pub on_select: EventHandler<ShowcaseTab>,
}

/// Displays the showcase tabs as an accessible tablist
///
/// # Example
///
/// ```rust,ignore
/// let mut tab = use_signal(ShowcaseTab::default);
///
/// rsx! {
///     TabBar {
///         selected: tab(),
///         on_select: move |t| tab.set(t)
///     }
/// }
/// ```
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    rsx! {
        div {
            class: "tab-bar",
            role: "tablist",
            "aria-label": "Portfolio sections",
            for tab in ShowcaseTab::ALL {
                {
                    let is_selected = props.selected == tab;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{tab.index()}",
                            id: "{tab.dom_id()}",
                            class: tab_class(is_selected),
                            role: "tab",
                            "aria-selected": if is_selected { "true" } else { "false" },
                            "aria-controls": "{tab.panel_id()}",
                            onclick: move |_| {
                                tracing::debug!(tab = tab.label(), "Showcase tab selected");
                                on_select.call(tab);
                            },
                            span { class: "tab-icon", {tab_icon(tab)} }
                            span { class: "tab-label", "{tab.label()}" }
                        }
                    }
                }
            }
        }
    }
}

fn tab_class(selected: bool) -> &'static str {
    if selected {
        "tab selected"
    } else {
        "tab"
    }
}

/// Lucide icons: code, award, boxes
fn tab_icon(tab: ShowcaseTab) -> Element {
    match tab {
        ShowcaseTab::Projects => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                polyline { points: "16 18 22 12 16 6" }
                polyline { points: "8 6 2 12 8 18" }
            }
        },
        ShowcaseTab::Certificates => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "8", r: "6" }
                path { d: "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" }
            }
        },
        ShowcaseTab::TechStack => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M2.97 12.92A2 2 0 0 0 2 14.63v3.24a2 2 0 0 0 .97 1.71l3 1.8a2 2 0 0 0 2.06 0L12 19v-5.5l-5-3-4.03 2.42Z" }
                path { d: "m7 16.5-4.74-2.85" }
                path { d: "m7 16.5 5-3" }
                path { d: "M7 16.5v5.17" }
                path { d: "M12 13.5V19l3.97 2.38a2 2 0 0 0 2.06 0l3-1.8a2 2 0 0 0 .97-1.71v-3.24a2 2 0 0 0-.97-1.71L17 10.5l-5 3Z" }
                path { d: "m17 16.5-5-3" }
                path { d: "m17 16.5 4.74-2.85" }
                path { d: "M17 16.5v5.17" }
                path { d: "M7.97 4.42A2 2 0 0 0 7 6.13v4.37l5 3 5-3V6.13a2 2 0 0 0-.97-1.71l-3-1.8a2 2 0 0 0-2.06 0l-3 1.8Z" }
                path { d: "M12 8 7.26 5.15" }
                path { d: "m12 8 4.74-2.85" }
                path { d: "M12 13.5V8" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_tab_class() {
        assert_eq!(tab_class(true), "tab selected");
        assert_eq!(tab_class(false), "tab");
    }
}
