//! Portfolio UI Components
//!
//! Reusable Dioxus building blocks for the portfolio site: buttons, form
//! fields, the showcase tab bar and the light/dark toggle.
//!
//! ## Styling
//!
//! Components only emit class names. Colors come from the stylesheet, which
//! switches palettes on the `theme-dark` / `theme-light` root class:
//! - **Indigo (#6366f1) → Purple (#a855f7)**: gradients, active links, buttons
//! - **Deep space (#030014)**: dark background
//! - **White / gray-50**: light background

pub mod components;

pub use components::*;
