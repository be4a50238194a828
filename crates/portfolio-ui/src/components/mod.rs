//! Reusable UI components
//!
//! All components share the gradient accent and glass-panel look defined in
//! the app stylesheet.

mod button;
mod input;
mod tab_bar;
mod theme_toggle;

pub use button::*;
pub use input::*;
pub use tab_bar::*;
pub use theme_toggle::*;
