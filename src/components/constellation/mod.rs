//! Particle constellation canvas component.
//!
//! Renders a decorative particle field on an HTML canvas with:
//! - A fixed-size set of drifting particles, bouncing off the surface edges
//! - Proximity links between nearby particles
//! - Links from particles to the pointer position
//! - Configurable density, colors, and thresholds via style presets
//!
//! # Example
//!
//! ```ignore
//! use portfolio_fx::ConstellationCanvas;
//!
//! view! { <ConstellationCanvas fullscreen=true /> }
//! ```

mod component;
mod field;
mod render;
pub mod theme;

pub use component::ConstellationCanvas;
pub use field::{Field, Particle};
pub use theme::ConstellationStyle;
