//! Page components and DOM wiring.

pub mod constellation;
pub mod morph;
pub mod nav;
pub mod reveal;
