//! Page sections.
//!
//! Each section renders into the body area between the header and footer
//! bands and registers its hover-card trigger rectangles on the `App` for
//! this frame's hit-testing.

pub mod best_practices;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod quick_start;
