//! Reusable HTML components for the server-rendered UI
//!
//! Components are HTML fragments assembled into full pages. All styling
//! uses Tailwind CSS loaded from the CDN in the base template.

pub mod escape;
pub mod layout;
pub mod stats;

// Re-export main component functions
pub use escape::escape_html;
pub use layout::{card, nav_bar, page_header};
pub use stats::{stat_card, stats_grid};
