//! # adgenius
//!
//! Rendering-independent pieces of the AdGenius AI dashboard shell: the fixed
//! navigation table and its active-entry rule, the sidebar visibility state,
//! button styling, and the static copy shown on the landing page.

pub mod button;
pub mod config;
pub mod content;
mod glyph;
pub mod nav;
pub mod sidebar;

pub use config::SiteConfig;
pub use glyph::Glyph;
pub use nav::{NavEntry, NAV_ENTRIES};
pub use sidebar::{SidebarEvent, Visibility};
