pub mod button;
pub mod header;
pub mod icon;
pub mod shell;
pub mod sidebar;

pub use button::Button;
pub use header::Header;
pub use icon::Icon;
pub use shell::Shell;
pub use sidebar::{Sidebar, SidebarPanel};
