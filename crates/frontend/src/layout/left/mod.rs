pub mod left;
pub mod sidebar;

pub use left::Left;
pub use sidebar::{PublicMenu, SessionFooter, ViewMenu};
