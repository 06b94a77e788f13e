pub mod error;
pub mod sidebar;

pub use error::error_page;
pub use sidebar::{sidebar_fragment, sidebar_shell};
