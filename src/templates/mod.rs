pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{error_page, sidebar_fragment};
pub use layouts::map::map_layout;
