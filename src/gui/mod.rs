pub mod actions;
pub mod app;
pub mod detail;
pub mod error_page;
pub mod message_overlay;
pub mod table;
pub mod theme;
pub mod top_bar;

pub use app::ExplorerApp;
