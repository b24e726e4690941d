pub mod app;
pub mod browser;
pub mod events;
pub mod filter;
pub mod footer;
pub mod format;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notifications;
pub mod render;
pub mod runtime;
pub mod table;
pub mod terminal_guard;
pub mod theme;
