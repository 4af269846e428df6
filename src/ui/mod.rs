pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod map;
pub mod mvi;
pub mod panels;
pub mod render;
pub mod runtime;
pub mod search_worker;
pub mod session;
pub mod suggestions;
pub mod terminal_guard;
pub mod theme;
pub mod view;
