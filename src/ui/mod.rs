pub mod app;
pub mod components;
pub mod create;
pub mod detail;
pub mod edit;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod list;
pub mod mvi;
pub mod remote;
pub mod render;
pub mod router;
pub mod runtime;
pub mod theme;
