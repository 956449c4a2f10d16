// Dioxus UI module
pub mod app;
pub mod components;
pub mod views;

pub use app::App;
