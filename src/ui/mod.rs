//! Terminal UI

pub mod components;
pub mod renderer;

pub use renderer::render;
