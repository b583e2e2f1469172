//! UI rendering module

mod field_renderer;
mod form;

pub use form::draw;
