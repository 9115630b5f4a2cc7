//! CLI command implementations

pub mod json_output;
pub mod presets;
pub mod render;
pub mod render_all;
pub mod sample;
pub mod validate;

mod reporting;
