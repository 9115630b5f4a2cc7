//! fourierplot CLI library.
//!
//! This crate provides the core functionality for the fourierplot CLI:
//! loading plot specs from files or presets, running the sample/render
//! pipeline, and the command implementations.

pub mod commands;
pub mod dispatch;
pub mod input;
