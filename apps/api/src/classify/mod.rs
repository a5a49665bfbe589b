//! The classification pipeline and its HTTP boundary.

pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod ranking;

pub use pipeline::ClassifyEngine;
