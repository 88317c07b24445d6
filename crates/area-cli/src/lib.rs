//! CLI library components for the area hierarchy resolver.

#![allow(missing_docs)]

pub mod dataset;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
