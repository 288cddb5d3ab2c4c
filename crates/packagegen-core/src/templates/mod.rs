//! Template selection, rendering, and materialization
//!
//! This module provides:
//! - Resolution of which template roots apply to a generation run
//! - The data bag templates render against
//! - Restricted `<%= ... %>` expression evaluation
//! - The materializer that merges the roots into the destination tree

pub mod context;
pub mod expression;
pub mod materializer;
pub mod set;

pub use context::TemplateData;
pub use expression::{render, RenderError};
pub use materializer::materialize;
pub use set::TemplateSet;
