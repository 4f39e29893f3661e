//! Interactive navigation for posted comics
//!
//! This module provides the button-driven cursor attached to comic messages.
//!
//! # Components
//!
//! - `Navigator`: the per-message cursor and its transitions
//! - `NavigatorRegistry`: message id → navigator, with idle and capacity eviction

mod registry;
mod state;

pub use registry::NavigatorRegistry;
pub use state::{NavAction, NavStep, Navigator};
