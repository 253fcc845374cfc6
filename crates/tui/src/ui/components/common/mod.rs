//! Shared component building blocks.

pub mod scroll_lock;
pub mod scroll_metrics;

pub use scroll_lock::{ScrollLockRegistry, ScrollTarget};
pub use scroll_metrics::ScrollMetrics;
