//! Cross-target bounded context.
//!
//! Lifecycle management for the per-target-framework contexts of one
//! multi-targeted project: lazily created, shared across every live
//! aggregate view, and disposed only when the last referencing view is
//! released.

pub mod domain;
pub mod services;
