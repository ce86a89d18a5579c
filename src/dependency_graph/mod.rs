//! Dependency graph bounded context.
//!
//! Pure classification and diffing logic: parsing raw evaluation items into
//! typed dependency records and turning rule diffs into per-framework
//! add/remove change sets. No I/O lives here.

pub mod domain;
pub mod services;
