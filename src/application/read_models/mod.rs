pub mod graph_read_model;

pub use graph_read_model::{AggregatedDependencyGraph, FrameworkGraph};
