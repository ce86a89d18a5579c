use crate::application::dto::{ApplySummary, EvaluationUpdate};
use crate::application::read_models::AggregatedDependencyGraph;
use crate::shared::Result;

/// EvaluationPort - Inbound port for applying evaluation updates.
///
/// This port defines the interface that external adapters (CLI, host
/// integrations) use to feed build-evaluation diffs into the aggregated
/// dependency graph. It represents the application's public API for the
/// diff-ingestion side.
pub trait EvaluationPort {
    /// Applies a batch of per-framework evaluation updates to the graph.
    ///
    /// # Arguments
    /// * `updates` - one entry per (framework, unresolved/resolved diff pair)
    /// * `graph` - the aggregated graph state the changes fold into
    ///
    /// # Returns
    /// A summary of the add/remove events applied per framework.
    ///
    /// # Errors
    /// Returns an error if an update carries malformed items; the failing
    /// update is not partially applied.
    fn apply_updates(
        &self,
        updates: &[EvaluationUpdate],
        graph: &mut AggregatedDependencyGraph,
    ) -> Result<ApplySummary>;
}
