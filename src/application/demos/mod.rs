//! Demonstrations and the runner that executes them in catalogue order

mod conversion;
mod hashing;
mod iteration;
mod ordering;

use tracing::{info, instrument};

use crate::application::catalog::DemoKind;
use crate::application::report::DemoReport;
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::DemoSettings;

pub use conversion::{array_to_list_view, collection_to_array};
pub use hashing::{map_entry_iteration, set_deduplication};
pub use iteration::{safe_removal, sub_list_view};
pub use ordering::{comparator_consistency, presized_container};

/// Run a single demonstration.
#[instrument(level = "info", skip(settings))]
pub fn run(demo: DemoKind, settings: &DemoSettings) -> ApplicationResult<DemoReport> {
    let outcome = match demo {
        DemoKind::ToArray => collection_to_array(settings),
        DemoKind::ArrayView => array_to_list_view(settings),
        DemoKind::SafeRemoval => safe_removal(settings),
        DemoKind::SubListView => sub_list_view(settings),
        DemoKind::Comparator => comparator_consistency(settings),
        DemoKind::Presized => presized_container(settings),
        DemoKind::EntryIteration => map_entry_iteration(settings),
        DemoKind::Dedup => set_deduplication(settings),
    };
    outcome.map_err(|source| ApplicationError::Demo { demo, source })
}

/// Run the selected demonstrations, or all of them for an empty selection.
///
/// Execution order is always catalogue order; duplicates in `selection` run once.
pub fn run_all(
    settings: &DemoSettings,
    selection: &[DemoKind],
) -> ApplicationResult<Vec<DemoReport>> {
    let reports = DemoKind::ALL
        .into_iter()
        .filter(|demo| selection.is_empty() || selection.contains(demo))
        .map(|demo| run(demo, settings))
        .collect::<ApplicationResult<Vec<_>>>()?;
    info!(count = reports.len(), "demonstrations finished");
    Ok(reports)
}
