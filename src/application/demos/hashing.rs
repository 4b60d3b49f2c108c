//! Hash-based containers: entry traversal and set de-duplication
//!
//! Keys of maps and elements of sets need `Eq` and `Hash` implemented
//! together; deriving both keeps them consistent.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::instrument;

use crate::application::catalog::DemoKind;
use crate::application::report::DemoReport;
use crate::config::{DemoSettings, MapKind};
use crate::domain::{
    dedup_via, traverse_entries, traverse_keys_then_lookup, AssociativeContainer,
    CollectionResult, CountingMap, LinkedUniqueSet, SharedList, Traversal,
};

const ENTRIES: [(i32, &str); 4] = [(10, "A"), (11, "B"), (12, "C"), (13, "D")];

fn traverse<M>(report: &mut DemoReport)
where
    M: AssociativeContainer<i32, String> + Default,
{
    let mut map = CountingMap::new(M::default());
    for (key, value) in ENTRIES {
        map.put(key, value.to_string());
    }

    let by_entries: Traversal<i32, String> = traverse_entries(&map);
    report.lines(by_entries.pairs.iter().map(|(k, v)| format!("{k} -> {v}")));

    let by_keys: Traversal<i32, String> = traverse_keys_then_lookup(&map);
    report.line(format!(
        "lookups: entry traversal {}, key traversal {}",
        by_entries.lookups, by_keys.lookups
    ));
}

/// Single-pass entry traversal versus key traversal plus lookups.
#[instrument(level = "debug", skip_all, fields(map_kind = ?settings.map_kind))]
pub fn map_entry_iteration(settings: &DemoSettings) -> CollectionResult<DemoReport> {
    let mut report = DemoReport::new(DemoKind::EntryIteration);
    match settings.map_kind {
        MapKind::Hash => traverse::<HashMap<i32, String>>(&mut report),
        MapKind::Btree => traverse::<BTreeMap<i32, String>>(&mut report),
    }
    Ok(report)
}

/// List to set and back.
#[instrument(level = "debug", skip_all)]
pub fn set_deduplication(settings: &DemoSettings) -> CollectionResult<DemoReport> {
    let mut report = DemoReport::new(DemoKind::Dedup);
    let list: SharedList<i32> = vec![1, 1, 2, 2, 3].into_iter().collect();

    let dropped = if settings.preserve_insertion_order {
        dedup_via::<_, LinkedUniqueSet<i32>>(&list)?
    } else {
        dedup_via::<_, HashSet<i32>>(&list)?
    };
    report.lines(list.iter().collect::<CollectionResult<Vec<_>>>()?);
    report.line(format!("dropped {dropped} duplicates"));
    Ok(report)
}
