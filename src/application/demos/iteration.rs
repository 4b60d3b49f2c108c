//! Removal during traversal and live sub-list views

use tracing::instrument;

use crate::application::catalog::DemoKind;
use crate::application::report::DemoReport;
use crate::config::DemoSettings;
use crate::domain::{CollectionError, CollectionResult, OrderedContainer, SharedList};

fn tokens(items: &[&str]) -> SharedList<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Naive for-each removal fails fast; cursor removal is safe.
#[instrument(level = "debug", skip_all, fields(sentinel = %settings.sentinel))]
pub fn safe_removal(settings: &DemoSettings) -> CollectionResult<DemoReport> {
    let mut report = DemoReport::new(DemoKind::SafeRemoval);
    let sentinel = &settings.sentinel;

    let list = tokens(&["a", "b", "c"]);
    let mut naive: CollectionResult<()> = Ok(());
    for item in list.iter() {
        match item {
            Ok(value) if value == *sentinel => {
                list.remove_value(&value);
            }
            Ok(_) => {}
            Err(e) => naive = Err(e),
        }
    }
    report.misuse(&format!("for-each removal of {sentinel:?}"), naive);

    let list = tokens(&["a", "b", "c"]);
    let mut cursor = list.cursor();
    while let Some(item) = cursor.next() {
        if item? == *sentinel {
            cursor.remove()?;
        }
    }
    report.lines(list.iter().collect::<CollectionResult<Vec<_>>>()?);
    Ok(report)
}

/// Writes through a sub-list reach the parent; parent changes invalidate it.
#[instrument(level = "debug", skip_all)]
pub fn sub_list_view(_settings: &DemoSettings) -> CollectionResult<DemoReport> {
    let mut report = DemoReport::new(DemoKind::SubListView);
    let list = tokens(&["a", "b", "c", "d"]);

    let view = list.sub_list(0, 2)?;
    view.push("xiao".into())?;
    report.lines(list.iter().collect::<CollectionResult<Vec<_>>>()?);

    list.push("3".into())?;
    let traversal: Result<Vec<String>, CollectionError> = view.iter().collect();
    report.misuse("traverse sub-list after parent push", traversal);
    Ok(report)
}
