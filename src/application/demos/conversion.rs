//! Array/list conversions

use tracing::instrument;

use crate::application::catalog::DemoKind;
use crate::application::report::DemoReport;
use crate::config::DemoSettings;
use crate::domain::{CollectionResult, FixedArray, OrderedContainer, SharedList};

/// List to array through the list's own conversion.
#[instrument(level = "debug", skip_all)]
pub fn collection_to_array(_settings: &DemoSettings) -> CollectionResult<DemoReport> {
    let mut report = DemoReport::new(DemoKind::ToArray);
    let list: SharedList<String> = ["a", "b", "c"].into_iter().map(String::from).collect();

    let array = list.to_array();
    report.line(format!(
        "to_array: {array:?} (len {} == list len {})",
        array.len(),
        list.len()
    ));

    let mut exact = vec![String::new(); list.len()];
    list.copy_into(&mut exact)?;
    report.line(format!("copy_into array of len {}: {exact:?}", exact.len()));

    let mut short = vec![String::new(); list.len().saturating_sub(1)];
    report.misuse("copy_into undersized array", list.copy_into(&mut short));
    Ok(report)
}

/// Array wrapped as a list: shared slots, no structural changes.
#[instrument(level = "debug", skip_all)]
pub fn array_to_list_view(_settings: &DemoSettings) -> CollectionResult<DemoReport> {
    let mut report = DemoReport::new(DemoKind::ArrayView);
    let array: FixedArray<String> = ["a", "b"].into_iter().map(String::from).collect();
    let view = array.as_list();

    report.misuse("view.push(\"c\")", view.push("c".into()));
    report.misuse("view.remove_at(0)", view.remove_at(0));
    report.misuse("view.clear()", view.clear());

    array.set(0, "c".into())?;
    report.line(format!("array[0] = \"c\" -> view[0] = {}", view.get(0)?));

    view.set(1, "d".into())?;
    report.line(format!("view[1] = \"d\" -> array = {:?}", array.to_vec()));
    Ok(report)
}
