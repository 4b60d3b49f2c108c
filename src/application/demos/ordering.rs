//! Comparator rules and capacity hints

use std::cmp::Ordering;

use tracing::instrument;

use crate::application::catalog::DemoKind;
use crate::application::report::DemoReport;
use crate::config::DemoSettings;
use crate::domain::{CollectionResult, OrderedContainer, SharedList};

/// The three comparator rules, a checked sort that passes and one that is rejected.
#[instrument(level = "debug", skip_all)]
pub fn comparator_consistency(_settings: &DemoSettings) -> CollectionResult<DemoReport> {
    let mut report = DemoReport::new(DemoKind::Comparator);
    report.line("antisymmetry: cmp(x, y) is the reverse of cmp(y, x)");
    report.line("transitivity: x > y and y > z implies x > z");
    report.line("consistency with equality: x == y implies cmp(x, z) == cmp(y, z)");

    let words: SharedList<&str> = ["pear", "fig", "apple", "kiwi"].into_iter().collect();
    words.sort_checked(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))?;
    report.line(format!("sorted by length, then text: {:?}", words.to_vec()?));

    let numbers: SharedList<i32> = vec![3, 1, 2, 1].into_iter().collect();
    let never_equal = |a: &i32, b: &i32| {
        if a < b {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    };
    report.misuse(
        "sort with a comparator that never returns Equal",
        numbers.sort_checked(never_equal),
    );
    report.line(format!("after rejected sort: {:?}", numbers.to_vec()?));
    Ok(report)
}

/// Presized list reports size zero.
#[instrument(level = "debug", skip_all, fields(hint = settings.initial_capacity))]
pub fn presized_container(settings: &DemoSettings) -> CollectionResult<DemoReport> {
    let mut report = DemoReport::new(DemoKind::Presized);
    let hint = settings.initial_capacity;
    let list: SharedList<String> = SharedList::try_with_capacity(hint)?;
    report.line(format!("size after with_capacity({hint}): {}", list.len()));
    report.line(format!("capacity >= {hint}: {}", list.capacity() >= hint));
    Ok(report)
}
