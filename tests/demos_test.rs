//! Tests for the demonstration runner and the reports it produces

use collection_rules::application::{run, run_all, ApplicationError, DemoKind, DemoReport};
use collection_rules::config::{DemoSettings, MapKind};
use collection_rules::domain::CollectionError;
use collection_rules::util::testing;
use rstest::{fixture, rstest};

#[fixture]
fn settings() -> DemoSettings {
    testing::init_test_setup();
    DemoSettings::default()
}

fn report(demo: DemoKind, settings: &DemoSettings) -> DemoReport {
    run(demo, settings).expect("demonstration succeeds")
}

#[rstest]
fn given_no_selection_when_running_all_then_eight_reports_in_catalogue_order(
    settings: DemoSettings,
) {
    let reports = run_all(&settings, &[]).unwrap();
    let order: Vec<DemoKind> = reports.iter().map(|r| r.demo).collect();
    assert_eq!(order, DemoKind::ALL.to_vec());
    assert!(reports.iter().all(|r| !r.lines.is_empty()));
}

#[rstest]
fn given_selection_out_of_order_when_running_then_catalogue_order_and_no_duplicates(
    settings: DemoSettings,
) {
    let selection = [DemoKind::Dedup, DemoKind::ToArray, DemoKind::Dedup];
    let reports = run_all(&settings, &selection).unwrap();
    let order: Vec<DemoKind> = reports.iter().map(|r| r.demo).collect();
    assert_eq!(order, vec![DemoKind::ToArray, DemoKind::Dedup]);
}

#[rstest]
fn given_to_array_demo_then_reports_array_and_rejects_undersized_destination(
    settings: DemoSettings,
) {
    let report = report(DemoKind::ToArray, &settings);
    assert!(report.contains(r#"["a", "b", "c"] (len 3 == list len 3)"#));
    assert!(report.contains("copy_into undersized array: rejected"));
}

#[rstest]
fn given_array_view_demo_then_view_follows_array_and_rejects_push(settings: DemoSettings) {
    let report = report(DemoKind::ArrayView, &settings);
    assert!(report.contains("view.push(\"c\"): rejected (unsupported operation"));
    assert!(report.contains("view[0] = c"));
    assert!(report.contains(r#"array = ["c", "d"]"#));
}

#[rstest]
fn given_safe_removal_demo_then_for_each_rejected_and_cursor_leaves_a_c(
    settings: DemoSettings,
) {
    let report = report(DemoKind::SafeRemoval, &settings);
    assert!(report.lines[0].contains("rejected (concurrent modification"));
    assert_eq!(report.lines[1..], ["a", "c"]);
}

#[rstest]
fn given_custom_sentinel_when_removing_then_that_element_is_removed(
    mut settings: DemoSettings,
) {
    settings.sentinel = "c".into();
    let report = report(DemoKind::SafeRemoval, &settings);
    assert_eq!(report.lines[1..], ["a", "b"]);
}

#[rstest]
fn given_sub_list_demo_then_parent_shows_insert_and_view_is_invalidated(
    settings: DemoSettings,
) {
    let report = report(DemoKind::SubListView, &settings);
    assert_eq!(report.lines[..5], ["a", "b", "xiao", "c", "d"]);
    assert!(report.lines[5].contains("rejected (concurrent modification"));
}

#[rstest]
fn given_comparator_demo_then_rules_listed_and_inconsistent_comparator_rejected(
    settings: DemoSettings,
) {
    let report = report(DemoKind::Comparator, &settings);
    assert!(report.contains("antisymmetry"));
    assert!(report.contains("transitivity"));
    assert!(report.contains(r#"["fig", "kiwi", "pear", "apple"]"#));
    assert!(report.contains("never returns Equal: rejected (comparator violates antisymmetry"));
    assert!(report.contains("after rejected sort: [3, 1, 2, 1]"));
}

#[rstest]
fn given_presized_demo_then_size_is_zero(settings: DemoSettings) {
    let report = report(DemoKind::Presized, &settings);
    assert_eq!(report.lines[0], "size after with_capacity(100): 0");
    assert_eq!(report.lines[1], "capacity >= 100: true");
}

#[rstest]
fn given_overflowing_capacity_hint_when_presizing_then_error_not_panic(
    mut settings: DemoSettings,
) {
    settings.initial_capacity = usize::MAX;

    let err = run(DemoKind::Presized, &settings).unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Demo {
            demo: DemoKind::Presized,
            source: CollectionError::CapacityExceeded { .. },
        }
    ));
}

#[rstest]
#[case::hash(MapKind::Hash)]
#[case::btree(MapKind::Btree)]
fn given_entry_demo_then_four_pairs_once_and_fewer_lookups(
    mut settings: DemoSettings,
    #[case] map_kind: MapKind,
) {
    settings.map_kind = map_kind;
    let report = report(DemoKind::EntryIteration, &settings);

    let mut pairs = report.lines[..4].to_vec();
    if map_kind == MapKind::Btree {
        assert_eq!(pairs, ["10 -> A", "11 -> B", "12 -> C", "13 -> D"]);
    }
    pairs.sort();
    assert_eq!(pairs, ["10 -> A", "11 -> B", "12 -> C", "13 -> D"]);
    assert_eq!(report.lines[4], "lookups: entry traversal 0, key traversal 4");
}

#[rstest]
#[case::ordered(true)]
#[case::hashed(false)]
fn given_dedup_demo_then_each_value_once(mut settings: DemoSettings, #[case] ordered: bool) {
    settings.preserve_insertion_order = ordered;
    let report = report(DemoKind::Dedup, &settings);

    let mut values = report.lines[..3].to_vec();
    if ordered {
        assert_eq!(values, ["1", "2", "3"]);
    }
    values.sort();
    assert_eq!(values, ["1", "2", "3"]);
    assert_eq!(report.lines[3], "dropped 2 duplicates");
}
