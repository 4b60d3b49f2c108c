//! Comparator consistency checks
//!
//! A comparator handed to a sort must be antisymmetric, transitive and
//! consistent with equality. Violations make sorts misorder or panic, so the
//! checked sort verifies the comparator against the actual input first and
//! fails with `InvalidOrdering`.

use std::cmp::Ordering;

use itertools::iproduct;
use tracing::{debug, instrument};

use crate::domain::error::{CollectionError, CollectionResult, OrderingRule};

fn violation(rule: OrderingRule, detail: String) -> CollectionError {
    debug!(%rule, %detail, "comparator rejected");
    CollectionError::InvalidOrdering { rule, detail }
}

/// Verify all three comparator rules over every pair and triple of `items`.
///
/// Cubic in `items.len()`; meant for the small inputs of a demonstration or a
/// test, not for production-size sorts.
#[instrument(level = "debug", skip_all, fields(len = items.len()))]
pub fn verify_comparator<T, F>(items: &[T], cmp: F) -> CollectionResult<()>
where
    F: Fn(&T, &T) -> Ordering,
{
    let indexed = items.iter().enumerate();

    for ((i, x), (j, y)) in iproduct!(indexed.clone(), indexed.clone()) {
        let forward = cmp(x, y);
        let backward = cmp(y, x);
        if forward != backward.reverse() {
            return Err(violation(
                OrderingRule::Antisymmetry,
                format!("cmp(#{i}, #{j}) = {forward:?} but cmp(#{j}, #{i}) = {backward:?}"),
            ));
        }
    }

    for ((i, x), (j, y), (k, z)) in iproduct!(indexed.clone(), indexed.clone(), indexed) {
        let xy = cmp(x, y);
        if xy == Ordering::Greater && cmp(y, z) == Ordering::Greater && cmp(x, z) != Ordering::Greater
        {
            return Err(violation(
                OrderingRule::Transitivity,
                format!("#{i} > #{j} and #{j} > #{k} but not #{i} > #{k}"),
            ));
        }
        if xy == Ordering::Equal && cmp(x, z) != cmp(y, z) {
            return Err(violation(
                OrderingRule::ConsistentWithEquality,
                format!("#{i} == #{j} but they compare differently against #{k}"),
            ));
        }
    }

    Ok(())
}

/// Sort `items` in place after `verify_comparator` accepted the comparator.
pub fn sort_checked<T, F>(items: &mut [T], cmp: F) -> CollectionResult<()>
where
    F: Fn(&T, &T) -> Ordering,
{
    verify_comparator(items, &cmp)?;
    items.sort_by(|a, b| cmp(a, b));
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    /// Never reports `Equal`: breaks antisymmetry on equal elements.
    fn never_equal(a: &i32, b: &i32) -> Ordering {
        if a < b {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// Rock-paper-scissors: every element beats the next one.
    fn cyclic(a: &i32, b: &i32) -> Ordering {
        match (a - b).rem_euclid(3) {
            0 => Ordering::Equal,
            1 => Ordering::Greater,
            _ => Ordering::Less,
        }
    }

    /// Equal within a distance of 1: equality is not transitive.
    fn fuzzy(a: &i32, b: &i32) -> Ordering {
        if (a - b).abs() <= 1 {
            Ordering::Equal
        } else {
            a.cmp(b)
        }
    }

    #[test]
    fn given_total_order_when_sorting_then_sorted() {
        let mut items = vec![5, 3, 9, 1, 3];
        sort_checked(&mut items, i32::cmp).unwrap();
        assert_eq!(items, vec![1, 3, 3, 5, 9]);
    }

    #[test]
    fn given_empty_input_when_verifying_then_ok() {
        let items: Vec<i32> = Vec::new();
        assert!(verify_comparator(&items, never_equal).is_ok());
    }

    #[rstest]
    #[case::never_equal(never_equal as fn(&i32, &i32) -> Ordering, OrderingRule::Antisymmetry)]
    #[case::cyclic(cyclic as fn(&i32, &i32) -> Ordering, OrderingRule::Transitivity)]
    #[case::fuzzy(fuzzy as fn(&i32, &i32) -> Ordering, OrderingRule::ConsistentWithEquality)]
    fn given_broken_comparator_when_sorting_then_invalid_ordering(
        #[case] cmp: fn(&i32, &i32) -> Ordering,
        #[case] expected: OrderingRule,
    ) {
        let mut items = vec![0, 1, 2];
        let err = sort_checked(&mut items, cmp).unwrap_err();
        assert!(matches!(
            err,
            CollectionError::InvalidOrdering { rule, .. } if rule == expected
        ));
        assert_eq!(items, vec![0, 1, 2], "input must stay untouched");
    }
}
