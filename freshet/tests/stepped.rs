use std::cell::Cell;
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::rc::Rc;

use freshet::{Terminal, ToStream};

#[test]
fn sums_the_source() {
    let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
    assert_eq!(numbers.stepped().sum(), 45);
}

#[test]
fn filtered_sum_keeps_only_matching_elements() {
    let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
    assert_eq!(numbers.stepped().filter(|x| x % 2 == 0).sum(), 20);
}

#[test]
fn mapped_sum_doubles_each_element() {
    let numbers = vec![0, 1, 2];
    assert_eq!(numbers.stepped().map(|x| x * 2).sum(), 6);
}

#[test]
fn sum_from_starts_at_the_given_value() {
    let numbers = vec![1, 2, 3];
    assert_eq!(numbers.stepped().sum_from(100), 106);

    let empty: Vec<i32> = Vec::new();
    assert_eq!(empty.stepped().sum_from(41), 41);
}

#[test]
fn find_first_picks_the_earliest_match() {
    let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
    let found = numbers.stepped().find_first(|x| *x > 0 && x % 2 == 0);
    assert_eq!(found, Some(2));
}

#[test]
fn find_first_misses_resolve_at_the_call_site() {
    let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
    let found = numbers.stepped().find_first(|x| *x > 100);
    assert_eq!(found.unwrap_or(0), 0);
}

#[test]
fn find_first_observes_transformed_elements() {
    let numbers = vec![1, 2, 3, 4];
    // The predicate runs after the queued steps, not against the raw source.
    let found = numbers.stepped().map(|x| x * 10).find_first(|x| *x >= 20);
    assert_eq!(found, Some(20));
}

#[test]
fn find_any_produces_some_element_or_none() {
    let numbers = vec![7, 8, 9];
    assert!(matches!(numbers.stepped().find_any(), Some(7 | 8 | 9)));
    assert_eq!(numbers.stepped().filter(|x| *x > 100).find_any(), None);
}

#[test]
fn steps_apply_in_registration_order() {
    let numbers = vec![1, 2, 3, 4];

    let mapped_then_filtered = numbers
        .stepped()
        .map(|x| x + 1)
        .filter(|x| x % 2 == 0)
        .collect();
    assert_eq!(mapped_then_filtered, vec![2, 4]);

    let filtered_then_mapped = numbers
        .stepped()
        .filter(|x| x % 2 == 0)
        .map(|x| x + 1)
        .collect();
    assert_eq!(filtered_then_mapped, vec![3, 5]);
}

#[test]
fn rejected_elements_skip_later_steps() {
    let numbers = vec![1, 2, 3, 4, 5];
    let runs = Rc::new(Cell::new(0));
    let observer = Rc::clone(&runs);

    let doubled_evens = numbers
        .stepped()
        .filter(|x| x % 2 == 0)
        .map(move |x| {
            observer.set(observer.get() + 1);
            x * 2
        })
        .collect();

    assert_eq!(doubled_evens, vec![4, 8]);
    assert_eq!(runs.get(), 2);
}

#[test]
fn intermediate_calls_run_nothing() {
    let numbers = vec![1, 2, 3];
    let runs = Rc::new(Cell::new(0));
    let observer = Rc::clone(&runs);

    let stream = numbers.stepped().map(move |x| {
        observer.set(observer.get() + 1);
        x + 1
    });

    assert_eq!(runs.get(), 0);
    assert_eq!(stream.collect(), vec![2, 3, 4]);
    assert_eq!(runs.get(), 3);
}

#[test]
fn collect_preserves_the_source() {
    let numbers = vec![3, 1, 4, 1, 5];
    assert_eq!(numbers.stepped().collect(), numbers);
}

#[test]
fn collect_up_to_bounds_the_output_size() {
    let numbers = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    assert_eq!(numbers.stepped().collect_up_to(5), vec![0, 1, 2, 3, 4]);
    assert_eq!(numbers.stepped().collect_up_to(0), Vec::<i32>::new());
    assert_eq!(numbers.stepped().collect_up_to(100), numbers);
}

#[test]
fn collect_up_to_counts_distinct_set_elements() {
    // Halving collides neighbors; collisions must not use up the limit.
    let numbers: BTreeSet<i32> = (1..=6).collect();
    let halves = numbers.stepped().map(|x| x / 2).collect_up_to(3);
    assert_eq!(halves, BTreeSet::from([0, 1, 2]));
}

#[test]
fn reduce_folds_in_source_order() {
    let digits = vec![0, 1, 2];
    let joined = digits
        .stepped()
        .reduce(String::new(), |acc, x| format!("{}{}", acc, x));
    assert_eq!(joined, "012");
}

#[test]
fn count_reflects_filtering() {
    let numbers = vec![1, 2, 3, 4, 5];
    assert_eq!(numbers.stepped().count(), 5);
    assert_eq!(numbers.stepped().filter(|x| x % 2 == 1).count(), 3);
}

#[test]
fn terminals_are_repeatable() {
    let numbers = vec![1, 2, 3, 4];
    let stream = numbers.stepped().map(|x| x * 3).filter(|x| x % 2 == 0);
    assert_eq!(stream.collect(), stream.collect());
    assert_eq!(stream.sum(), stream.sum());
    assert_eq!(stream.count(), 2);
}

#[test]
fn empty_sources_produce_nothing() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(empty.stepped().sum(), 0);
    assert_eq!(empty.stepped().count(), 0);
    assert_eq!(empty.stepped().find_any(), None);
    assert_eq!(empty.stepped().map(|x| x + 1).collect(), Vec::<i32>::new());
}

#[test]
fn runs_over_every_adapted_container_kind() {
    let deque: VecDeque<i32> = (1..=4).collect();
    assert_eq!(
        deque.stepped().map(|x| x * 2).collect(),
        VecDeque::from([2, 4, 6, 8])
    );

    let list: LinkedList<i32> = (1..=4).collect();
    assert_eq!(list.stepped().filter(|x| x % 2 == 0).sum(), 6);

    let hashed: HashSet<i32> = (1..=4).collect();
    assert_eq!(hashed.stepped().filter(|x| x % 2 == 0).count(), 2);

    let sorted: BTreeSet<i32> = (1..=5).collect();
    assert_eq!(sorted.stepped().filter(|x| x % 2 == 1).sum(), 9);
}

#[test]
fn set_collection_deduplicates_mapped_collisions() {
    let numbers: HashSet<i32> = (1..=4).collect();
    let parities = numbers.stepped().map(|x| x % 2).collect();
    assert_eq!(parities, HashSet::from([0, 1]));
}
