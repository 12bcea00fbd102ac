use std::cell::Cell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use freshet::{Terminal, ToStream};

#[test]
fn map_may_change_the_element_type() {
    let numbers = vec![1, 2, 3];
    let labels = numbers.eager().map(|x| x.to_string()).collect();
    assert_eq!(labels, vec!["1", "2", "3"]);
}

#[test]
fn intermediate_calls_run_at_the_call_site() {
    let numbers = vec![1, 2, 3, 4];
    let runs = Rc::new(Cell::new(0));
    let observer = Rc::clone(&runs);

    let doubled = numbers.eager().map(move |x| {
        observer.set(observer.get() + 1);
        x * 2
    });

    // The mapping already happened, with no terminal in sight.
    assert_eq!(runs.get(), 4);
    assert_eq!(doubled.collect(), vec![2, 4, 6, 8]);
    assert_eq!(runs.get(), 4);
}

#[test]
fn streams_branch_without_affecting_each_other() {
    let numbers = vec![1, 2, 3, 4, 5, 6];
    let evens = numbers.eager().filter(|x| x % 2 == 0);

    let tens = evens.map(|x| x * 10);
    assert_eq!(tens.sum(), 120);
    assert_eq!(evens.count(), 3);
    assert_eq!(evens.collect(), vec![2, 4, 6]);
}

#[test]
fn count_is_a_size_query_on_materialized_data() {
    let numbers = vec![1, 2, 3, 4, 5];
    let runs = Rc::new(Cell::new(0));
    let observer = Rc::clone(&runs);

    let kept = numbers.eager().filter(move |x| {
        observer.set(observer.get() + 1);
        *x > 2
    });

    assert_eq!(runs.get(), 5);
    assert_eq!(kept.count(), 3);
    // Counting re-reads nothing.
    assert_eq!(runs.get(), 5);
}

#[test]
fn terminal_results_match_the_materialized_data() {
    let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
    assert_eq!(numbers.eager().sum(), 45);
    assert_eq!(numbers.eager().filter(|x| x % 2 == 0).sum(), 20);
    assert_eq!(numbers.eager().find_first(|x| x % 2 == 0), Some(2));
    assert_eq!(numbers.eager().find_first(|x| *x > 100), None);
    assert_eq!(numbers.eager().collect_up_to(5), vec![1, 2, 3, 4, 5]);
    assert_eq!(numbers.eager().reduce(0, |acc, x| acc + x), 45);
}

#[test]
fn retyping_preserves_the_container_kind() {
    let deque: VecDeque<i32> = (1..=3).collect();
    let widened = deque.eager().map(|x| i64::from(*x)).collect();
    assert_eq!(widened, VecDeque::from([1i64, 2, 3]));

    let numbers: HashSet<i32> = (1..=4).collect();
    let parities = numbers.eager().map(|x| x % 2).collect();
    assert_eq!(parities, HashSet::from([0, 1]));
}

#[test]
fn owned_sources_detach_from_the_borrow() {
    let stream = freshet::stream::eager::Stream::from(vec![1, 2, 3]);
    assert_eq!(stream.map(|x| x + 1).collect(), vec![2, 3, 4]);
}

#[test]
fn empty_sources_produce_nothing() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(empty.eager().map(|x| x * 2).count(), 0);
    assert_eq!(empty.eager().sum(), 0);
    assert_eq!(empty.eager().find_any(), None);
}
