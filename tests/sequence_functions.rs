use rust_collection_generics::processing::{filter, find_first, map, try_map};
use rust_collection_generics::types::{Predicate, Transformation};
use rust_collection_generics::{ContractError, TryMapError};

fn is_odd(i: &i32) -> bool {
    i % 2 == 1
}

fn shorter_than_or_equal(chars: usize) -> impl Fn(&&str) -> bool {
    move |s: &&str| s.chars().count() <= chars
}

#[test]
fn filter_odd_numbers() {
    let xs = [1, 2, 3, 4, 5, 6];
    assert_eq!(filter(Some(&xs[..]), Some(is_odd)), Some(vec![1, 3, 5]));
}

#[test]
fn filter_short_words_counts_characters_not_bytes() {
    let words = [
        "catJAM",
        "monkaS",
        "OMEGALUL",
        "Clap",
        "KEKW",
        "EZ",
        "大黑公鸡",
        "国王和傻瓜是最好的乐队",
    ];
    let out = filter(Some(&words[..]), Some(shorter_than_or_equal(4)));
    assert_eq!(out, Some(vec!["Clap", "KEKW", "EZ", "大黑公鸡"]));
}

#[test]
fn filter_output_is_an_ordered_subset() {
    let xs: Vec<i32> = (-20..20).map(|i| i * 7 % 11).collect();
    let out = filter(Some(xs.as_slice()), Some(is_odd)).unwrap();

    assert!(out.len() <= xs.len());
    assert!(out.iter().all(is_odd));
    let expected: Vec<i32> = xs.iter().copied().filter(is_odd).collect();
    assert_eq!(out, expected);
}

#[test]
fn find_first_scenarios() {
    assert_eq!(find_first(Some(&[2, 4, 6][..]), Some(is_odd)), (0, false));
    assert_eq!(find_first(Some(&[2, 7, 9][..]), Some(is_odd)), (7, true));
    assert_eq!(find_first(None::<&[i32]>, Some(is_odd)), (0, false));
}

#[test]
fn missing_predicate_panics_with_contract_message() {
    let xs = [1, 2, 3];
    let res = std::panic::catch_unwind(|| filter(Some(&xs[..]), None::<Predicate<i32>>));
    let payload = res.unwrap_err();
    let msg = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or_default();
    assert_eq!(msg, ContractError::PredicateNotProvided.to_string());
}

#[test]
fn map_int_to_int_and_int_to_string() {
    let xs = [1, 2, 4];
    assert_eq!(
        map(Some(&xs[..]), Some(|i: &i32| Ok::<_, String>(2 * i))),
        Some(vec![2, 4, 8])
    );
    assert_eq!(
        map(Some(&[1, 2, 3][..]), Some(|i: &i32| Ok::<_, String>(i.to_string()))),
        Some(vec!["1".to_string(), "2".to_string(), "3".to_string()])
    );
}

#[test]
fn map_skips_unparseable_strings() {
    let xs = ["1", "2", "3", "wtf"];
    assert_eq!(
        map(Some(&xs[..]), Some(|s: &&str| s.parse::<i32>())),
        Some(vec![1, 2, 3])
    );
}

#[test]
fn map_results_can_be_chained() {
    let xs = ["1", "2", "3", "wtf"];
    let parsed = map(Some(&xs[..]), Some(|s: &&str| s.parse::<i32>()));
    let doubled = map(parsed.as_deref(), Some(|i: &i32| Ok::<_, String>(2 * i)));
    assert_eq!(doubled, Some(vec![2, 4, 6]));

    // Absence flows through a chain untouched.
    let parsed = map(None::<&[&str]>, Some(|s: &&str| s.parse::<i32>()));
    let doubled = map(parsed.as_deref(), Some(|i: &i32| Ok::<_, String>(2 * i)));
    assert_eq!(doubled, None);
}

#[test]
fn map_never_failing_keeps_length_and_positions() {
    let xs: Vec<i32> = (0..50).collect();
    let out = map(Some(xs.as_slice()), Some(|i: &i32| Ok::<_, String>(i + 100))).unwrap();
    assert_eq!(out.len(), xs.len());
    for (x, y) in xs.iter().zip(&out) {
        assert_eq!(*y, x + 100);
    }
}

#[test]
fn try_map_fail_on_even() {
    let fail_on_even = |i: &i32| {
        if i % 2 == 0 {
            Err(format!("{i} is even"))
        } else {
            Ok(*i)
        }
    };
    let err = try_map(Some(&[1, 3, 2, 4][..]), Some(fail_on_even)).unwrap_err();
    match err {
        TryMapError::Transform { partial, reason } => {
            assert_eq!(partial, vec![1, 3]);
            assert_eq!(reason, "2 is even");
        }
        other => panic!("unexpected error {other:?}"),
    }

    assert_eq!(
        try_map(Some(&[1, 3, 5][..]), Some(fail_on_even)).unwrap(),
        Some(vec![1, 3, 5])
    );
}

#[test]
fn try_map_missing_transformation_vs_absent_input() {
    let none = None::<Transformation<i32, i32, String>>;
    assert_eq!(try_map(None::<&[i32]>, none).unwrap(), None);

    let err = try_map(Some(&[1][..]), none).unwrap_err();
    assert_eq!(err.to_string(), "transformation is not provided");
    assert_eq!(err.into_parts(), (None, None));
}
