//! Worked examples for the generators and combinators.

use lazyseq::prelude::*;
use test_case::test_case;

#[test_case(0, 5 => vec![0, 1, 2, 3, 4] ; "counts up")]
#[test_case(5, 5 => Vec::<i32>::new() ; "equal bounds are empty")]
#[test_case(-3, 0 => vec![-3, -2, -1] ; "negative start")]
fn range_elements(start: i32, end: i32) -> Vec<i32> {
    range(start, end).to_array()
}

#[test_case(0, 10, 3 => vec![0, 3, 6, 9] ; "positive step")]
#[test_case(10, 0, -3 => vec![10, 7, 4, 1] ; "negative step")]
#[test_case(0, 4, 2 => vec![0, 2] ; "exact multiple")]
#[test_case(0, 10, -2 => Vec::<i32>::new() ; "step away from end")]
fn range_step_elements(start: i32, end: i32, step: i32) -> Vec<i32> {
    range_step(start, end, step).to_array()
}

#[test_case("ab,c,", "," => vec!["ab", "c", ""] ; "trailing separator")]
#[test_case("abc", "," => vec!["abc"] ; "no occurrence")]
#[test_case("abc", "" => vec!["a", "b", "c"] ; "empty separator")]
#[test_case(",a", "," => vec!["", "a"] ; "leading separator")]
fn split_pieces(text: &str, sep: &str) -> Vec<String> {
    split(text, sep).to_array()
}

#[test_case(vec![1, 2, 3] => vec![1, 0, 2, 0, 3] ; "several")]
#[test_case(vec![1] => vec![1] ; "single")]
#[test_case(vec![] => Vec::<i32>::new() ; "empty")]
fn intersperse_zero(items: Vec<i32>) -> Vec<i32> {
    from_array(items).intersperse(0).to_array()
}

#[test]
fn product_pairs_with_receiver_fastest() {
    let pairs = range(1, 4).product(from_array(vec!['a', 'b'])).to_array();
    assert_eq!(pairs.len(), 6);
    assert_eq!(
        pairs,
        vec![(1, 'a'), (2, 'a'), (3, 'a'), (1, 'b'), (2, 'b'), (3, 'b')]
    );
}

#[test]
fn pipeline_over_generated_source() {
    // collatz trajectory of 6, squared, odd terms only
    let collatz = generate(Some(6u64), |n| {
        let n = n?;
        let next = match n {
            1 => None,
            n if n % 2 == 0 => Some(n / 2),
            n => Some(3 * n + 1),
        };
        Some((next, n))
    });

    let odd_squares = collatz.filter(|n| n % 2 == 1).map(|n| n * n).to_array();
    assert_eq!(odd_squares, vec![9, 25, 1]);
}

#[test]
fn find_on_infinite_sequence() {
    let first = from_map(|i| i * i).find(|sq| *sq > 50);
    assert_eq!(first, Some(64));
}

#[test]
fn dynamic_branches_feed_the_same_consumer() {
    fn source(reverse: bool) -> DynIter<'static, u32> {
        if reverse {
            range(0u32, 4).reverse().to_dyn()
        } else {
            range(0u32, 4).to_dyn()
        }
    }

    let sums: Vec<u32> = [true, false]
        .into_iter()
        .map(|r| source(r).zip(count_up(1u32)).map(|(x, w)| x * w).sum())
        .collect();
    // 3*1 + 2*2 + 1*3 + 0*4 and 0*1 + 1*2 + 2*3 + 3*4
    assert_eq!(sums, vec![10, 20]);
}

#[test]
fn collect_m_over_parsed_input() {
    let parsed: Result<Vec<i32>, std::num::ParseIntError> =
        split("4,8,15", ",").map(|s| s.parse::<i32>()).collect_m();
    assert_eq!(parsed.unwrap(), vec![4, 8, 15]);

    let failed: Result<Vec<i32>, std::num::ParseIntError> =
        split("4,x,15", ",").map(|s| s.parse::<i32>()).collect_m();
    assert!(failed.is_err());
}

#[test]
fn try_front_reports_exhaustion() {
    assert_eq!(range(2, 2).try_front(), Err(Error::Exhausted));
    assert_eq!(range(2, 3).try_front(), Ok(2));
}
