use std::collections::HashSet;

use classifier::digit_square_sum;
use fixgen::{generate, BenchmarkCase, GenParams};

/// Set-based reference classifier, independent of the Floyd implementation
/// the generator uses.
fn is_happy_reference(n: u64) -> bool {
    let mut seen = HashSet::new();
    let mut current = n;
    while current != 1 && seen.insert(current) {
        current = digit_square_sum(current);
    }
    current == 1
}

fn reference_count(start: u64, end: u64) -> u64 {
    (start..=end).filter(|&n| is_happy_reference(n)).count() as u64
}

/// Pulls the four integers out of a rendered benchmark line, the way a
/// downstream consumer would.
fn parse_line(line: &str) -> (u32, u64, u64, u64) {
    let index: u32 = line
        .split("happyNumbersBenchmark")
        .nth(1)
        .and_then(|rest| rest.split(' ').next())
        .and_then(|token| token.parse().ok())
        .expect("line should carry an index");
    let args: Vec<u64> = line
        .split('(')
        .nth(1)
        .and_then(|rest| rest.split(')').next())
        .expect("line should carry arguments")
        .split(", ")
        .map(|token| token.parse().expect("argument should be an integer"))
        .collect();
    assert_eq!(args.len(), 3, "expected start, end, count");
    (index, args[0], args[1], args[2])
}

#[test]
fn integration_counts_match_independent_reference() {
    for seed in [1, 7, 42, 0xdead_beef] {
        for case in generate(&GenParams::reference(seed)) {
            assert_eq!(
                case.happy_count,
                reference_count(case.start, case.end),
                "seed {seed} case {} disagrees with the reference count",
                case.index
            );
        }
    }
}

#[test]
fn integration_reference_run_emits_ten_ordered_cases() {
    let fixtures = generate(&GenParams::reference(5));
    assert_eq!(fixtures.len(), 10);
    for (i, case) in fixtures.iter().enumerate() {
        assert_eq!(case.index, i as u32);
    }
}

#[test]
fn integration_rendered_lines_round_trip_through_a_consumer() {
    for case in generate(&GenParams::reference(21)) {
        let (index, start, end, count) = parse_line(&case.to_string());
        assert_eq!(index, case.index);
        assert_eq!(start, case.start);
        assert_eq!(end, case.end);
        assert_eq!(count, case.happy_count);
    }
}

#[test]
fn integration_no_single_element_ranges() {
    // The reference generator always draws end strictly greater than start.
    let params = GenParams::new(200, 10_000, 1, 9).unwrap();
    for case in generate(&params) {
        assert_eq!(case.end, case.start + 1, "span bound 1 forces width 1");
    }
}

#[test]
fn integration_verify_holds_for_handmade_case() {
    // Happy numbers in [1, 10] are 1, 7, 10.
    let case = BenchmarkCase {
        index: 0,
        start: 1,
        end: 10,
        happy_count: 3,
    };
    assert!(case.verify());

    let wrong = BenchmarkCase {
        happy_count: 4,
        ..case
    };
    assert!(!wrong.verify());
}
