use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortable::prelude::*;

const SEQUENCES: [GapSequence; 3] = [
    GapSequence::Halving,
    GapSequence::Hibbard,
    GapSequence::Sedgewick,
];

#[test]
fn test_halving_gaps() {
    assert!(GapSequence::Halving.gaps(0).is_empty());
    assert!(GapSequence::Halving.gaps(1).is_empty());
    assert_eq!(GapSequence::Halving.gaps(2), vec![1]);
    assert_eq!(GapSequence::Halving.gaps(5), vec![2, 1]);
    assert_eq!(GapSequence::Halving.gaps(100), vec![50, 25, 12, 6, 3, 1]);
}

#[test]
fn test_hibbard_gaps() {
    assert!(GapSequence::Hibbard.gaps(1).is_empty());
    assert_eq!(GapSequence::Hibbard.gaps(2), vec![1]);
    assert_eq!(GapSequence::Hibbard.gaps(8), vec![7, 3, 1]);
    assert_eq!(GapSequence::Hibbard.gaps(100), vec![63, 31, 15, 7, 3, 1]);
}

#[test]
fn test_sedgewick_gaps() {
    assert!(GapSequence::Sedgewick.gaps(1).is_empty());
    assert_eq!(GapSequence::Sedgewick.gaps(2), vec![1]);
    assert_eq!(
        GapSequence::Sedgewick.gaps(1000),
        vec![929, 505, 209, 109, 41, 19, 5, 1]
    );
}

#[test]
fn test_gap_shape() {
    for sequence in SEQUENCES {
        for len in 2..2000 {
            let gaps = sequence.gaps(len);
            assert_eq!(gaps.last(), Some(&1), "{sequence:?}/{len}");
            assert!(gaps[0] < len, "{sequence:?}/{len}");
            assert!(gaps.windows(2).all(|w| w[0] > w[1]), "{sequence:?}/{len}");
        }
    }
}

#[test]
fn test_huge_length_does_not_overflow() {
    for sequence in SEQUENCES {
        let gaps = sequence.gaps(usize::MAX);
        assert_eq!(gaps.last(), Some(&1));
        assert!(gaps.windows(2).all(|w| w[0] > w[1]));
    }
}

#[test]
fn test_default_is_halving() {
    assert_eq!(GapSequence::default(), GapSequence::Halving);
}

#[test]
fn test_sort_with_each_sequence() {
    let mut rng = StdRng::seed_from_u64(99);

    for sequence in SEQUENCES {
        for _ in 0..100 {
            let len = rng.random_range(0..300);
            let input: Vec<i64> = (0..len).map(|_| rng.random_range(-500..500)).collect();

            let mut expected = input.clone();
            expected.sort();

            let sorted = shell::sort_with_gaps(&input, sequence, |a, b| a.cmp(b));
            assert_eq!(sorted, expected, "{sequence:?}");

            let descending = shell::sort_with_gaps(&input, sequence, |a, b| b.cmp(a));
            expected.reverse();
            assert_eq!(descending, expected, "{sequence:?}");
        }
    }
}
