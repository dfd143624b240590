use proc::trace;

#[cfg(test)]
mod tests;

/// distance computes the difference between two sequences as the minimum number of single
/// element edits (insertions, deletions or substitutions) required to change one into the other
///
/// see: https://en.wikipedia.org/wiki/Levenshtein_distance
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    distance_with_cost(a, b, 1)
}

/// distance_with_cost is [distance] with a custom price for substituting one element by a
/// mismatched one, insertions and deletions always cost 1. A substitution more expensive than 2 is
/// never chosen, since deleting and inserting is cheaper.
///
/// Only two rows of the Wagner-Fischer matrix are kept, each as long as the shorter input, so
/// memory is O(min(|a|, |b|)) while time is O(|a| * |b|).
///
/// see: https://en.wikipedia.org/wiki/Wagner%E2%80%93Fischer_algorithm
#[trace]
pub fn distance_with_cost<T: PartialEq>(a: &[T], b: &[T], cost: usize) -> usize {
    // on equal length a is the shorter one, the result does not depend on it
    let (min_seq, max_seq) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let m = min_seq.len();
    let n = max_seq.len();

    // row i % 2 holds the distances of the first i elements of max_seq to every prefix of
    // min_seq, the other row holds those for i - 1
    let mut rows: [Vec<usize>; 2] = [(0..=m).collect(), vec![0; m + 1]];

    for i in 1..=n {
        let [even, odd] = &mut rows;
        let (previous, current) = if i % 2 == 0 {
            (&*odd, even)
        } else {
            (&*even, odd)
        };

        current[0] = i;
        for j in 1..=m {
            let substitution = if max_seq[i - 1] == min_seq[j - 1] {
                0
            } else {
                cost
            };
            current[j] = (previous[j] + 1)
                .min(current[j - 1] + 1)
                .min(previous[j - 1].saturating_add(substitution));
        }

        #[cfg(feature = "trace")]
        println!("{:>4} | {:?}", i, current);
    }

    rows[n % 2][m]
}
