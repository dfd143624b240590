#[allow(unused_macros)]
macro_rules! test_group_distance {
    ($group_name:ident,$($ident:ident:$a:expr,$b:expr,$cost:expr=>$expected:literal),*) => {
    mod $group_name {
        use crate::lev;
        use pretty_assertions::assert_eq;

        $(
            #[test]
            fn $ident() {
                let a = $a;
                let b = $b;
                assert_eq!(lev::distance_with_cost(&a[..], &b[..], $cost), $expected);
                // insertion and deletion cost the same, so argument order must not matter
                assert_eq!(lev::distance_with_cost(&b[..], &a[..], $cost), $expected);
            }
        )*
        }
    };
}

#[cfg(test)]
mod should_match {
    test_group_distance! {
        scenarios,
        // https://en.wikipedia.org/wiki/Levenshtein_distance#Example
        kitten_sitting: "kitten".as_bytes(), "sitting".as_bytes(), 1 => 3,
        empty_abc: "".as_bytes(), "abc".as_bytes(), 1 => 3,
        identical: "abc".as_bytes(), "abc".as_bytes(), 1 => 0,
        single_substitution: "abc".as_bytes(), "abd".as_bytes(), 1 => 1,
        expensive_substitution: "abc".as_bytes(), "abd".as_bytes(), 5 => 2,
        reversed_numbers: [1, 2, 3], [3, 2, 1], 1 => 2
    }

    test_group_distance! {
        empty,
        both: "".as_bytes(), "".as_bytes(), 1 => 0,
        both_free_substitution: "".as_bytes(), "".as_bytes(), 0 => 0,
        left: "".as_bytes(), "sqlite".as_bytes(), 7 => 6,
        right: "select".as_bytes(), "".as_bytes(), 0 => 6
    }

    test_group_distance! {
        words,
        flaw_lawn: "flaw".as_bytes(), "lawn".as_bytes(), 1 => 2,
        saturday_sunday: "saturday".as_bytes(), "sunday".as_bytes(), 1 => 3,
        book_back: "book".as_bytes(), "back".as_bytes(), 1 => 2,
        prefix: "sel".as_bytes(), "select".as_bytes(), 1 => 3,
        transposition: "ab".as_bytes(), "ba".as_bytes(), 1 => 2
    }

    test_group_distance! {
        substitution_cost,
        free: "abc".as_bytes(), "xyz".as_bytes(), 0 => 0,
        free_with_padding: "abc".as_bytes(), "wxyz".as_bytes(), 0 => 1,
        free_transposition: "ab".as_bytes(), "ba".as_bytes(), 0 => 0,
        two_equals_delete_insert: "abc".as_bytes(), "abd".as_bytes(), 2 => 2,
        three_prefers_delete_insert: "kitten".as_bytes(), "sitting".as_bytes(), 3 => 5,
        saturating: "a".as_bytes(), "b".as_bytes(), usize::MAX => 2
    }

    test_group_distance! {
        elements,
        chars: "héllo".chars().collect::<Vec<_>>(), "hello".chars().collect::<Vec<_>>(), 1 => 1,
        strs: ["select", "from", "t"], ["select", "*", "from", "t"], 1 => 1,
        unit: [(); 4], [(); 2], 1 => 2
    }
}

#[cfg(test)]
mod properties {
    use crate::lev::{distance, distance_with_cost};
    use pretty_assertions::assert_eq;

    const CORPUS: &[&str] = &[
        "",
        "a",
        "b",
        "ab",
        "ba",
        "abc",
        "acb",
        "kitten",
        "sitting",
        "select",
        "selct",
        "delete",
        "vacuum",
        "aaaaaa",
        "abababab",
    ];

    /// full matrix Wagner-Fischer, only used to cross check the two row version
    fn reference(a: &[u8], b: &[u8], cost: usize) -> usize {
        let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];
        for (i, row) in matrix.iter_mut().enumerate() {
            row[0] = i;
        }
        for j in 0..=b.len() {
            matrix[0][j] = j;
        }
        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let substitution = if a[i - 1] == b[j - 1] { 0 } else { cost };
                matrix[i][j] = (matrix[i - 1][j] + 1)
                    .min(matrix[i][j - 1] + 1)
                    .min(matrix[i - 1][j - 1] + substitution);
            }
        }
        matrix[a.len()][b.len()]
    }

    #[test]
    fn default_cost_is_one() {
        for a in CORPUS {
            for b in CORPUS {
                assert_eq!(
                    distance(a.as_bytes(), b.as_bytes()),
                    distance_with_cost(a.as_bytes(), b.as_bytes(), 1)
                );
            }
        }
    }

    #[test]
    fn identity() {
        for cost in 0..=4 {
            for a in CORPUS {
                assert_eq!(distance_with_cost(a.as_bytes(), a.as_bytes(), cost), 0);
            }
        }
    }

    #[test]
    fn symmetry() {
        for cost in 0..=4 {
            for a in CORPUS {
                for b in CORPUS {
                    assert_eq!(
                        distance_with_cost(a.as_bytes(), b.as_bytes(), cost),
                        distance_with_cost(b.as_bytes(), a.as_bytes(), cost),
                        "{:?} <-> {:?} with cost {}",
                        a,
                        b,
                        cost
                    );
                }
            }
        }
    }

    #[test]
    fn empty_is_length_of_other() {
        for cost in 0..=4 {
            for a in CORPUS {
                assert_eq!(distance_with_cost(a.as_bytes(), "".as_bytes(), cost), a.len());
                assert_eq!(distance_with_cost("".as_bytes(), a.as_bytes(), cost), a.len());
            }
        }
    }

    #[test]
    fn triangle_inequality() {
        for cost in 0..=2 {
            for a in CORPUS {
                for b in CORPUS {
                    for c in CORPUS {
                        let (a, b, c) = (a.as_bytes(), b.as_bytes(), c.as_bytes());
                        assert!(
                            distance_with_cost(a, c, cost)
                                <= distance_with_cost(a, b, cost) + distance_with_cost(b, c, cost)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn bounded_by_lengths() {
        for cost in 0..=4 {
            for a in CORPUS {
                for b in CORPUS {
                    let d = distance_with_cost(a.as_bytes(), b.as_bytes(), cost);
                    // deleting all of a and inserting all of b is always possible
                    assert!(d <= a.len() + b.len());
                    if cost <= 1 {
                        assert!(d <= a.len().max(b.len()));
                    }
                    assert!(d >= a.len().abs_diff(b.len()));
                }
            }
        }
    }

    #[test]
    fn matches_full_matrix() {
        for cost in 0..=4 {
            for a in CORPUS {
                for b in CORPUS {
                    assert_eq!(
                        distance_with_cost(a.as_bytes(), b.as_bytes(), cost),
                        reference(a.as_bytes(), b.as_bytes(), cost),
                        "{:?} <-> {:?} with cost {}",
                        a,
                        b,
                        cost
                    );
                }
            }
        }
    }
}
