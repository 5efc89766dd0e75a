use core::cmp::Ordering;

use super::ForwardList;

/// two lists are equal when they are the same list, or when they hold equal
/// elements in the same order. lists of different lengths are rejected
/// before any element is compared
impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }

        if self.len() != other.len() {
            return false;
        }

        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

/// lexicographic ordering over the elements front to back. a list that is a
/// strict prefix of another orders before it.
///
/// `<` only ever asks the elements `<`, and `>` only ever asks `>`. `<=` and
/// `>=` are `==` combined with the strict comparison, and `partial_cmp` is
/// built from the same three answers, so for element types without a total
/// order every operator agrees with `partial_cmp`.
impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self < other {
            Some(Ordering::Less)
        } else if self > other {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        lexicographically_before(self, other, |a, b| a < b)
    }

    fn le(&self, other: &Self) -> bool {
        self == other || self < other
    }

    fn gt(&self, other: &Self) -> bool {
        lexicographically_before(other, self, |a, b| b > a)
    }

    fn ge(&self, other: &Self) -> bool {
        self == other || self > other
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

/// returns true if `lhs` comes first under `before`: the first pair where one
/// side is `before` the other decides, otherwise the shorter list comes first
fn lexicographically_before<T>(
    lhs: &ForwardList<T>,
    rhs: &ForwardList<T>,
    before: impl Fn(&T, &T) -> bool,
) -> bool {
    let mut rhs_iter = rhs.iter();
    for a in lhs.iter() {
        match rhs_iter.next() {
            None => return false,
            Some(b) => {
                if before(a, b) {
                    return true;
                }
                if before(b, a) {
                    return false;
                }
            }
        }
    }
    rhs_iter.next().is_some()
}


#[cfg(all(not(miri), test))]
mod proptests {
    use proptest::collection::vec;
    use proptest::prelude::*;
    use proptest_derive::Arbitrary;

    use super::*;

    #[derive(Arbitrary, Debug)]
    enum Comparison {
        Eq,
        Ne,
        Lt,
        Le,
        Gt,
        Ge,
        Cmp,
        PartialCmp,
    }

    proptest! {
        #[test]
        fn comparisons_match_slice_comparisons(
            lhs in vec(0u8..4, 0..6),
            rhs in vec(0u8..4, 0..6),
            comparisons in vec(any::<Comparison>(), 1..8),
        ) {
            let a: ForwardList<u8> = lhs.iter().copied().collect();
            let b: ForwardList<u8> = rhs.iter().copied().collect();

            for comparison in comparisons.iter() {
                match comparison {
                    Comparison::Eq => prop_assert_eq!(a == b, lhs == rhs),
                    Comparison::Ne => prop_assert_eq!(a != b, lhs != rhs),
                    Comparison::Lt => prop_assert_eq!(a < b, lhs < rhs),
                    Comparison::Le => prop_assert_eq!(a <= b, lhs <= rhs),
                    Comparison::Gt => prop_assert_eq!(a > b, lhs > rhs),
                    Comparison::Ge => prop_assert_eq!(a >= b, lhs >= rhs),
                    Comparison::Cmp => prop_assert_eq!(a.cmp(&b), lhs.cmp(&rhs)),
                    Comparison::PartialCmp => {
                        prop_assert_eq!(a.partial_cmp(&b), lhs.partial_cmp(&rhs))
                    }
                }
            }
        }

        #[test]
        fn le_and_ge_agree_with_eq_and_strict_order(
            lhs in vec(0u8..3, 0..5),
            rhs in vec(0u8..3, 0..5),
        ) {
            let a: ForwardList<u8> = lhs.into_iter().collect();
            let b: ForwardList<u8> = rhs.into_iter().collect();
            prop_assert_eq!(a <= b, a == b || a < b);
            prop_assert_eq!(a >= b, a == b || a > b);
            prop_assert!(!(a < b && a > b));
        }
    }
}
