use std::{cmp::Ordering, fmt::Debug};

use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::Comparator;

/// A number tagged with its position in the input.
///
/// Comparators under test only ever look at `num`, so `id` tells
/// whether equivalent items kept their relative order.
#[derive(Debug, Clone, Copy)]
pub struct Id {
    pub id: usize,
    pub num: i32,
}

impl Id {
    pub fn full_eq(self, other: Self) -> bool {
        self.id == other.id && self.num == other.num
    }

    pub fn full_eq_slice(xs: &[Self], ys: &[Self]) -> bool {
        xs.len() == ys.len() && xs.iter().zip(ys).all(|(&x, &y)| x.full_eq(y))
    }
}

pub fn ids(nums: &[i32]) -> impl Iterator<Item = Id> + Clone + '_ {
    nums.iter()
        .enumerate()
        .map(|(id, &num)| Id { id, num })
}

/// Checks reflexivity, antisymmetry and transitivity over every pair and triple of `items`.
pub fn check_weak_order<T, C>(cmp: &C, items: &[T]) -> TestCaseResult
where
    T: Debug,
    C: Comparator<T> + ?Sized,
{
    for a in items {
        prop_assert_eq!(
            cmp.compare(a, a),
            Ordering::Equal,
            "not reflexive at {:?}",
            a
        );

        for b in items {
            prop_assert_eq!(
                cmp.compare(a, b),
                cmp.compare(b, a).reverse(),
                "not antisymmetric at {:?}, {:?}",
                a,
                b
            );

            for c in items {
                if cmp.le(a, b) && cmp.le(b, c) {
                    prop_assert!(
                        cmp.le(a, c),
                        "not transitive at {:?}, {:?}, {:?}",
                        a,
                        b,
                        c
                    );
                }

                if cmp.equivalent(a, b) && cmp.equivalent(b, c) {
                    prop_assert!(
                        cmp.equivalent(a, c),
                        "equivalence not transitive at {:?}, {:?}, {:?}",
                        a,
                        b,
                        c
                    );
                }
            }
        }
    }

    Ok(())
}
