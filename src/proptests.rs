use super::*;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::BTreeMap;

fn validate_tree<K: Key, V>(t: &AvlTree<K, V>) {
    if let Err(e) = t.check_invariants() {
        panic!("invariant violated: {e}");
    }

    let mut visited = 0usize;
    t.visit_ascending(|_, _| {
        visited += 1;
        true
    });
    assert_eq!(visited, t.len(), "full walk must visit len() entries");
}

/// Keys come from a narrow range so that duplicates and removals of present
/// keys are common.
#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Insert(#[proptest(strategy = "0u16..256")] u16, u32),
    Remove(#[proptest(strategy = "0u16..256")] u16),
    Get(#[proptest(strategy = "0u16..256")] u16),
    StopAt(#[proptest(strategy = "0u16..256")] u16),
    Clear,
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // `Clear` is rare so trees get a chance to grow.
    let op = any::<Op>().prop_filter("clear is rare", |op| !matches!(op, Op::Clear));
    let ops = prop::collection::vec(op, 0..=2000);
    prop_oneof![
        50 => ops,
        1 => prop::collection::vec(any::<Op>(), 0..=200),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        max_local_rejects: 1_000_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t: AvlTree<u16, u32> = AvlTree::new();
        let mut m: BTreeMap<u16, u32> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let fresh = !m.contains_key(&key);
                    m.entry(key).or_insert(value);
                    prop_assert_eq!(t.insert(key, value), fresh);
                }
                Op::Remove(key) => {
                    prop_assert_eq!(t.remove(&key), m.remove(&key));
                }
                Op::Get(key) => {
                    prop_assert_eq!(t.get(&key).copied(), m.get(&key).copied());
                    prop_assert_eq!(t.contains_key(&key), m.contains_key(&key));
                }
                Op::StopAt(key) => {
                    let mut seen = Vec::new();
                    let completed = t.visit_ascending(|k, _| {
                        seen.push(*k);
                        *k < key
                    });
                    let expected: Vec<u16> = match m.range(key..).next() {
                        Some((stop, _)) => m.range(..=*stop).map(|(k, _)| *k).collect(),
                        None => m.keys().copied().collect(),
                    };
                    prop_assert_eq!(completed, m.range(key..).next().is_none());
                    prop_assert_eq!(seen, expected);
                }
                Op::Clear => {
                    t.clear();
                    m.clear();
                }
            }

            prop_assert_eq!(t.len(), m.len());
            validate_tree(&t);
        }

        let got: Vec<(u16, u32)> = t.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<(u16, u32)> = m.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(got, expected);

        let mut desc = Vec::new();
        t.visit_descending(|k, _| {
            desc.push(*k);
            true
        });
        let expected_desc: Vec<u16> = m.keys().rev().copied().collect();
        prop_assert_eq!(desc, expected_desc);
    }

    #[test]
    fn prop_descending_is_reverse_of_ascending(keys in prop::collection::vec(any::<i64>(), 0..=500)) {
        let t: AvlTree<i64, ()> = keys.into_iter().map(|k| (k, ())).collect();
        validate_tree(&t);

        let asc: Vec<i64> = t.keys().copied().collect();
        prop_assert!(asc.windows(2).all(|w| w[0] < w[1]));

        let mut desc: Vec<i64> = t.iter().rev().map(|(k, _)| *k).collect();
        desc.reverse();
        prop_assert_eq!(asc, desc);
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_insert_order_small_set() {
    let keys: Vec<u32> = (1..=7).collect();

    for_each_permutation(&keys, |perm| {
        let mut t: AvlTree<u32, u32> = AvlTree::new();
        for (i, k) in perm.iter().enumerate() {
            assert!(t.insert(*k, i as u32));
            validate_tree(&t);
        }
        for (i, k) in perm.iter().enumerate() {
            assert_eq!(t.get(k), Some(&(i as u32)));
        }
        // Seven keys always fit in height 2 or 3.
        assert!(t.height() <= 3);
        let got: Vec<u32> = t.keys().copied().collect();
        assert_eq!(got, keys);
    });
}

#[test]
fn exhaustive_remove_order_small_set() {
    let keys: Vec<u32> = (1..=7).collect();

    // Insert in a fixed order, then remove in all permutations.
    let base: AvlTree<u32, u32> = keys.iter().map(|k| (*k, k * 10)).collect();
    validate_tree(&base);

    for_each_permutation(&keys, |perm| {
        let mut t = base.clone();
        let mut m: BTreeMap<u32, u32> = keys.iter().map(|k| (*k, k * 10)).collect();

        for k in perm {
            assert_eq!(t.remove(&k), m.remove(&k));
            assert_eq!(t.remove(&k), None);
            assert_eq!(t.len(), m.len());
            validate_tree(&t);
            let got: Vec<u32> = t.keys().copied().collect();
            let expected: Vec<u32> = m.keys().copied().collect();
            assert_eq!(got, expected);
        }
        assert_eq!(t.len(), 0);
        assert!(t.root.is_none());
    });
}
