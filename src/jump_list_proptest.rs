#![cfg(test)]

// Property tests for JumpList kept inside the crate so they can check the
// structural invariants of the raw layer after every operation.

use crate::compare::{Compare, Natural};
use crate::jump_list::JumpList;
use crate::level::{GeometricLevelGenerator, LevelGenerator};
use crate::position::Position;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};
use std::ops::Bound;

// A small key domain keeps duplicates, hits and misses all frequent.
#[derive(Clone, Debug)]
enum Op {
    Insert(i8),
    EraseValue(i8),
    ErasePos(i8),
    EraseRange(i8, i8),
    Find(i8),
    Bounds(i8),
    PopFirst,
    PopLast,
    Walk,
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => any::<i8>().prop_map(Op::Insert),
        2 => any::<i8>().prop_map(Op::EraseValue),
        2 => any::<i8>().prop_map(Op::ErasePos),
        1 => (any::<i8>(), any::<i8>()).prop_map(|(a, b)| Op::EraseRange(a, b)),
        2 => any::<i8>().prop_map(Op::Find),
        2 => any::<i8>().prop_map(Op::Bounds),
        1 => Just(Op::PopFirst),
        1 => Just(Op::PopLast),
        1 => Just(Op::Walk),
        1 => Just(Op::Clear),
    ]
}

fn first_at_least(model: &BTreeSet<i8>, k: i8) -> Option<i8> {
    model.range(k..).next().copied()
}

fn first_above(model: &BTreeSet<i8>, k: i8) -> Option<i8> {
    model
        .range((Bound::Excluded(k), Bound::Unbounded))
        .next()
        .copied()
}

fn run<G: LevelGenerator>(mut sut: JumpList<i8, Natural, G>, ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut model: BTreeSet<i8> = BTreeSet::new();
    let mut live: HashMap<i8, Position> = HashMap::new();
    let mut stale: Vec<Position> = Vec::new();

    for op in ops {
        match op {
            Op::Insert(v) => {
                let (pos, inserted) = sut.insert(v);
                prop_assert_eq!(inserted, model.insert(v));
                prop_assert_eq!(pos.get(&sut), Some(&v));
                if inserted {
                    live.insert(v, pos);
                } else {
                    prop_assert_eq!(live.get(&v), Some(&pos), "duplicate must report the tracked position");
                }
            }
            Op::EraseValue(v) => {
                let n = sut.erase_value(&v);
                prop_assert_eq!(n, usize::from(model.remove(&v)));
                if let Some(p) = live.remove(&v) {
                    stale.push(p);
                }
            }
            Op::ErasePos(v) => {
                let pos = sut.find(&v);
                let next = sut.erase(pos);
                if model.remove(&v) {
                    stale.extend(live.remove(&v));
                    prop_assert_eq!(next.get(&sut).copied(), first_above(&model, v));
                } else {
                    prop_assert!(pos.is_end());
                    prop_assert!(next.is_end());
                }
            }
            Op::EraseRange(a, b) => {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                let first = sut.lower_bound(&lo);
                let last = sut.lower_bound(&hi);
                let ret = sut.erase_range(first, last);
                prop_assert_eq!(ret, last);
                let doomed: Vec<i8> = model.range(lo..hi).copied().collect();
                for v in doomed {
                    model.remove(&v);
                    stale.extend(live.remove(&v));
                }
            }
            Op::Find(v) => {
                let pos = sut.find(&v);
                prop_assert_eq!(pos.is_end(), !model.contains(&v));
                prop_assert_eq!(sut.contains(&v), model.contains(&v));
                prop_assert_eq!(sut.count(&v), usize::from(model.contains(&v)));
                if !pos.is_end() {
                    prop_assert_eq!(live.get(&v), Some(&pos), "find must return the stable position");
                }
            }
            Op::Bounds(v) => {
                prop_assert_eq!(sut.lower_bound(&v).get(&sut).copied(), first_at_least(&model, v));
                prop_assert_eq!(sut.upper_bound(&v).get(&sut).copied(), first_above(&model, v));
                let (a, b) = sut.equal_range(&v);
                if model.contains(&v) {
                    prop_assert_eq!(a.get(&sut), Some(&v));
                    prop_assert_eq!(b.get(&sut).copied(), first_above(&model, v));
                } else {
                    prop_assert!(a.is_end() && b.is_end());
                }
            }
            Op::PopFirst => {
                let expect = model.pop_first();
                prop_assert_eq!(sut.pop_first(), expect);
                if let Some(v) = expect {
                    stale.extend(live.remove(&v));
                }
            }
            Op::PopLast => {
                let expect = model.pop_last();
                prop_assert_eq!(sut.pop_last(), expect);
                if let Some(v) = expect {
                    stale.extend(live.remove(&v));
                }
            }
            Op::Walk => {
                // Forward and backward via positions, and via iterators.
                let mut fwd = Vec::new();
                let mut p = sut.begin();
                while let Some(v) = p.get(&sut) {
                    fwd.push(*v);
                    p = sut.next(p);
                }
                let mut bwd = Vec::new();
                let mut p = sut.prev(sut.end());
                while let Some(v) = p.get(&sut) {
                    bwd.push(*v);
                    p = sut.prev(p);
                }
                bwd.reverse();
                let expect: Vec<i8> = model.iter().copied().collect();
                prop_assert_eq!(&fwd, &expect);
                prop_assert_eq!(&bwd, &expect);
                prop_assert!(sut.iter().rev().copied().eq(model.iter().rev().copied()));
            }
            Op::Clear => {
                sut.clear();
                model.clear();
                stale.extend(live.drain().map(|(_, p)| p));
            }
        }

        let compare = sut.comparator();
        sut.raw().assert_invariants(|a, b| compare.less(a, b));
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.first(), model.first());
        prop_assert_eq!(sut.last(), model.last());
        for p in &stale {
            prop_assert!(p.get(&sut).is_none(), "stale position must not resolve");
        }
        for (v, p) in &live {
            prop_assert_eq!(p.get(&sut), Some(v));
        }
    }
    Ok(())
}

// Property: state-machine equivalence against BTreeSet with the default
// generator. After every op the six structural invariants hold, positions
// of live elements resolve to them and erased positions stay dead.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(seed in any::<u64>(), ops in proptest::collection::vec(arb_op(), 1..200)) {
        run(JumpList::with_seed(seed), ops)?;
    }
}

// Property: same model, with a generator that promotes often and caps low, so
// most nodes are tall and the max level grows and shrinks constantly.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_tall_towers(seed in any::<u64>(), ops in proptest::collection::vec(arb_op(), 1..200)) {
        let g = GeometricLevelGenerator::with_seed_and_probability(seed, 0.85, 6);
        run(JumpList::with_comparator_and_generator(Natural, g), ops)?;
    }
}

// Property: a deep copy has equal contents, passes the invariants on its own
// and is independent of the source.
proptest! {
    #[test]
    fn prop_clone_is_independent(values in proptest::collection::vec(any::<i16>(), 0..300), extra in any::<i16>()) {
        let mut a: JumpList<i16> = values.iter().copied().collect();
        let b = a.clone();
        prop_assert_eq!(&a, &b);
        b.raw().assert_invariants(|x, y| x < y);

        let had = b.contains(&extra);
        a.erase_value(&extra);
        prop_assert_eq!(b.contains(&extra), had);
        if had {
            prop_assert!(a != b);
        }
    }
}
