//! Property tests for roster invariants
//!
//! Random sequences of mutations must never break number uniqueness or the
//! active/inactive partition, and pagination must place every active slot
//! exactly once.

mod support;

use std::collections::HashSet;

use boardcount_core::{paginate, view, CommandInterpreter, PageCapacity};
use boardcount_domain::FilterMode;
use proptest::prelude::*;
use support::fresh_store;

#[derive(Debug, Clone)]
enum Op {
    Toggle(u32),
    Rename(u32, String),
    Add(String),
    Remove(String),
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Ali", "Bina", "Chandan", "Dipa", "", "ali"]).prop_map(String::from)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u32..=200).prop_map(Op::Toggle),
        (1u32..=200, name_strategy()).prop_map(|(n, name)| Op::Rename(n, name)),
        name_strategy().prop_map(Op::Add),
        name_strategy().prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_invariants_hold_after_any_mutation_sequence(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let (_backing, mut store) = fresh_store();

        for op in ops {
            match op {
                Op::Toggle(n) => { store.toggle_status(n).unwrap(); }
                Op::Rename(n, name) => { store.set_name(n, &name).unwrap(); }
                Op::Add(name) => { store.add_by_name(&name).unwrap(); }
                Op::Remove(name) => { store.remove_by_name(&name).unwrap(); }
            }

            let roster = store.roster();
            let counts = view::counts(roster);
            prop_assert_eq!(counts.active + counts.inactive, roster.len());

            let numbers: HashSet<u32> = roster.iter().map(|slot| slot.number).collect();
            prop_assert_eq!(numbers.len(), roster.len());

            let active = view::filter(roster, FilterMode::Active);
            let inactive = view::filter(roster, FilterMode::Inactive);
            prop_assert_eq!(active.len() + inactive.len(), roster.len());
            prop_assert!(active.iter().all(|slot| slot.is_active()));
            prop_assert!(inactive.iter().all(|slot| !slot.is_active()));
        }
    }

    #[test]
    fn prop_toggle_twice_is_identity(number in 1u32..=170) {
        let (_backing, mut store) = fresh_store();
        store.toggle_status(7).unwrap();
        let before = store.roster().clone();

        store.toggle_status(number).unwrap();
        store.toggle_status(number).unwrap();

        prop_assert_eq!(store.roster(), &before);
    }

    #[test]
    fn prop_pagination_places_each_active_slot_once(
        active in prop::collection::btree_set(1u32..=160, 0..160),
        half in 1usize..40,
    ) {
        let (_backing, mut store) = fresh_store();
        for &number in &active {
            store.toggle_status(number).unwrap();
        }
        let capacity = PageCapacity::new(half * 2).unwrap();
        let pages = paginate(store.roster(), capacity);

        prop_assert_eq!(pages.len(), active.len().div_ceil(capacity.get()));
        prop_assert!(pages.iter().all(|page| page.rows.len() == half));

        let placed: Vec<u32> = pages
            .iter()
            .flat_map(|page| {
                let left = page.rows.iter().filter_map(|row| row.left);
                let right = page.rows.iter().filter_map(|row| row.right);
                left.chain(right)
            })
            .map(|slot| slot.number)
            .collect();
        prop_assert_eq!(placed, active.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn prop_interpreter_never_panics(input in "\\PC{0,40}") {
        let (_backing, mut store) = fresh_store();
        let before = store.roster().len();
        let report = CommandInterpreter::default().execute(&mut store, &input).unwrap();
        prop_assert!(report.applied <= before + 1);
    }
}
