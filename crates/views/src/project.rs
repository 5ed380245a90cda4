//! The projector: filter, then stable sort.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use shopfront_core::{Listable, SortKey, StatusFilter};

/// Derive the display sequence from the raw fetched records.
///
/// The status predicate runs before the comparator. Every comparator is
/// stable (ties keep their input order) and uses no secondary key. The
/// input is never mutated; a new sequence is returned, so re-running on
/// the same inputs yields the same output.
pub fn project<T>(items: &[T], status_filter: StatusFilter, sort_key: SortKey) -> Vec<T>
where
    T: Listable + Clone,
{
    let mut projected: Vec<T> = items
        .iter()
        .filter(|item| status_filter.matches(*item))
        .cloned()
        .collect();

    match sort_key {
        SortKey::Name => {
            projected.sort_by_cached_key(|item| item.sort_name().to_lowercase());
        }
        SortKey::Price => projected.sort_by_key(Listable::price_cents),
        SortKey::Date => projected.sort_by_key(|item| Reverse(timestamp(item))),
        SortKey::StockLevel => projected.sort_by_key(Listable::stock),
    }

    projected
}

fn timestamp<T: Listable>(item: &T) -> DateTime<Utc> {
    item.created_at().unwrap_or(DateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: String,
        price: i64,
        at: Option<DateTime<Utc>>,
        stock: i64,
        active: bool,
        /// Input position, for stability checks.
        tag: usize,
    }

    impl Listable for Item {
        fn sort_name(&self) -> &str {
            &self.name
        }
        fn price_cents(&self) -> i64 {
            self.price
        }
        fn created_at(&self) -> Option<DateTime<Utc>> {
            self.at
        }
        fn stock(&self) -> i64 {
            self.stock
        }
        fn is_active(&self) -> bool {
            self.active
        }
    }

    fn item(name: &str, tag: usize) -> Item {
        Item {
            name: name.to_string(),
            price: 0,
            at: None,
            stock: 1,
            active: true,
            tag,
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn name_sort_ignores_case() {
        let items = vec![item("banana", 0), item("Apple", 1), item("cherry", 2)];
        let out = project(&items, StatusFilter::All, SortKey::Name);
        let names: Vec<&str> = out.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn date_sort_is_descending_with_missing_last() {
        let mut a = item("a", 0);
        a.at = Some(day(5));
        let mut b = item("b", 1);
        b.at = Some(day(9));
        let c = item("c", 2);

        let out = project(&[a, b, c], StatusFilter::All, SortKey::Date);
        let names: Vec<&str> = out.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn filter_runs_before_the_comparator() {
        let mut off = item("aaa", 0);
        off.active = false;
        let on = item("zzz", 1);

        let out = project(&[off, on], StatusFilter::ActiveOnly, SortKey::Name);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "zzz");
    }

    #[test]
    fn input_is_left_untouched() {
        let items = vec![item("b", 0), item("a", 1)];
        let before = items.clone();
        let _ = project(&items, StatusFilter::All, SortKey::Name);
        assert_eq!(items, before);
    }

    fn arb_item() -> impl Strategy<Value = Item> {
        (
            "[a-d]{0,3}",
            0i64..50,
            proptest::option::of(1u32..28),
            0i64..8,
            any::<bool>(),
        )
            .prop_map(|(name, price, d, stock, active)| Item {
                name,
                price,
                at: d.map(day),
                stock,
                active,
                tag: 0,
            })
    }

    fn tagged(mut items: Vec<Item>) -> Vec<Item> {
        for (index, item) in items.iter_mut().enumerate() {
            item.tag = index;
        }
        items
    }

    fn arb_sort_key() -> impl Strategy<Value = SortKey> {
        prop_oneof![
            Just(SortKey::Name),
            Just(SortKey::Price),
            Just(SortKey::Date),
            Just(SortKey::StockLevel),
        ]
    }

    fn arb_filter() -> impl Strategy<Value = StatusFilter> {
        prop_oneof![
            Just(StatusFilter::All),
            Just(StatusFilter::ActiveOnly),
            Just(StatusFilter::InactiveOnly),
            Just(StatusFilter::LowStock),
        ]
    }

    proptest! {
        /// Property: projecting twice from the same inputs yields the same
        /// sequence (order and membership).
        #[test]
        fn projection_is_idempotent(
            items in proptest::collection::vec(arb_item(), 0..40),
            filter in arb_filter(),
            sort_key in arb_sort_key(),
        ) {
            let items = tagged(items);
            let first = project(&items, filter, sort_key);
            let second = project(&items, filter, sort_key);
            prop_assert_eq!(first, second);
        }

        /// Property: records with equal sort keys keep their relative
        /// input order under every comparator.
        #[test]
        fn equal_keys_keep_input_order(
            items in proptest::collection::vec(arb_item(), 0..40),
            sort_key in arb_sort_key(),
        ) {
            let items = tagged(items);
            let out = project(&items, StatusFilter::All, sort_key);

            for pair in out.windows(2) {
                let same_key = match sort_key {
                    SortKey::Name => {
                        pair[0].name.to_lowercase() == pair[1].name.to_lowercase()
                    }
                    SortKey::Price => pair[0].price == pair[1].price,
                    SortKey::Date => pair[0].at == pair[1].at,
                    SortKey::StockLevel => pair[0].stock == pair[1].stock,
                };
                if same_key {
                    prop_assert!(pair[0].tag < pair[1].tag);
                }
            }
        }

        /// Property: the activity filters partition the input exactly.
        #[test]
        fn activity_filter_selects_the_exact_subset(
            items in proptest::collection::vec(arb_item(), 0..40),
            sort_key in arb_sort_key(),
        ) {
            let items = tagged(items);

            let active = project(&items, StatusFilter::ActiveOnly, sort_key);
            prop_assert!(active.iter().all(|i| i.active));

            let inactive = project(&items, StatusFilter::InactiveOnly, sort_key);
            prop_assert!(inactive.iter().all(|i| !i.active));

            let everything = project(&items, StatusFilter::All, sort_key);
            prop_assert_eq!(
                active.len() + inactive.len(),
                items.len()
            );
            prop_assert_eq!(everything.len(), items.len());
        }
    }
}
