//! Display ordering for choice lists

/// Sort `(value, label)` pairs by lowercased label, ascending.
///
/// The sort is stable: labels that compare equal keep their original
/// relative order. Control entries never pass through here; menus place them
/// around the ordered children.
pub fn order_by_label<T>(mut entries: Vec<(T, String)>) -> Vec<(T, String)> {
    entries.sort_by_cached_key(|(_, label)| label.to_lowercase());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn labels<T>(entries: &[(T, String)]) -> Vec<&str> {
        entries.iter().map(|(_, l)| l.as_str()).collect()
    }

    #[test]
    fn test_case_insensitive() {
        let entries = vec![
            (0, "Midterm".to_string()),
            (1, "final".to_string()),
            (2, "Quiz1".to_string()),
        ];
        assert_eq!(labels(&order_by_label(entries)), vec!["final", "Midterm", "Quiz1"]);
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let entries = vec![
            (0, "hw".to_string()),
            (1, "HW".to_string()),
            (2, "Hw".to_string()),
        ];
        let ordered = order_by_label(entries);
        let ids: Vec<i32> = ordered.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    proptest! {
        #[test]
        fn prop_sorted_and_stable(raw in prop::collection::vec("[a-cA-C]{0,3}", 0..20)) {
            let entries: Vec<(usize, String)> = raw.into_iter().enumerate().collect();
            let ordered = order_by_label(entries.clone());

            prop_assert_eq!(ordered.len(), entries.len());
            for pair in ordered.windows(2) {
                let (a_id, a) = &pair[0];
                let (b_id, b) = &pair[1];
                let (a_key, b_key) = (a.to_lowercase(), b.to_lowercase());
                prop_assert!(a_key <= b_key);
                if a_key == b_key {
                    prop_assert!(a_id < b_id);
                }
            }
        }

        #[test]
        fn prop_idempotent(raw in prop::collection::vec("[a-zA-Z0-9 ]{0,6}", 0..20)) {
            let entries: Vec<(usize, String)> = raw.into_iter().enumerate().collect();
            let once = order_by_label(entries);
            let twice = order_by_label(once.clone());
            prop_assert_eq!(once, twice);
        }
    }
}
