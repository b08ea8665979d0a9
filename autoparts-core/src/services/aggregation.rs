//! 按商家分组

use std::collections::HashMap;

use autoparts_provider::PartResult;

use crate::types::VendorGroup;

/// Group name for rows without a vendor.
pub const UNKNOWN_VENDOR: &str = "Otra";

/// Vendor a row is grouped under.
pub fn vendor_key(item: &PartResult) -> &str {
    item.nombre_empresa
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(UNKNOWN_VENDOR)
}

/// Groups rows by vendor.
///
/// Groups appear in the order their vendor is first seen; rows keep their
/// input order inside each group. No row is dropped or repeated.
pub fn group(results: &[PartResult]) -> Vec<VendorGroup> {
    let mut groups: Vec<VendorGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in results {
        let key = vendor_key(item);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(VendorGroup {
                vendor_name: key.to_string(),
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].items.push(item.clone());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::row;

    fn names(groups: &[VendorGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.vendor_name.as_str()).collect()
    }

    #[test]
    fn two_vendors_in_first_seen_order() {
        let results = vec![
            row(1, Some("Pana Autoparts"), "Filtro de aire"),
            row(2, Some("Rivas Autoparts"), "Filtro de aceite"),
        ];

        let groups = group(&results);

        assert_eq!(names(&groups), vec!["Pana Autoparts", "Rivas Autoparts"]);
        assert!(groups.iter().all(|g| g.len() == 1));
    }

    #[test]
    fn order_is_first_appearance_not_alphabetical() {
        let results = vec![
            row(1, Some("Zeta Repuestos"), "a"),
            row(2, Some("Alfa Motors"), "b"),
            row(3, Some("Zeta Repuestos"), "c"),
            row(4, None, "d"),
            row(5, Some("Alfa Motors"), "e"),
        ];

        let groups = group(&results);

        assert_eq!(names(&groups), vec!["Zeta Repuestos", "Alfa Motors", "Otra"]);
        let zeta: Vec<i64> = groups[0].items.iter().map(|i| i.id).collect();
        assert_eq!(zeta, vec![1, 3]);
        let alfa: Vec<i64> = groups[1].items.iter().map(|i| i.id).collect();
        assert_eq!(alfa, vec![2, 5]);
    }

    #[test]
    fn missing_and_blank_vendors_go_to_otra() {
        let results = vec![
            row(1, None, "a"),
            row(2, Some(""), "b"),
            row(3, Some("   "), "c"),
        ];

        let groups = group(&results);

        assert_eq!(names(&groups), vec![UNKNOWN_VENDOR]);
        assert_eq!(groups[0].len(), 3);
    }

    #[test]
    fn no_row_lost_or_duplicated() {
        let vendors = [Some("A"), None, Some("B"), Some("A"), Some("C"), None];
        for len in 1..=vendors.len() {
            let results: Vec<PartResult> = vendors[..len]
                .iter()
                .zip(0_i64..)
                .map(|(vendor, id)| row(id, *vendor, "x"))
                .collect();

            let groups = group(&results);

            let total: usize = groups.iter().map(VendorGroup::len).sum();
            assert_eq!(total, results.len());
            let mut ids: Vec<i64> = groups
                .iter()
                .flat_map(|g| g.items.iter().map(|i| i.id))
                .collect();
            ids.sort_unstable();
            let expected: Vec<i64> = (0..).take(len).collect();
            assert_eq!(ids, expected);
        }
    }

    #[test]
    fn grouping_is_idempotent() {
        let results = vec![
            row(1, Some("Pana Autoparts"), "a"),
            row(2, None, "b"),
            row(3, Some("Pana Autoparts"), "c"),
        ];
        assert_eq!(group(&results), group(&results));
    }

    #[test]
    fn empty_input_gives_no_groups() {
        assert!(group(&[]).is_empty());
    }
}
