//! Layer selection logic for the map view.
//!
//! The selection is a set of ids: subcategory ids plus category ids, where a
//! category's own id doubles as the key for locations filed directly under it
//! with no subcategory.

use std::collections::HashSet;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Derived checkbox state for a category over the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    None,
    Partial,
    Full,
}

/// Selection keys of a category: its subcategory ids plus its own id
fn category_keys(category_id: Uuid, subcategory_ids: &[Uuid]) -> Vec<Uuid> {
    let mut keys = subcategory_ids.to_vec();
    keys.push(category_id);
    keys
}

/// Derive the tri-state for a category.
///
/// "Full" requires every subcategory id and the category's own id to be in
/// the selection; any other non-empty intersection is "Partial".
pub fn selection_state(
    category_id: Uuid,
    subcategory_ids: &[Uuid],
    selected: &HashSet<Uuid>,
) -> SelectionState {
    let keys = category_keys(category_id, subcategory_ids);
    let present = keys.iter().filter(|k| selected.contains(k)).count();

    if present == 0 {
        SelectionState::None
    } else if present == keys.len() {
        SelectionState::Full
    } else {
        SelectionState::Partial
    }
}

/// Toggle a category checkbox: an all-or-nothing bulk toggle.
///
/// Adds every key of `{s1..sn, category_id}` not yet present, or removes all
/// of them when the category is already fully selected.
pub fn toggle_category(
    category_id: Uuid,
    subcategory_ids: &[Uuid],
    selected: &mut HashSet<Uuid>,
) {
    let keys = category_keys(category_id, subcategory_ids);

    if selection_state(category_id, subcategory_ids, selected) == SelectionState::Full {
        for key in keys {
            selected.remove(&key);
        }
    } else {
        for key in keys {
            selected.insert(key);
        }
    }
}

/// Toggle a single subcategory (or bare-category) id
pub fn toggle_subcategory(id: Uuid, selected: &mut HashSet<Uuid>) {
    if !selected.insert(id) {
        selected.remove(&id);
    }
}

/// Whether a location passes the current selection set.
///
/// A location with a subcategory matches by its subcategory id; one filed
/// directly under a category matches by the category id; uncategorized
/// locations never match an active selection.
pub fn matches_selection(
    category_id: Option<Uuid>,
    subcategory_id: Option<Uuid>,
    selected: &HashSet<Uuid>,
) -> bool {
    match (subcategory_id, category_id) {
        (Some(sub), _) => selected.contains(&sub),
        (None, Some(cat)) => selected.contains(&cat),
        (None, None) => false,
    }
}

/// Case-insensitive substring search over name, description and address
pub fn matches_search(
    query: &str,
    name: &str,
    description: Option<&str>,
    address: Option<&str>,
) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    name.to_lowercase().contains(&query)
        || description
            .map(|d| d.to_lowercase().contains(&query))
            .unwrap_or(false)
        || address
            .map(|a| a.to_lowercase().contains(&query))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn test_category_toggle_adds_and_removes_exactly_its_keys() {
        let category = Uuid::new_v4();
        let subs = ids(2);
        let mut selected = HashSet::new();

        toggle_category(category, &subs, &mut selected);
        assert_eq!(selected.len(), 3);
        assert!(selected.contains(&category));
        assert!(selected.contains(&subs[0]));
        assert!(selected.contains(&subs[1]));

        toggle_category(category, &subs, &mut selected);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_category_toggle_completes_a_partial_selection() {
        let category = Uuid::new_v4();
        let subs = ids(2);
        let mut selected: HashSet<Uuid> = [subs[0]].into_iter().collect();

        // Partial selections are completed, not cleared
        toggle_category(category, &subs, &mut selected);
        assert_eq!(
            selection_state(category, &subs, &selected),
            SelectionState::Full
        );
    }

    #[test]
    fn test_tri_state_derivation() {
        let category = Uuid::new_v4();
        let subs = ids(2);

        let empty = HashSet::new();
        assert_eq!(
            selection_state(category, &subs, &empty),
            SelectionState::None
        );

        let partial: HashSet<Uuid> = [subs[0]].into_iter().collect();
        assert_eq!(
            selection_state(category, &subs, &partial),
            SelectionState::Partial
        );

        // All subcategories but not the category's own id is still partial
        let subs_only: HashSet<Uuid> = subs.iter().copied().collect();
        assert_eq!(
            selection_state(category, &subs, &subs_only),
            SelectionState::Partial
        );

        let full: HashSet<Uuid> = subs.iter().copied().chain([category]).collect();
        assert_eq!(
            selection_state(category, &subs, &full),
            SelectionState::Full
        );
    }

    #[test]
    fn test_toggle_subcategory_flips_one_id() {
        let id = Uuid::new_v4();
        let other = Uuid::new_v4();
        let mut selected: HashSet<Uuid> = [other].into_iter().collect();

        toggle_subcategory(id, &mut selected);
        assert!(selected.contains(&id));
        assert!(selected.contains(&other));

        toggle_subcategory(id, &mut selected);
        assert!(!selected.contains(&id));
        assert!(selected.contains(&other));
    }

    #[test]
    fn test_matches_selection_uses_category_id_for_bare_locations() {
        let category = Uuid::new_v4();
        let sub = Uuid::new_v4();
        let selected: HashSet<Uuid> = [category].into_iter().collect();

        assert!(matches_selection(Some(category), None, &selected));
        // Subcategorized location matches by subcategory id only
        assert!(!matches_selection(Some(category), Some(sub), &selected));
        // Uncategorized locations never match an active selection
        assert!(!matches_selection(None, None, &selected));
    }

    #[test]
    fn test_matches_search_is_case_insensitive_over_all_fields() {
        assert!(matches_search("balai", "Balai Desa", None, None));
        assert!(matches_search(
            "krajan",
            "Balai Desa",
            None,
            Some("Jl. Raya Krajan No. 1")
        ));
        assert!(matches_search(
            "pemerintahan",
            "Balai Desa",
            Some("Pusat PEMERINTAHAN desa"),
            None
        ));
        assert!(!matches_search("sekolah", "Balai Desa", None, None));
    }

    #[test]
    fn test_matches_search_empty_query_matches_everything() {
        assert!(matches_search("", "Balai Desa", None, None));
        assert!(matches_search("   ", "Balai Desa", None, None));
    }
}
