//! List view state: sorting and row selection.
//!
//! Both stores are plain data kept inside a signal by the owning list
//! component and always re-derived against the latest fetched rows, so
//! stale ids from a previous load never leak into an action.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply the direction to a comparator result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Ascending),
            "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// Column identifier of a sortable table.
pub trait SortColumn: Copy + PartialEq {
    fn as_str(&self) -> &'static str;
    fn parse(s: &str) -> Option<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortState<C: SortColumn> {
    pub column: C,
    pub direction: SortDirection,
}

impl<C: SortColumn> SortState<C> {
    pub fn new(column: C) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    /// Header-click semantics: same column flips the direction, a new
    /// column starts ascending.
    pub fn toggle(&mut self, column: C) {
        if self.column == column {
            self.direction = self.direction.flip();
        } else {
            self.column = column;
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn indicator(&self, column: C) -> &'static str {
        if self.column == column {
            match self.direction {
                SortDirection::Ascending => " ▲",
                SortDirection::Descending => " ▼",
            }
        } else {
            " ⇅"
        }
    }

    /// Compact string form used for localStorage persistence.
    pub fn encode(&self) -> String {
        format!("{}:{}", self.column.as_str(), self.direction.as_str())
    }

    pub fn decode(encoded: &str) -> Option<Self> {
        let (column, direction) = encoded.split_once(':')?;
        Some(Self {
            column: C::parse(column)?,
            direction: SortDirection::parse(direction)?,
        })
    }
}

/// Derived state of a "select all" header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    None,
    Partial,
    All,
}

/// Checked rows of a bulk-actionable table, by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState<I: Copy + Eq + Hash> {
    selected: HashSet<I>,
}

impl<I: Copy + Eq + Hash> SelectionState<I> {
    pub fn new() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }

    pub fn contains(&self, id: I) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn toggle(&mut self, id: I) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// "Select all" semantics: always clear first, then (if checked) take
    /// exactly the currently visible ids.
    pub fn set_all<T: IntoIterator<Item = I>>(&mut self, visible: T, checked: bool) {
        self.selected.clear();
        if checked {
            self.selected.extend(visible);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Ids to act on, restricted to the rows that are actually visible.
    pub fn visible_selected(&self, visible: &[I]) -> Vec<I> {
        visible
            .iter()
            .copied()
            .filter(|id| self.selected.contains(id))
            .collect()
    }

    pub fn select_all_state(&self, visible: &[I]) -> SelectAllState {
        if visible.is_empty() {
            return SelectAllState::None;
        }
        let count = visible
            .iter()
            .filter(|id| self.selected.contains(id))
            .count();
        if count == 0 {
            SelectAllState::None
        } else if count == visible.len() {
            SelectAllState::All
        } else {
            SelectAllState::Partial
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Col {
        Title,
        Price,
    }

    impl SortColumn for Col {
        fn as_str(&self) -> &'static str {
            match self {
                Col::Title => "title",
                Col::Price => "price",
            }
        }

        fn parse(s: &str) -> Option<Self> {
            match s {
                "title" => Some(Col::Title),
                "price" => Some(Col::Price),
                _ => None,
            }
        }
    }

    #[test]
    fn same_header_twice_flips_direction() {
        let mut sort = SortState::new(Col::Title);
        assert_eq!(sort.direction, SortDirection::Ascending);
        sort.toggle(Col::Title);
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.toggle(Col::Title);
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn different_header_resets_to_ascending() {
        let mut sort = SortState::new(Col::Title);
        sort.toggle(Col::Title); // now descending
        sort.toggle(Col::Price);
        assert_eq!(sort.column, Col::Price);
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn storage_encoding_round_trips() {
        let mut sort = SortState::new(Col::Price);
        sort.toggle(Col::Price);
        let encoded = sort.encode();
        assert_eq!(encoded, "price:desc");
        assert_eq!(SortState::<Col>::decode(&encoded), Some(sort));

        assert_eq!(SortState::<Col>::decode("bogus"), None);
        assert_eq!(SortState::<Col>::decode("price:sideways"), None);
        assert_eq!(SortState::<Col>::decode("weight:asc"), None);
    }

    #[test]
    fn direction_applies_to_comparator() {
        let ord = 1.cmp(&2);
        assert_eq!(SortDirection::Ascending.apply(ord), Ordering::Less);
        assert_eq!(SortDirection::Descending.apply(ord), Ordering::Greater);
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut selection = SelectionState::new();
        selection.toggle(1u32);
        selection.toggle(2u32);
        assert_eq!(selection.len(), 2);
        selection.toggle(1u32);
        assert!(!selection.contains(1));
        assert!(selection.contains(2));
    }

    #[test]
    fn set_all_takes_exactly_the_visible_ids() {
        let mut selection = SelectionState::new();
        selection.toggle(99u32); // from a previous filter
        selection.set_all([1, 2, 3], true);
        assert_eq!(selection.len(), 3);
        assert!(!selection.contains(99));

        selection.set_all([1, 2, 3], false);
        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_state_tristate() {
        let visible = vec![1u32, 2, 3];
        let mut selection = SelectionState::new();
        assert_eq!(selection.select_all_state(&visible), SelectAllState::None);

        selection.toggle(2);
        assert_eq!(selection.select_all_state(&visible), SelectAllState::Partial);

        selection.toggle(1);
        selection.toggle(3);
        assert_eq!(selection.select_all_state(&visible), SelectAllState::All);

        // an empty table can never show "all selected"
        assert_eq!(selection.select_all_state(&[]), SelectAllState::None);
    }

    #[test]
    fn visible_selected_ignores_hidden_ids() {
        let mut selection = SelectionState::new();
        selection.toggle(1u32);
        selection.toggle(5u32);
        assert_eq!(selection.visible_selected(&[1, 2, 3]), vec![1]);
    }
}
