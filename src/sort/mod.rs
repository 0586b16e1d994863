//! Tri-state column sorting.
//!
//! Clicking a column header cycles that column through
//! `Ascending → Descending → Unsorted`. Clicking a different column starts
//! over at `Ascending`. Ascending and descending sorts reorder the rows
//! that are currently displayed, so successive sorts on different columns
//! build on each other. Returning to `Unsorted` restores the original order.

mod collate;

pub use collate::{Collator, Strength};

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

/// Error raised when a selector cannot be resolved against a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Positional selector beyond the row's cell count.
    OutOfRangeSelector { row_id: u64, index: usize, len: usize },
    /// Field selector naming a field the row does not expose.
    UnknownField { row_id: u64, name: String },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::OutOfRangeSelector { row_id, index, len } => write!(
                f,
                "column {} out of range for row {} ({} cells)",
                index, row_id, len
            ),
            SortError::UnknownField { row_id, name } => {
                write!(f, "row {} has no sortable field '{}'", row_id, name)
            }
        }
    }
}

impl std::error::Error for SortError {}

/// Identifies what a table is sorted by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnSelector {
    /// Row-level field, e.g. `checked_in`.
    Field(String),
    /// Index into the row's cells.
    Column(usize),
}

impl ColumnSelector {
    pub fn field(name: impl Into<String>) -> Self {
        ColumnSelector::Field(name.into())
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelector::Field(name) => f.write_str(name),
            ColumnSelector::Column(index) => write!(f, "{}", index),
        }
    }
}

impl FromStr for ColumnSelector {
    type Err = String;

    /// Digits select a cell column; anything else names a field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty column selector".to_string());
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            s.parse::<usize>()
                .map(ColumnSelector::Column)
                .map_err(|e| format!("invalid column index '{}': {}", s, e))
        } else {
            Ok(ColumnSelector::Field(s.to_string()))
        }
    }
}

/// Position in the sort cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortState {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortState {
    /// Next state when the active column is requested again.
    pub fn next(self) -> Self {
        match self {
            SortState::Unsorted => SortState::Ascending,
            SortState::Ascending => SortState::Descending,
            SortState::Descending => SortState::Unsorted,
        }
    }

    /// State after a header interaction on `requested`.
    pub fn after(
        active: Option<&ColumnSelector>,
        current: SortState,
        requested: &ColumnSelector,
    ) -> Self {
        if active == Some(requested) {
            current.next()
        } else {
            SortState::Ascending
        }
    }

    /// Orients an ascending comparison for this state.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortState::Ascending => ordering,
            SortState::Descending => ordering.reverse(),
            SortState::Unsorted => Ordering::Equal,
        }
    }

    pub fn is_sorted(self) -> bool {
        self != SortState::Unsorted
    }
}

/// Comparison value extracted from a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortValue<'a> {
    Bool(bool),
    Text(&'a str),
}

impl<'a> SortValue<'a> {
    fn as_text(self) -> &'a str {
        match self {
            SortValue::Bool(true) => "true",
            SortValue::Bool(false) => "false",
            SortValue::Text(text) => text,
        }
    }
}

/// Rows that can be sorted by [`TableSorter`].
pub trait SortableRow {
    /// Identifier used in error reports.
    fn row_id(&self) -> u64;

    /// Value of a named row-level field, if the row has one.
    fn field(&self, name: &str) -> Option<SortValue<'_>>;

    /// Number of cells.
    fn cell_count(&self) -> usize;

    /// Text of the cell at `index`.
    fn cell_text(&self, index: usize) -> Option<&str>;
}

/// Reads the comparison value for `selector` from `row`.
pub fn sort_value<'r, R: SortableRow>(
    row: &'r R,
    selector: &ColumnSelector,
) -> Result<SortValue<'r>, SortError> {
    match selector {
        ColumnSelector::Field(name) => row.field(name).ok_or_else(|| SortError::UnknownField {
            row_id: row.row_id(),
            name: name.clone(),
        }),
        ColumnSelector::Column(index) => row
            .cell_text(*index)
            .map(SortValue::Text)
            .ok_or(SortError::OutOfRangeSelector {
                row_id: row.row_id(),
                index: *index,
                len: row.cell_count(),
            }),
    }
}

/// Ascending comparison of two extracted values.
///
/// Booleans put `true` first. Everything else is compared as text through
/// `collator`.
pub fn compare_values(a: SortValue<'_>, b: SortValue<'_>, collator: &Collator) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    match (a, b) {
        (SortValue::Bool(a), SortValue::Bool(b)) => b.cmp(&a),
        _ => collator.compare(a.as_text(), b.as_text()),
    }
}

/// Result of one header interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome<R> {
    pub rows: Vec<R>,
    pub state: SortState,
    pub column: ColumnSelector,
}

/// Applies one header interaction.
///
/// `original` is the order rows were supplied in, `displayed` the order
/// currently shown. `active`/`state` describe the current sort and
/// `requested` is the header that was clicked.
///
/// Every row is checked against `requested` before anything is reordered,
/// so an error never leaves a partially sorted result.
pub fn sort_rows<R: SortableRow + Clone>(
    original: &[R],
    displayed: &[R],
    active: Option<&ColumnSelector>,
    state: SortState,
    requested: &ColumnSelector,
    collator: &Collator,
) -> Result<SortOutcome<R>, SortError> {
    let state = SortState::after(active, state, requested);

    if state == SortState::Unsorted {
        return Ok(SortOutcome {
            rows: original.to_vec(),
            state,
            column: requested.clone(),
        });
    }

    let keys = displayed
        .iter()
        .map(|row| sort_value(row, requested))
        .collect::<Result<Vec<_>, _>>()?;

    // sort_by is stable: equal keys keep their displayed order
    let mut order: Vec<usize> = (0..displayed.len()).collect();
    order.sort_by(|&a, &b| state.apply(compare_values(keys[a], keys[b], collator)));

    Ok(SortOutcome {
        rows: order.into_iter().map(|i| displayed[i].clone()).collect(),
        state,
        column: requested.clone(),
    })
}

/// Owns a row set and its tri-state sort.
#[derive(Debug, Clone)]
pub struct TableSorter<R> {
    original: Vec<R>,
    displayed: Vec<R>,
    column: Option<ColumnSelector>,
    state: SortState,
    collator: Collator,
}

impl<R: SortableRow + Clone> TableSorter<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            displayed: rows.clone(),
            original: rows,
            column: None,
            state: SortState::Unsorted,
            collator: Collator::default(),
        }
    }

    pub fn with_collator(mut self, collator: Collator) -> Self {
        self.collator = collator;
        self
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[R] {
        &self.displayed
    }

    /// Rows in the order they were supplied.
    pub fn original(&self) -> &[R] {
        &self.original
    }

    /// Last requested column, if any.
    pub fn column(&self) -> Option<&ColumnSelector> {
        self.column.as_ref()
    }

    pub fn state(&self) -> SortState {
        self.state
    }

    pub fn collator(&self) -> &Collator {
        &self.collator
    }

    /// Sort state to show on the header for `selector`.
    pub fn state_for(&self, selector: &ColumnSelector) -> SortState {
        if self.column.as_ref() == Some(selector) {
            self.state
        } else {
            SortState::Unsorted
        }
    }

    /// Handles a click on `selector`'s header and returns the new state.
    ///
    /// On error the sorter is left unchanged.
    pub fn toggle(&mut self, selector: ColumnSelector) -> Result<SortState, SortError> {
        let outcome = sort_rows(
            &self.original,
            &self.displayed,
            self.column.as_ref(),
            self.state,
            &selector,
            &self.collator,
        )?;
        debug!(
            column = %outcome.column,
            state = ?outcome.state,
            rows = outcome.rows.len(),
            "table sorted"
        );
        self.displayed = outcome.rows;
        self.state = outcome.state;
        self.column = Some(outcome.column);
        Ok(self.state)
    }

    /// Restores the original order and forgets the active column.
    pub fn reset(&mut self) {
        self.displayed = self.original.clone();
        self.column = None;
        self.state = SortState::Unsorted;
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Participant {
        id: u64,
        checked_in: bool,
        name: String,
    }

    impl SortableRow for Participant {
        fn row_id(&self) -> u64 {
            self.id
        }

        fn field(&self, name: &str) -> Option<SortValue<'_>> {
            (name == "checked_in").then_some(SortValue::Bool(self.checked_in))
        }

        fn cell_count(&self) -> usize {
            1
        }

        fn cell_text(&self, index: usize) -> Option<&str> {
            (index == 0).then_some(self.name.as_str())
        }
    }

    fn participants() -> impl Strategy<Value = Vec<Participant>> {
        prop::collection::vec((any::<bool>(), "[a-cA-Céø ]{0,4}"), 0..24).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (checked_in, name))| Participant {
                    id: i as u64,
                    checked_in,
                    name,
                })
                .collect()
        })
    }

    fn selector() -> impl Strategy<Value = ColumnSelector> {
        prop_oneof![
            Just(ColumnSelector::field("checked_in")),
            Just(ColumnSelector::Column(0)),
        ]
    }

    fn checked_in_first(rows: &[Participant]) -> bool {
        rows.windows(2).all(|w| w[0].checked_in >= w[1].checked_in)
    }

    proptest! {
        #[test]
        fn prop_three_toggles_restore_original(rows in participants(), column in selector()) {
            let mut sorter = TableSorter::new(rows.clone());
            for _ in 0..3 {
                prop_assert!(sorter.toggle(column.clone()).is_ok());
            }
            prop_assert_eq!(sorter.state(), SortState::Unsorted);
            prop_assert_eq!(sorter.rows(), rows.as_slice());
        }

        #[test]
        fn prop_ascending_is_ordered_and_stable(rows in participants()) {
            let collator = Collator::default();
            let mut sorter = TableSorter::new(rows);
            prop_assert_eq!(sorter.toggle(ColumnSelector::Column(0)), Ok(SortState::Ascending));

            for w in sorter.rows().windows(2) {
                let ordering = collator.compare(&w[0].name, &w[1].name);
                prop_assert_ne!(ordering, Ordering::Greater);
                if ordering == Ordering::Equal {
                    // Ties keep the order they were supplied in.
                    prop_assert!(w[0].id < w[1].id);
                }
            }
        }

        #[test]
        fn prop_checked_in_partition(rows in participants()) {
            let mut sorter = TableSorter::new(rows);
            let column = ColumnSelector::field("checked_in");

            prop_assert_eq!(sorter.toggle(column.clone()), Ok(SortState::Ascending));
            prop_assert!(checked_in_first(sorter.rows()));
            for w in sorter.rows().windows(2) {
                if w[0].checked_in == w[1].checked_in {
                    prop_assert!(w[0].id < w[1].id);
                }
            }

            prop_assert_eq!(sorter.toggle(column), Ok(SortState::Descending));
            let mut reversed = sorter.rows().to_vec();
            reversed.reverse();
            prop_assert!(checked_in_first(&reversed));
        }

        #[test]
        fn prop_switching_column_restarts_ascending(
            rows in participants(),
            clicks in 1usize..3,
        ) {
            let mut sorter = TableSorter::new(rows);
            for _ in 0..clicks {
                prop_assert!(sorter.toggle(ColumnSelector::Column(0)).is_ok());
            }

            let column = ColumnSelector::field("checked_in");
            prop_assert_eq!(sorter.toggle(column.clone()), Ok(SortState::Ascending));
            prop_assert_eq!(sorter.column(), Some(&column));
            prop_assert!(checked_in_first(sorter.rows()));

            prop_assert_eq!(sorter.toggle(ColumnSelector::Column(0)), Ok(SortState::Ascending));
        }
    }
}
