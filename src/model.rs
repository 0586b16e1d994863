//! Participant list data model.
//!
//! These types mirror the JSON document produced by the registration
//! module: one [`ParticipantTable`] per registration form, each holding the
//! visible [`Row`]s and the total number of registered participants.

use serde::{Deserialize, Serialize};

use crate::sort::{SortValue, SortableRow};

/// Name of the row-level check-in field, usable as a sort selector.
pub const CHECKED_IN_FIELD: &str = "checked_in";

/// A single displayed value within a row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Registration form field id, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub text: String,
    /// `text` holds an image URL rather than displayable text.
    #[serde(default)]
    pub is_picture: bool,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            is_picture: false,
        }
    }

    pub fn picture(url: impl Into<String>) -> Self {
        Self {
            id: None,
            text: url.into(),
            is_picture: true,
        }
    }
}

/// One participant line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: u64,
    #[serde(default)]
    pub checked_in: bool,
    #[serde(default)]
    pub columns: Vec<Cell>,
}

impl Row {
    pub fn new(id: u64, checked_in: bool, columns: Vec<Cell>) -> Self {
        Self {
            id,
            checked_in,
            columns,
        }
    }
}

impl SortableRow for Row {
    fn row_id(&self) -> u64 {
        self.id
    }

    fn field(&self, name: &str) -> Option<SortValue<'_>> {
        match name {
            CHECKED_IN_FIELD => Some(SortValue::Bool(self.checked_in)),
            _ => None,
        }
    }

    fn cell_count(&self) -> usize {
        self.columns.len()
    }

    fn cell_text(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|c| c.text.as_str())
    }
}

/// A participant list for one registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantTable {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Row>,
    /// Total registered participants, including those not shown.
    #[serde(default)]
    pub num_participants: usize,
    #[serde(default)]
    pub show_checkin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ParticipantTable {
    /// Number of participants present in `rows`.
    pub fn visible_count(&self) -> usize {
        self.rows.len()
    }

    /// Participants counted in `num_participants` but not listed.
    pub fn hidden_count(&self) -> usize {
        self.num_participants.saturating_sub(self.rows.len())
    }

    pub fn has_hidden(&self) -> bool {
        self.hidden_count() > 0
    }

    /// Rows whose cell count differs from the header count.
    pub fn ragged_rows(&self) -> impl Iterator<Item = &Row> {
        let width = self.headers.len();
        self.rows.iter().filter(move |r| r.columns.len() != width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: usize, total: usize) -> ParticipantTable {
        ParticipantTable {
            headers: vec!["Name".to_string()],
            rows: (0..rows as u64)
                .map(|id| Row::new(id, false, vec![Cell::text(format!("p{}", id))]))
                .collect(),
            num_participants: total,
            ..ParticipantTable::default()
        }
    }

    #[test]
    fn test_hidden_count() {
        assert_eq!(table(3, 5).hidden_count(), 2);
        assert_eq!(table(3, 3).hidden_count(), 0);
        assert!(!table(3, 3).has_hidden());
    }

    #[test]
    fn test_hidden_count_saturates() {
        // Stale totals can be lower than the visible rows.
        assert_eq!(table(4, 1).hidden_count(), 0);
    }

    #[test]
    fn test_row_exposes_checked_in_field() {
        let row = Row::new(7, true, vec![]);
        assert_eq!(row.field(CHECKED_IN_FIELD), Some(SortValue::Bool(true)));
        assert_eq!(row.field("id"), None);
        assert_eq!(row.row_id(), 7);
    }

    #[test]
    fn test_row_cell_text() {
        let row = Row::new(1, false, vec![Cell::text("Ada"), Cell::picture("/p.png")]);
        assert_eq!(row.cell_count(), 2);
        assert_eq!(row.cell_text(0), Some("Ada"));
        assert_eq!(row.cell_text(1), Some("/p.png"));
        assert_eq!(row.cell_text(2), None);
    }

    #[test]
    fn test_ragged_rows() {
        let mut t = table(2, 2);
        t.rows[1].columns.push(Cell::text("extra"));
        let ragged: Vec<u64> = t.ragged_rows().map(|r| r.id).collect();
        assert_eq!(ragged, vec![1]);
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"headers":["Name"],"rows":[{"id":3,"columns":[{"text":"Bo"}]}]}"#;
        let t: ParticipantTable = serde_json::from_str(json).unwrap();
        assert_eq!(t.num_participants, 0);
        assert!(!t.show_checkin);
        assert_eq!(t.title, None);
        assert!(!t.rows[0].checked_in);
        assert!(!t.rows[0].columns[0].is_picture);
        assert_eq!(t.rows[0].columns[0].id, None);
    }
}
