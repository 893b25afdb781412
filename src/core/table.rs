//! Tabular view of the configuration list
//!
//! [`ConfigurationTable::view`] turns a [`StoreSnapshot`] into a
//! [`TableView`]: skeleton rows while loading, an empty-state message, or one
//! [`TableRow`] per record. Deletes go through
//! [`ConfigurationTable::delete`], which tracks in-flight deletes per id so
//! concurrent deletes of different rows never share a spinner.

use crate::core::store::{ConfigurationStore, StoreSnapshot};
use crate::domain::{BadgeVariant, ConfigurationId, PiiConfiguration, Result};
use std::collections::HashSet;
use std::fmt::Write as _;
use std::sync::{Mutex, PoisonError};

pub const SKELETON_ROWS: usize = 3;

/// Display width of truncated cells, in characters
pub const TRUNCATE_WIDTH: usize = 32;

pub const EMPTY_TITLE: &str = "No PII configurations found";
pub const EMPTY_HINT: &str = "Add your first configuration to get started with PII management.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

pub const COLUMNS: [Column; 10] = [
    Column { key: "piiCategory", label: "PII Category" },
    Column { key: "dataElementName", label: "Data Element Name" },
    Column { key: "description", label: "Description" },
    Column { key: "sensitivityLevel", label: "Sensitivity Level" },
    Column { key: "maskingRequired", label: "Masking Required" },
    Column { key: "encryptionRequired", label: "Encryption Required" },
    Column { key: "accessControlLevel", label: "Access Control Level" },
    Column { key: "retentionPolicy", label: "Retention Policy" },
    Column { key: "purpose", label: "Purpose" },
    Column { key: "actions", label: "Actions" },
];

/// Content of one table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// Long free text, shortened for display; the full value is kept
    Truncated(String),
    Badge {
        label: String,
        variant: BadgeVariant,
    },
    /// Edit and delete controls; delete is disabled while `deleting`
    Actions {
        id: ConfigurationId,
        deleting: bool,
    },
}

impl Cell {
    fn yes_no(value: bool) -> Self {
        let (label, variant) = if value {
            ("Yes", BadgeVariant::Default)
        } else {
            ("No", BadgeVariant::Outline)
        };
        Cell::Badge {
            label: label.to_string(),
            variant,
        }
    }

    /// Plain-text rendering of the cell
    pub fn display(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Truncated(text) => truncate(text, TRUNCATE_WIDTH),
            Cell::Badge { label, .. } => label.clone(),
            Cell::Actions { id, deleting: false } => format!("#{id}"),
            Cell::Actions { id, deleting: true } => format!("#{id} deleting..."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: ConfigurationId,
    pub cells: Vec<Cell>,
}

impl TableRow {
    pub fn from_record(record: &PiiConfiguration, deleting: bool) -> Self {
        let cells = vec![
            Cell::Text(record.category_label().to_string()),
            Cell::Text(record.data_element_name.clone()),
            Cell::Truncated(record.description.clone()),
            Cell::Badge {
                label: record.sensitivity_level.to_string(),
                variant: record.sensitivity_level.badge_variant(),
            },
            Cell::yes_no(record.masking_required),
            Cell::yes_no(record.encryption_required),
            Cell::Truncated(record.access_control_level.clone()),
            Cell::Text(record.retention_policy.clone()),
            Cell::Truncated(record.purpose.clone()),
            Cell::Actions {
                id: record.id.clone(),
                deleting,
            },
        ];
        Self {
            id: record.id.clone(),
            cells,
        }
    }
}

/// What the list area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Loading { skeleton_rows: usize },
    Empty,
    Rows(Vec<TableRow>),
}

impl TableView {
    /// Renders the view as aligned plain text
    pub fn render(&self) -> String {
        match self {
            TableView::Empty => format!("{EMPTY_TITLE}\n{EMPTY_HINT}\n"),
            TableView::Loading { skeleton_rows } => {
                let skeleton: Vec<String> = COLUMNS
                    .iter()
                    .map(|c| "░".repeat(c.label.chars().count()))
                    .collect();
                render_grid(&vec![skeleton; *skeleton_rows])
            }
            TableView::Rows(rows) => {
                let body: Vec<Vec<String>> = rows
                    .iter()
                    .map(|row| row.cells.iter().map(Cell::display).collect())
                    .collect();
                render_grid(&body)
            }
        }
    }
}

fn render_grid(body: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.label.chars().count()).collect();
    for row in body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = COLUMNS.iter().map(|c| c.label.to_string()).collect();
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = String::new();
    for line in std::iter::once(&header)
        .chain(std::iter::once(&separator))
        .chain(body)
    {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect();
        let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
    }
    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

/// Confirmation shown before a delete is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub title: &'static str,
    pub message: String,
}

impl DeleteConfirmation {
    pub fn for_record(record: &PiiConfiguration) -> Self {
        Self {
            title: "Delete PII Configuration",
            message: format!(
                "Are you sure you want to delete the configuration for \"{}\"? This action cannot be undone.",
                record.data_element_name
            ),
        }
    }
}

/// Presentation state of the list: which rows have a delete in flight
#[derive(Debug, Default)]
pub struct ConfigurationTable {
    deleting: Mutex<HashSet<ConfigurationId>>,
}

impl ConfigurationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, snapshot: &StoreSnapshot) -> TableView {
        if snapshot.is_loading {
            return TableView::Loading {
                skeleton_rows: SKELETON_ROWS,
            };
        }
        if snapshot.configurations.is_empty() {
            return TableView::Empty;
        }

        let deleting = self.lock();
        TableView::Rows(
            snapshot
                .configurations
                .iter()
                .map(|record| TableRow::from_record(record, deleting.contains(&record.id)))
                .collect(),
        )
    }

    pub fn is_deleting(&self, id: &ConfigurationId) -> bool {
        self.lock().contains(id)
    }

    /// Deletes a row through the store, marking it in flight meanwhile
    ///
    /// Returns `Ok(false)` without calling the store when a delete for the
    /// same id is already running. The in-flight mark is cleared whatever
    /// the outcome.
    ///
    /// # Errors
    ///
    /// Propagates the store's error when the delete is rejected.
    pub async fn delete(&self, store: &ConfigurationStore, id: &ConfigurationId) -> Result<bool> {
        let Some(_in_flight) = InFlight::mark(&self.deleting, id) else {
            tracing::debug!(configuration_id = %id, "Delete already in flight");
            return Ok(false);
        };

        store.remove(id).await?;
        Ok(true)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<ConfigurationId>> {
        self.deleting.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears a row's in-flight mark when dropped
struct InFlight<'a> {
    set: &'a Mutex<HashSet<ConfigurationId>>,
    id: ConfigurationId,
}

impl<'a> InFlight<'a> {
    fn mark(set: &'a Mutex<HashSet<ConfigurationId>>, id: &ConfigurationId) -> Option<Self> {
        let inserted = set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone());
        inserted.then(|| Self {
            set,
            id: id.clone(),
        })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.id);
    }
}
