//! Filter and selection state for kman.
//!
//! Holds the directory snapshot taken at startup, the filter typed so far and the
//! subset of files the last valid filter selected.

use crate::core::WildcardMatcher;

/// Owns the file list and recomputes the selection on every filter change.
///
/// The file list never changes after construction. The selection is stored as indices into it,
/// so it always keeps the snapshot order.
#[derive(Debug, Default)]
pub struct SelectionEngine {
    files: Vec<String>,
    filter: String,
    /// Filter that produced the current selection. Lags behind `filter` after a failed compile.
    active_filter: String,
    selection: Vec<usize>,
}

impl SelectionEngine {
    pub fn new(files: Vec<String>) -> Self {
        let selection = (0..files.len()).collect();
        Self {
            files,
            filter: String::new(),
            active_filter: String::new(),
            selection,
        }
    }

    // Getters / Accessors

    /// Everything typed so far.
    #[inline]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    pub fn selection(&self) -> impl Iterator<Item = &str> + '_ {
        self.selection.iter().map(|&i| self.files[i].as_str())
    }

    /// Owned copy of the current selection, handed to the bulk actions.
    pub fn snapshot(&self) -> Vec<String> {
        self.selection().map(str::to_owned).collect()
    }

    /// Title of the list widget, reflecting the filter in effect.
    pub fn title(&self) -> String {
        format!("Filter: {}", self.active_filter)
    }

    // Filter mutation

    pub fn push(&mut self, c: char) -> bool {
        self.filter.push(c);
        self.recompute()
    }

    /// Drops the last filter character. Returns `false` without recomputing when the filter is empty.
    pub fn backspace(&mut self) -> bool {
        if self.filter.pop().is_none() {
            return false;
        }
        self.recompute()
    }

    /// Recomputes the selection from the current filter.
    ///
    /// Returns `true` if the selection was replaced. A filter that fails to compile leaves the
    /// previous selection and title in place.
    fn recompute(&mut self) -> bool {
        let matcher = match WildcardMatcher::compile(&self.filter) {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!(filter = %self.filter, error = %e, "ignoring filter");
                return false;
            }
        };

        self.selection.clear();
        self.selection.extend(
            self.files
                .iter()
                .enumerate()
                .filter(|(_, name)| matcher.matches(name))
                .map(|(i, _)| i),
        );
        self.active_filter.clear();
        self.active_filter.push_str(&self.filter);
        true
    }
}
