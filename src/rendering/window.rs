use crate::engine::config::WindowConfig;
use crate::engine::Row;

/// Fixed row-count policy layered on top of the wrapper's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowWindow {
    /// Keep only the last N rows
    pub rows: Option<usize>,
    /// Append empty rows until there are N
    pub pad: bool,
}

impl RowWindow {
    pub fn new(rows: Option<usize>, pad: bool) -> Self {
        Self { rows, pad }
    }

    pub fn from_config(config: &WindowConfig) -> Self {
        Self::new(config.rows, config.pad_rows)
    }

    pub fn apply(&self, mut rows: Vec<Row>) -> Vec<Row> {
        let Some(limit) = self.rows else {
            return rows;
        };
        if rows.len() > limit {
            rows.drain(..rows.len() - limit);
        }
        if self.pad {
            rows.resize_with(limit, Row::new);
        }
        rows
    }
}
