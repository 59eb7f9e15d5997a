use super::RowFilter;

/// Selects a single column, ordered by that column, limited to `limit` rows.
pub struct OrderedRowFilter {
    pub column: String,
    pub ascending: bool,
    pub limit: usize,
}

impl OrderedRowFilter {
    /// The first row when ordering by `column`, i.e. its minimum
    /// (`ascending`) or maximum value.
    pub fn first_by(column: &str, ascending: bool) -> Self {
        Self {
            column: column.to_string(),
            ascending,
            limit: 1,
        }
    }
}

impl RowFilter for OrderedRowFilter {
    fn as_query_pairs(&self) -> Vec<(String, String)> {
        let direction = if self.ascending { "asc" } else { "desc" };
        vec![
            ("select".to_string(), self.column.clone()),
            (
                "order".to_string(),
                format!("{}.{}", self.column, direction),
            ),
            ("limit".to_string(), self.limit.to_string()),
        ]
    }
}
