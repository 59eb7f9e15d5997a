mod ordered_row_filter;

pub use ordered_row_filter::OrderedRowFilter;

pub trait RowFilter {
    /// Query-string pairs understood by the REST table endpoints.
    fn as_query_pairs(&self) -> Vec<(String, String)>;
}
