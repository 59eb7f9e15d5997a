use crate::domain::RowFilter;

#[derive(Debug, Clone)]
pub struct RoomDbURL(String);

impl AsRef<str> for RoomDbURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl RoomDbURL {
    pub fn new(base_url: &str) -> Self {
        Self(base_url.trim_end_matches('/').to_string())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// URL of a stored procedure exposed under `/rest/v1/rpc/<name>`.
    pub fn rpc(&self, name: &str) -> Self {
        self.append_path("/rest/v1/rpc").append_path(name)
    }

    /// URL of a table exposed under `/rest/v1/<table>`.
    pub fn table(&self, table: &str) -> Self {
        self.append_path("/rest/v1").append_path(table)
    }

    pub fn with_filter(&self, filter: &impl RowFilter) -> Self {
        let query = filter
            .as_query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");
        if query.is_empty() {
            return self.clone();
        }

        if self.0.contains('?') {
            Self(format!("{}&{}", self.0, query))
        } else {
            Self(format!("{}?{}", self.0, query))
        }
    }
}
