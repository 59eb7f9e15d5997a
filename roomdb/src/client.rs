use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::{
    domain::{
        BookingEndRow, BookingStartRow, BuildingCount, DataFreshness, FreeRoom,
        OrderedRowFilter, SearchQuery, TableModifiedRow,
    },
    Credentials, RoomDbURL,
};

const FREE_ROOMS_PER_BUILDING: &str = "free_rooms_per_building";
const FREE_ROOMS_LIST: &str = "free_rooms_list";
const TABLE_LAST_MODIFIED: &str = "get_table_last_modified";
const BOOKINGS_TABLE: &str = "bookings";

/// Both result sets of one availability search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub per_building: Vec<BuildingCount>,
    pub rooms: Vec<FreeRoom>,
}

#[derive(Debug, Clone)]
pub struct RoomDbClient {
    client: reqwest::Client,
    base_url: RoomDbURL,
}

impl RoomDbClient {
    pub fn new(base_url: &str, credentials: &Credentials) -> Result<Self, RoomDbError> {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(RoomDbError::InvalidUrl(base_url.to_string()));
        }

        let headers = credentials
            .as_headers()
            .map_err(|e| RoomDbError::Other(format!("Invalid anon key: {}", e)))?;
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| RoomDbError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: RoomDbURL::new(base_url),
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        call_name: &str,
    ) -> Result<T, RoomDbError> {
        let resp = request
            .send()
            .await
            .map_err(|e| RoomDbError::ResponseError(format!("{}: {}", call_name, e)))?;

        let status = resp.status();
        if status == 401 || status == 403 {
            return Err(RoomDbError::Unauthorized);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RoomDbError::Status {
                call: call_name.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<T>().await.map_err(|e| {
            RoomDbError::ParsingError(format!(
                "Failed to parse {} response as JSON: {}",
                call_name, e
            ))
        })
    }

    /// Call a stored procedure returning a set of rows. A `null` body is an
    /// empty set.
    async fn rpc<B: Serialize, T: DeserializeOwned>(
        &self,
        name: &str,
        body: &B,
    ) -> Result<Vec<T>, RoomDbError> {
        let url = self.base_url.rpc(name);
        let request = self.client.post(url.as_ref()).json(body);
        let rows: Option<Vec<T>> = self.fetch(request, name).await?;
        Ok(rows.unwrap_or_default())
    }

    async fn first_row<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: OrderedRowFilter,
    ) -> Result<Option<T>, RoomDbError> {
        let url = self.base_url.table(table).with_filter(&filter);
        let rows: Vec<T> = self.fetch(self.client.get(url.as_ref()), table).await?;
        Ok(rows.into_iter().next())
    }

    #[tracing::instrument(name = "free_rooms_per_building", skip(self))]
    pub async fn free_rooms_per_building(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<BuildingCount>, RoomDbError> {
        let rows = self.rpc(FREE_ROOMS_PER_BUILDING, &query.as_params()).await?;
        tracing::debug!(buildings = rows.len(), "fetched per-building counts");
        Ok(rows)
    }

    #[tracing::instrument(name = "free_rooms_list", skip(self))]
    pub async fn free_rooms_list(&self, query: &SearchQuery) -> Result<Vec<FreeRoom>, RoomDbError> {
        let rows = self.rpc(FREE_ROOMS_LIST, &query.as_params()).await?;
        tracing::debug!(rooms = rows.len(), "fetched free rooms");
        Ok(rows)
    }

    /// Run both availability procedures for `query`. The first failure aborts
    /// the search; partial results are never returned.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResults, RoomDbError> {
        let per_building = self.free_rooms_per_building(query).await?;
        let rooms = self.free_rooms_list(query).await?;

        Ok(SearchResults {
            per_building,
            rooms,
        })
    }

    /// Gather the data freshness banner. Each part is fetched independently
    /// and a failing part is reported as unknown.
    #[tracing::instrument(name = "data_freshness", skip(self))]
    pub async fn data_freshness(&self) -> DataFreshness {
        let last_updated = match self
            .rpc::<_, TableModifiedRow>(TABLE_LAST_MODIFIED, &serde_json::json!({}))
            .await
        {
            Ok(rows) => rows.first().and_then(TableModifiedRow::modified_at),
            Err(e) => {
                tracing::warn!("Could not fetch table modification time: {}", e);
                None
            }
        };

        let earliest_booking_start = match self
            .first_row::<BookingStartRow>(
                BOOKINGS_TABLE,
                OrderedRowFilter::first_by("start_time", true),
            )
            .await
        {
            Ok(row) => row
                .and_then(|r| r.start_time)
                .and_then(|raw| crate::domain::parse_timestamp(&raw)),
            Err(e) => {
                tracing::warn!("Could not fetch earliest booking: {}", e);
                None
            }
        };

        let latest_booking_end = match self
            .first_row::<BookingEndRow>(
                BOOKINGS_TABLE,
                OrderedRowFilter::first_by("end_time", false),
            )
            .await
        {
            Ok(row) => row
                .and_then(|r| r.end_time)
                .and_then(|raw| crate::domain::parse_timestamp(&raw)),
            Err(e) => {
                tracing::warn!("Could not fetch latest booking: {}", e);
                None
            }
        };

        DataFreshness {
            last_updated,
            earliest_booking_start,
            latest_booking_end,
        }
    }
}

#[derive(Error, Debug)]
pub enum RoomDbError {
    #[error("Unauthorized, check the anon key")]
    Unauthorized,
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
    #[error("{call} returned {status}: {body}")]
    Status {
        call: String,
        status: u16,
        body: String,
    },
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("Other: {0}")]
    Other(String),
}
