//! Shared request types for the Hey Bible API.

use serde::{Deserialize, Serialize};

/// Smallest page size the API accepts.
pub const LIMIT_MIN: u32 = 1;

/// Largest page size the API accepts.
pub const LIMIT_MAX: u32 = 100;

/// Request parameters shared by the verses, notes, and images endpoints.
///
/// When `id` is set the API ignores `limit` and `offset`; the client still
/// forwards all three fields unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetParams {
    /// Fetch a single record by id instead of a page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Page size, between [`LIMIT_MIN`] and [`LIMIT_MAX`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of records to skip for pagination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// The three read-only collections exposed by the Hey Bible API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Verses,
    Notes,
    Images,
}

impl Resource {
    /// API path of the collection endpoint.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Verses => "/v1/verses",
            Resource::Notes => "/v1/notes",
            Resource::Images => "/v1/images",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::Verses => "verses",
            Resource::Notes => "notes",
            Resource::Images => "images",
        };
        write!(f, "{}", name)
    }
}
