use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const LISTING_URL: &str = "https://swapi.dev/api/people";
pub const PORTRAIT_URL: &str = "https://source.unsplash.com/200x300/?";

// SWAPI response structures
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub name: String,
    pub hair_color: String,
    pub skin_color: String,
    pub gender: String,
    pub vehicles: Vec<String>,
}

impl Person {
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }
}

/// One page of the people listing. `count` is the collection total the
/// endpoint reports; the UI paginates off `results` alone (see DESIGN.md).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PeopleResponse {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Person>,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("request to the listing endpoint failed: {0}")]
    Request(String),
    #[error("listing endpoint returned HTTP {0}")]
    Status(u16),
    #[error("malformed listing payload: {0}")]
    Decode(String),
}

pub fn people_url(page: usize) -> String {
    format!("{LISTING_URL}?page={page}")
}

/// Decorative card image, keyed by a throwaway seed so successive loads
/// yield different pictures.
pub fn portrait_url(seed: u32) -> String {
    format!("{PORTRAIT_URL}&{seed}")
}

pub async fn fetch_people(page: usize) -> Result<PeopleResponse, ApiError> {
    let response = reqwasm::http::Request::get(&people_url(page))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<PeopleResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
