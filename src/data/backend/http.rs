//! REST backend.
//!
//! Endpoints, relative to the configured base URL:
//! - `GET /lifts`, `POST /lifts`
//! - `GET /foods`, `POST /foods`
//!
//! Backends that answer 404 for `/foods` only store lifts. Foods are then
//! kept in session memory with local ids.

use std::cell::Cell;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::{EntryBackend, MemoryBackend};
use crate::data::error::BackendError;
use crate::data::models::{FoodEntry, LiftEntry, NewFood, NewLift};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpBackend {
    client: Client,
    base_url: String,
    /// Set once the server has answered 404 for `/foods`
    foods_unsupported: Cell<bool>,
    session_foods: MemoryBackend,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(HttpBackend {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            foods_unsupported: Cell::new(false),
            session_foods: MemoryBackend::new(),
        })
    }

    fn mark_foods_unsupported(&self, url: &str) {
        if !self.foods_unsupported.replace(true) {
            warn!(%url, "backend has no food endpoint, keeping foods for this session only");
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self.client.get(&url).send()?;
        decode("GET", url, response)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send()?;
        decode("POST", url, response)
    }
}

/// Check the status and parse the body as JSON
fn decode<T: DeserializeOwned>(
    method: &'static str,
    url: String,
    response: Response,
) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status {
            method,
            url,
            status: status.as_u16(),
        });
    }
    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}

impl EntryBackend for HttpBackend {
    fn describe(&self) -> String {
        if self.foods_unsupported.get() {
            format!("{} (foods: session only)", self.base_url)
        } else {
            self.base_url.clone()
        }
    }

    fn list_lifts(&self) -> Result<Vec<LiftEntry>, BackendError> {
        self.get_json("lifts")
    }

    fn create_lift(&self, lift: &NewLift) -> Result<LiftEntry, BackendError> {
        self.post_json("lifts", lift)
    }

    fn list_foods(&self) -> Result<Vec<FoodEntry>, BackendError> {
        if self.foods_unsupported.get() {
            return self.session_foods.list_foods();
        }
        match self.get_json("foods") {
            Err(BackendError::Status { status, url, .. })
                if status == StatusCode::NOT_FOUND.as_u16() =>
            {
                self.mark_foods_unsupported(&url);
                self.session_foods.list_foods()
            }
            other => other,
        }
    }

    fn create_food(&self, food: &NewFood) -> Result<FoodEntry, BackendError> {
        if self.foods_unsupported.get() {
            return self.session_foods.create_food(food);
        }
        match self.post_json("foods", food) {
            Err(BackendError::Status { status, url, .. })
                if status == StatusCode::NOT_FOUND.as_u16() =>
            {
                self.mark_foods_unsupported(&url);
                self.session_foods.create_food(food)
            }
            other => other,
        }
    }
}
