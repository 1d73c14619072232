//! Read-only calls against the presence-analyzer JSON API.

use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

use crate::model::{start_end_rows, weekday_rows, StartEndRow, UserRecord, WeekdayRow};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("unexpected status {0}")]
    Status(u16),
}

pub async fn fetch_users() -> Result<Vec<UserRecord>, ApiError> {
    let resp = Request::get("/api/v1/users").send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json().await?)
}

/// Per-weekday responses arrive as JSON rows of mixed cell types, so they
/// are decoded generically first and narrowed in `model`.
async fn fetch_rows(path: &str) -> Result<Vec<Value>, ApiError> {
    let resp = Request::get(path).send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json().await?)
}

pub async fn fetch_presence_weekday(user_id: u32) -> Result<Vec<WeekdayRow>, ApiError> {
    let raw = fetch_rows(&format!("/api/v1/presence_weekday/{user_id}")).await?;
    Ok(weekday_rows(&raw))
}

pub async fn fetch_mean_time_weekday(user_id: u32) -> Result<Vec<WeekdayRow>, ApiError> {
    let raw = fetch_rows(&format!("/api/v1/mean_time_weekday/{user_id}")).await?;
    Ok(weekday_rows(&raw))
}

pub async fn fetch_presence_start_end(user_id: u32) -> Result<Vec<StartEndRow>, ApiError> {
    let raw = fetch_rows(&format!("/api/v1/presence_start_end/{user_id}")).await?;
    Ok(start_end_rows(&raw))
}
