use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::plan::{PlanResponse, TripRequest};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_SERVICE_ERROR: &str = "Failed to plan trip.";

#[derive(Deserialize)]
struct ServiceError {
    error: Option<String>,
}

/// Message to show for a failed planning call: the body's `error` field, if any.
pub fn service_error_message(body: &str) -> String {
    serde_json::from_str::<ServiceError>(body)
        .ok()
        .and_then(|e| e.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SERVICE_ERROR.to_string())
}

pub struct PlanLogic;

impl PlanLogic {
    /// POST the trip to `{api_url}/plan-trip/` and return the raw response body.
    pub fn fetch(api_url: &str, request: &TripRequest, timeout_secs: u64) -> AppResult<String> {
        let url = format!("{}/plan-trip/", api_url.trim_end_matches('/'));
        tracing::debug!(%url, "requesting trip plan");

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        let response = client.post(&url).json(request).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            tracing::warn!(%status, "planning service rejected the trip");
            return Err(AppError::Service(service_error_message(&body)));
        }

        Ok(body)
    }

    /// Parse and store a planning response. The stored row becomes the current plan.
    pub fn store(pool: &mut DbPool, raw: &str, source: &str) -> AppResult<(i64, PlanResponse)> {
        let plan = PlanResponse::from_json(raw)?;
        let id = queries::insert_plan(&pool.conn, source, raw)?;

        if queries::count_plans(&pool.conn)? > 1 {
            tracing::info!(plan = id, "new plan supersedes the previous one");
        }

        ttlog_soft(
            &pool.conn,
            "plan",
            source,
            &format!(
                "Plan #{id}: {} duty statuses, {} logs, {} stops",
                plan.duty_statuses().len(),
                plan.logs.len(),
                plan.stops.len()
            ),
        );

        Ok((id, plan))
    }

    /// The most recent plan.
    pub fn current(pool: &mut DbPool) -> AppResult<PlanResponse> {
        let stored = queries::load_latest_plan(pool)?.ok_or(AppError::NoPlan)?;
        tracing::debug!(plan = stored.id, source = %stored.source, created_at = %stored.created_at, "current plan");
        PlanResponse::from_json(&stored.payload)
    }
}
