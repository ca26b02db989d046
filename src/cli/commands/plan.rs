use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::plan::PlanLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::plan::TripRequest;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use std::fs;

/// Handle the `plan` command: fetch a new plan, or import a saved response.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan {
        current,
        pickup,
        dropoff,
        cycle_used,
        file,
    } = cmd
    {
        let (raw, source) = match file {
            Some(path) => (fs::read_to_string(expand_tilde(path))?, "file"),
            None => {
                let request = TripRequest::new(
                    current.as_deref().unwrap_or_default(),
                    pickup.as_deref().unwrap_or_default(),
                    dropoff.as_deref().unwrap_or_default(),
                    *cycle_used,
                )?;
                info(format!(
                    "Planning trip {} → {} → {}…",
                    request.current_location, request.pickup_location, request.dropoff_location
                ));
                (
                    PlanLogic::fetch(&cfg.api_url, &request, cfg.request_timeout_secs)?,
                    "service",
                )
            }
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let (id, plan) = PlanLogic::store(&mut pool, &raw, source)?;

        let days = Core::build_day_views(&plan, cfg.grid_mode).len();
        success(format!(
            "Plan #{id} stored: {days} day(s), {} daily log(s), {} stop(s)",
            plan.logs.len(),
            plan.stops.len()
        ));
    }

    Ok(())
}
