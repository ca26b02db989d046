use crate::cli::commands::date_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::plan::PlanLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stops { date } = cmd {
        let date = date_filter(date)?;
        let mut pool = DbPool::new(&cfg.database)?;
        let plan = PlanLogic::current(&mut pool)?;

        let views: Vec<_> = Core::build_day_views(&plan, cfg.grid_mode)
            .into_iter()
            .filter(|v| date.is_none_or(|d| v.date == d))
            .collect();

        if views.is_empty() {
            info("No days found in the current plan.");
            return Ok(());
        }

        for view in views {
            header(format!("Stops for {}", view.date));

            if view.stops.is_empty() {
                info("No stops for this day.");
                println!();
                continue;
            }

            let mut table = Table::new(vec![
                Column::new("Type", 10),
                Column::new("Location", 28),
                Column::new("Hours", 6),
                Column::new("Map", 3),
            ]);

            for stop in &view.stops {
                let pinned = stop.coordinates().is_some();
                table.add_row(vec![
                    stop.title(),
                    stop.location.clone(),
                    format!("{:.2}", stop.duration),
                    if pinned { "✓".into() } else { "-".into() },
                ]);
            }

            print!("{}", table.render());
            info(format!("{} of {} stop(s) on the map", view.markers.len(), view.stops.len()));
            println!();
        }
    }

    Ok(())
}
