use crate::cli::commands::date_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::grid::{self, GridStatus};
use crate::core::plan::PlanLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::daily_log::DailyLog;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{grid_hours_line, grid_legend, render_grid_row};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid { date, mode } = cmd {
        let date = date_filter(date)?;
        let mode = mode.unwrap_or(cfg.grid_mode);

        let mut pool = DbPool::new(&cfg.database)?;
        let plan = PlanLogic::current(&mut pool)?;

        let logs: Vec<&DailyLog> = plan
            .logs
            .iter()
            .filter(|l| date.is_none_or(|d| l.date == d))
            .collect();

        if logs.is_empty() {
            info("No daily log data available.");
            return Ok(());
        }

        for log in logs {
            let g = grid::build_grid(log, mode);

            header(format!("Daily log for {}", log.date));
            println!("{}", grid_hours_line());
            println!("{}", render_grid_row(&g));
            println!();
            println!(
                "Driving {:.2} h · On duty {:.2} h · Off duty {:.2} h · Sleeper {:.2} h",
                log.driving_hours,
                log.on_duty_hours,
                log.off_duty_hours,
                log.sleeper_hours()
            );
            println!(
                "Slots: {}",
                GridStatus::ALL
                    .iter()
                    .map(|s| format!("{}={}", s.label(), grid::count(&g, *s)))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!("{}\n", grid_legend());
        }
    }

    Ok(())
}
