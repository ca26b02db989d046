use crate::cli::commands::date_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::plan::PlanLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        dir,
        file,
        date,
        mode,
        force,
    } = cmd
    {
        let date = date_filter(date)?;

        let target = match format {
            ExportFormat::Png => dir.clone().unwrap_or_else(|| cfg.export_dir.clone()),
            ExportFormat::Json | ExportFormat::Csv => file.clone().ok_or_else(|| {
                AppError::Export(format!("--file is required for {} export", format.as_str()))
            })?,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let plan = PlanLogic::current(&mut pool)?;

        ExportLogic::export(
            &mut pool,
            &plan,
            format,
            &target,
            date,
            mode.unwrap_or(cfg.grid_mode),
            *force,
        )?;
    }
    Ok(())
}
