use crate::cli::commands::date_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::timeline::TimelineLayout;
use crate::core::logic::Core;
use crate::core::plan::PlanLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, warning};
use crate::utils::formatting::{
    TRACK_WIDTH, axis_line, dimmed, format_remarks, pad_right, render_track, timeline_legend,
};
use crate::utils::time::format_duration;

const LABEL_WIDTH: usize = 34;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timeline { date } = cmd {
        let date = date_filter(date)?;
        let mut pool = DbPool::new(&cfg.database)?;
        let plan = PlanLogic::current(&mut pool)?;

        let layouts: Vec<TimelineLayout> = Core::build_day_views(&plan, cfg.grid_mode)
            .into_iter()
            .filter(|v| date.is_none_or(|d| v.date == d))
            .filter_map(|v| v.timeline)
            .collect();

        if layouts.is_empty() {
            info("No duty status data available.");
            return Ok(());
        }

        for layout in &layouts {
            print_day(layout);
        }
    }

    Ok(())
}

fn print_day(layout: &TimelineLayout) {
    header(format!("Duty status timeline for {}", layout.date));

    println!("{}{}", " ".repeat(LABEL_WIDTH), axis_line(TRACK_WIDTH));

    let mut segments = layout.segments.iter().peekable();
    for row in 0..layout.rows {
        match segments.next_if(|s| s.row_index == row) {
            Some(seg) => println!(
                "{}{}  {}",
                pad_right(&seg.label(), LABEL_WIDTH),
                render_track(seg, TRACK_WIDTH),
                seg.duration_label()
            ),
            None => println!("{}", dimmed("(no start/end time)")),
        }
    }

    if layout.skipped > 0 {
        warning(format!("{} duty status(es) without start/end time", layout.skipped));
    }

    println!(
        "{}Total: {}",
        " ".repeat(LABEL_WIDTH),
        format_duration(layout.total_minutes())
    );
    println!("{}", timeline_legend());

    if !layout.remarks.is_empty() {
        println!("\nRemarks:");
        for line in format_remarks(&layout.remarks, 72) {
            println!("  {line}");
        }
    }
    println!();
}
