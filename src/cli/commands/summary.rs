use crate::config::Config;
use crate::core::logic::Core;
use crate::core::plan::PlanLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::bold;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let plan = PlanLogic::current(&mut pool)?;
    let summary = Core::trip_summary(&plan);

    header("Trip summary");
    println!("{:<20} {}", "Start:", summary.start);
    println!("{:<20} {}", "Pickup:", summary.pickup);
    println!("{:<20} {}", "Dropoff:", summary.dropoff);
    println!();
    println!("{:<20} {}", "Total driving time:", bold(&summary.total_driving));
    println!("{:<20} {}", "Total on-duty time:", bold(&summary.total_on_duty));
    println!("{:<20} {}", "Remaining cycle:", bold(&summary.remaining_cycle));
    println!("{:<20} {}", "Route points:", summary.route_points);

    if !summary.markers.is_empty() {
        println!();
        for m in &summary.markers {
            println!(
                "  [{}] {:<40} {:>10.5}, {:>10.5}",
                m.icon, m.title, m.position[0], m.position[1]
            );
        }
    }

    Ok(())
}
