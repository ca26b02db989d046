pub mod daily_log;
pub mod day_view;
pub mod duty_event;
pub mod duty_status;
pub mod lenient;
pub mod plan;
pub mod stop;
pub mod summary;
