pub mod contract;
pub mod day_record;
pub mod monthly_summary;
pub mod palette;
pub mod raw_day;
pub mod role;
