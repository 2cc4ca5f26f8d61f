pub mod duration;
pub mod lunch;

pub use duration::{Durations, compute, net_hours, raw_hours};
pub use lunch::{LunchPolicy, lunch_overlap_hours, lunch_window};
