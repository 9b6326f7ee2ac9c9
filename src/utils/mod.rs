pub mod diff;
pub mod time;
