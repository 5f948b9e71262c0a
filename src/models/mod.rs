pub mod catalog;
pub mod period;
pub mod report;
pub mod role;
pub mod summary;
