pub mod aggregate;
pub mod backup;
pub mod log;
pub mod submit;
