pub mod backup;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod show;
pub mod submit;
