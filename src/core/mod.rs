pub mod catalog;
pub mod config;
pub mod history;
pub mod log;
pub mod rates;
