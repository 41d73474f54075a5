pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;
pub mod utils;
pub mod workflow;

pub use dashboard::Dashboard;
pub use error::{Error, Result};
