pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::shell::Shell;
pub use config::CliConfig;
pub use core::{fetcher::HttpFetcher, loader::DatasetLoader};
pub use domain::model::{AttendanceRecord, Course, Section, Student};
pub use utils::error::{AttendanceError, Result};
