pub mod app_config;
pub mod demo;
pub mod notice;

pub use app_config::{Config, OutputFormat};
pub use notice::{Notice, NoticeWriter};
