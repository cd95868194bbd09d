pub mod models;

pub use models::date::Date;
