pub mod catalog_models;
pub mod client;
pub mod error;

pub use client::{CatalogApi, Client, DEFAULT_BASE_URL};
pub use error::Error;
pub use reqwest::StatusCode;

pub type Result<T, E = Error> = std::result::Result<T, E>;
