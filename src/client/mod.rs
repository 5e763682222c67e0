pub mod client;

pub use client::{parse_json_if_ok, CatalogClient};
