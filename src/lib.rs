//! # CarHub API
//!
//! This library provides an asynchronous Rust client and helper toolkit for
//! a car-listing application. It uses `tokio` for async runtime and
//! `reqwest` for HTTP requests, and covers the four integration concerns of
//! the app: querying the vehicle-catalog REST API (with a single fallback
//! retry on empty results), editing URL query parameters against an explicit
//! location value, estimating a daily rental price, and building image-CDN
//! URLs.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod images;
pub mod pricing;
pub mod search_params;
pub mod types;
pub mod util;

pub use api::*;
pub use client::*;
pub use config::{CatalogConfig, ImageCdnConfig};
pub use error::CarHubError;
pub use images::generate_car_image_url;
pub use pricing::calculate_rental_rate;
pub use search_params::CurrentLocation;
pub use types::*;
