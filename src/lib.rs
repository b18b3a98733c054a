pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod snapshot;
pub mod stats;
pub mod validate;
pub mod view;
