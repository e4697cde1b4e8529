pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod viewer;

pub use client::PlotClient;
pub use config::Config;
pub use error::FetchError;
