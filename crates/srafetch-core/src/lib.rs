pub mod config;
pub mod logging;

pub mod fetch;
pub mod run_url;
pub mod transport;
