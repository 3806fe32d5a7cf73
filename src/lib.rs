pub mod analytics;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod source;
#[cfg(test)]
pub mod test_helpers;
