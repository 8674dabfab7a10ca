pub mod config;

pub use config::{Backend, BackendConfig, ACCESS_TOKEN_ENV, PREVIEW_ENV};
