mod client;
mod dev_backend;

pub use client::ApiClient;
