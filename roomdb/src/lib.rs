mod auth;
mod client;
pub mod domain;
mod roomdb_url;

pub(crate) use roomdb_url::*;

pub use auth::*;
pub use client::*;
