//! HTTP plumbing shared by the API adapter

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
