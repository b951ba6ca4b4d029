//! Backend API adapter

pub mod client;

pub use client::BackendClient;
