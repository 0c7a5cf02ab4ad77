//! Test helpers para glossa-server.

#![allow(dead_code, unused_imports)]

pub mod client;

pub use client::{TestClient, TestResponse, app, authed_client, client};
