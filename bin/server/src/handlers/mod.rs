//! HTTP request handlers

pub mod download;
pub mod list;
pub mod manifest;
pub mod probes;
