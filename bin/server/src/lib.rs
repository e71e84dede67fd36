//! Package distribution server.
//!
//! Serves a package registry defined in an INI configuration file: probe
//! endpoints, a package list, per-package manifests with fresh SHA1
//! hashes, and raw file downloads, all gated by an optional bearer token.

pub mod auth;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod state;

use actix_web::web;

/// Register every API route on a service config. Shared by the binary
/// and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::probes::touch)
        .service(handlers::probes::version)
        .service(handlers::list::list)
        .service(handlers::manifest::manifest)
        .service(handlers::download::download);
}
