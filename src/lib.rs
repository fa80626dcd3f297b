//! # Skywatch Backend
//!
//! A small observatory backend: it proxies a third-party weather feed, serves
//! a static astronomical-object catalog with text search, computes which
//! catalog objects are currently above a minimum altitude for an arbitrary
//! observer, and tracks a simulated telescope's configuration and target
//! state. The REST API is exposed via Axum.
//!
//! The interesting part is the coordinate pipeline in [`astro`]: sexagesimal
//! RA/Dec strings are converted to decimal degrees, the request instant to a
//! Julian Date and Greenwich Sidereal Time, and the two combined into a
//! topocentric altitude through the spherical-trigonometry formula. Those
//! functions are pure and synchronous; everything stateful (telescope record,
//! outbound weather call) lives in the collaborator modules around them.
//!
//! ## Architecture
//!
//! - [`astro`]: sexagesimal parsing, time scales, horizontal transform,
//!   visibility filter (the core; pure functions only)
//! - [`catalog`]: static read-only object catalog and text search
//! - [`telescope`]: mutable telescope-state singleton
//! - [`weather`]: upstream feed fetch and reshape
//! - [`config`]: explicit, env-loaded configuration
//! - [`http`]: axum router, handlers, DTOs, error mapping

pub mod astro;
pub mod catalog;
pub mod config;
pub mod telescope;
pub mod weather;

pub mod http;
