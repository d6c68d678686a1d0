//! Transit midpoint server.
//!
//! A web service that answers: "we're starting from these stations,
//! where should we meet?"

pub mod config;
pub mod domain;
pub mod graph;
pub mod midpoint;
pub mod web;
