//! Hyderabad Metro journey planner.
//!
//! Answers "how do I get from this station to that one?": the fastest route
//! across the metro lines, where to change, how long it takes, how far it
//! is and what it costs.

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
