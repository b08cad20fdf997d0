//! Core library for the Dehix hire-talent marketplace backend.
//!
//! The `pipeline` module carries the stateful part of the system: the
//! hire-request aggregate, its candidate lists, and the managers that move
//! freelancers from lobby to invitation to a terminal outcome. Profile CRUD,
//! identity, and storage of notifications live in sibling services and are
//! reached through the collaborator traits defined alongside the pipeline.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod telemetry;
