//! post-care: Rule-based triage of post-cardiac-care check-ins with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
