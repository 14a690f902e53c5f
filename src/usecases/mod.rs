//! Application use cases. Orchestrate domain logic and ports.
//!
//! No I/O here; calls go through port traits.

pub mod assessment_service;

pub use assessment_service::AssessmentService;
