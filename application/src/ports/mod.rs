//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! The clock port lives in the domain ([`grb_domain::Clock`]) because the
//! status engine itself consumes it.

pub mod evaluation_logger;
pub mod review_repository;
