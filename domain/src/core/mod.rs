//! Core domain concepts shared across all subdomains.
//!
//! - [`clock::Clock`] - injectable time source
//! - [`ids`] - string-backed identifiers for reviews, reviewers, and posts
//! - [`error::DomainError`] - domain-level errors

pub mod clock;
pub mod error;
pub mod ids;
