//! trackline-jira: REST access to the issue tracker.
//!
//! The collaborator side of the reconciliation:
//! - issue search with changelog expansion and page walking
//! - per-issue commit links from the dev-status API
//! - endpoint normalization and `USER[:PASSWORD]` credentials

pub mod client;
pub mod endpoint;
pub mod error;

pub use client::{JiraClient, SearchPage};
pub use endpoint::{Credentials, resolve_endpoint};
pub use error::{JiraError, Result};
