//! Identifiers and the credential seam used by the Graph clients.
//!
//! Token acquisition happens outside this crate; clients only ask an [`Authorizer`] for the
//! `Authorization` header value right before dispatching a request.

pub mod authorizer;
pub mod id;
pub mod secret;

pub use authorizer::*;
pub use id::*;
pub use secret::*;
