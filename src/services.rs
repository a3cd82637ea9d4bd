//! Per-service client bundles built from shared [`ClientOptions`](crate::options::ClientOptions).

pub mod applications;
pub mod overrides;
