//! Networking modules for the identity-provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` wraps the provider's REST account API; it is this crate's only
//! I/O surface.

pub mod identity;
