//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates repeated
//! rendering details to `components`.

pub mod home;
pub mod signup;
