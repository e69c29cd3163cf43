//! Client-side state records.
//!
//! DESIGN
//! ======
//! State lives in plain records owned by the page that renders them. The two
//! pages share nothing, so no state is provided via context.

pub mod signup;
