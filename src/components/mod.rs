//! Reusable UI component modules.

pub mod password_field;
