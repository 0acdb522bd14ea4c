pub mod password;
pub mod sql;
pub mod validate;

pub use sql::{contains_literal, escape_like_pattern};
