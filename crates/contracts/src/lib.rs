//! Shared types and pure logic for the portfolio frontend and backend.
//!
//! Nothing in this crate touches the DOM or the network, so everything here
//! is testable natively with `cargo test -p portfolio-contracts`.

pub mod domain;
pub mod motion;
pub mod shared;
