//! Domain types and pure logic shared by the movie catalog crates.
//!
//! Nothing in here touches the database or the network.

pub mod error;
pub mod movie;
pub mod types;
