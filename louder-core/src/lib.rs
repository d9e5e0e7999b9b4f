#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod backend;
pub mod dates;
pub mod email;
pub mod filter;
pub mod page;
pub mod render;
pub mod ticket;
