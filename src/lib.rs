//! Roamstay application library
//!
//! Listings and bookings modules, the sample-data seeder, and the server
//! bootstrap shared by the `roamstay-app` and `roamstay` binaries.

pub mod modules;
pub mod seed;
pub mod server;

#[cfg(test)]
pub(crate) mod testing;

pub use modules::{bookings, listings};
