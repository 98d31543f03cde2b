#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::cast_precision_loss,    // screen coordinates are nowhere near 2^52
    clippy::module_name_repetitions,
)]
pub mod config;
pub mod engine;
pub mod frontend;
pub mod geometry;
