//! Bridge to the exlaunch remote console
//!
//! Sends a single raw command over TCP and decodes the framed reply.

mod client;

pub use client::ConsoleClient;
