//! Stub API Routes

pub mod complaints;
pub mod health;
pub mod sos;
