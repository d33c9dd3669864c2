//! Train Yard Simulation Library
//!
//! A train follows a linear route of stations and drops its cars off in
//! route order. The simulation core has no I/O; the session wraps it in a
//! line-oriented command interface.

pub mod command;
pub mod session;
pub mod simulation;
