//! Sensing and timing engine of the Tofer IR bounce mat.
//!
//! The engine modulates an IR emitter, infers beam presence from the age of
//! the last received pulse edge, and times each down-up-down cycle of the
//! mat. It is meant to be driven by a firmware with two interrupt contexts
//! feeding one control loop:
//!
//! ```text
//!  [ Timer ISR ] ---> {duty counter} --+
//!                                      |   carrier::evaluate
//!  [ Edge ISR ] ----> {last edge} -----+-> [ Control loop ]
//!                                      |      Bouncer::tick
//!  [ Command ISR ] -> {reset flag} ----+        |
//!                                               V
//!                                  [ Telemetry chunks, LEDs ]
//! ```
//!
//! Everything in this crate is integer arithmetic over `u32` timestamps.
//! Intervals are computed with wrapping subtraction, so the engine survives
//! clock wraparound as long as true elapsed intervals stay within range.

#![no_std]

mod log;

pub mod bouncer;
pub mod carrier;
pub mod filter;
pub mod flight;
pub mod mat;
pub mod signal;
pub mod telemetry;

pub use bouncer::{Bouncer, Input, Output};
