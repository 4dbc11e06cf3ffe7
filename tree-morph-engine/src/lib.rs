//! Morphing ensemble scene engine.
//!
//! Renders an animated cloud of particles, ornaments, floating captions,
//! photo frames and a capstone star that continuously morphs between a
//! scattered sphere and a cone-spiral tree formation. A single damped
//! progress scalar drives every ensemble; the target arrangement is toggled
//! by pointer input or, optionally, by a hand-gesture stream.

pub mod engine;
pub mod gesture;
pub mod interaction;
