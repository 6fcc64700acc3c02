//! Meggy Jr style rainbow for an 8x8 smart LED matrix.
//!
//! The pattern and the render loop only talk to the hardware through [`display::DisplayDriver`],
//! so everything here runs on the host as well as on the RP2040.

#![cfg_attr(not(test), no_std)]

pub mod animation;
pub mod color;
pub mod display;
pub mod pattern;
