//! bounce2d - 2D sprite bouncing demo
//!
//! Library half of the binary: configuration and the window, render, frame loop and
//! lifecycle systems. `main.rs` wires them into a winit event loop.

pub mod config;
pub mod systems;
