//! Studio Simulation Library
//!
//! A game-studio management simulation engine that runs headless.

pub mod simulation;
