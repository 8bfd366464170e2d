// Game module - Owns the actors and wires the systems together
//
// This module contains:
// - screen.rs: GameScreen struct, system wiring and action dispatch

// Module declarations
pub mod screen;

// Re-export types for convenience
pub use screen::GameScreen;
