/// Core evaluation logic and context management.
///
/// Contains the evaluation dispatch over expression variants, the call
/// protocol for built-in and user-defined functions, and the output sink.
pub mod core;

/// Built-in function implementations and their registration table.
///
/// Handles the native functions that are bound into the root environment
/// before any program runs.
pub mod function;

/// Utility functions for the evaluator.
///
/// Provides argument type checks and error helpers shared by the built-ins.
pub mod utils;
