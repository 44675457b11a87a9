/// Arithmetic built-ins: `add`, `sub`, `mul`, `div` and `mod`.
///
/// Each folds its integer arguments left to right with checked arithmetic.
pub mod arithmetic;
/// Pairwise comparison built-ins such as `equal` and `less`.
///
/// Each compares every argument with its immediate predecessor.
pub mod comparison;
/// Sequencing and branching built-ins: `batch` and `if`.
pub mod control;
/// Logical built-ins: `not`, `and`, `or` and `xor`.
///
/// Numbers are truthy when nonzero; results are `1` or `0`.
pub mod logic;
/// The `print` built-in.
///
/// Writes values to the context's output sink.
pub mod print;

pub mod core;
