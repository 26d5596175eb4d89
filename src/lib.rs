//! Optimal salary-cap lineup selection.
//!
//! Given a pool of scored candidates, finds the fixed-size lineup with the
//! maximum total score whose total salary fits under a cap — the classic
//! fixed-cardinality knapsack shape, solved exactly by exhaustive subset
//! enumeration:
//!
//! - **candidate**: the immutable pool record (name, salary, average
//!   output, starting position).
//! - **scoring**: base output plus weighted position-differential upside;
//!   one venue-dependent scalar re-ranks the whole pool.
//! - **combine**: lazy lexicographic subset enumeration, the fixed order
//!   the tie-break contract is defined against.
//! - **optimizer**: run configuration, lineup evaluation, and the
//!   exhaustive search (serial, or rayon-partitioned behind the
//!   `parallel` feature).
//! - **prediction**: the immutable optimum witness and its report
//!   rendering.
//! - **venue**: caller-supplied venue → differential weight resolution.
//!
//! # Architecture
//!
//! The crate is a pure computational core: no I/O, no global state, and
//! every run is independent and repeatable given the same pool and
//! configuration. Slate ingestion (tabular parsing, venue tables) and
//! report delivery belong to consumers: they pass a candidate pool and a
//! resolved [`optimizer::SlateConfig`] in, and take a
//! [`prediction::Prediction`] out.

pub mod candidate;
pub mod combine;
pub mod optimizer;
pub mod prediction;
pub mod scoring;
pub mod venue;
