//! # bl-parser
//!
//! A parser for BL, the block-structured language used to program the robots of
//! the BugsWorld simulation.
//!
//! The crate turns BL source text into a strongly typed [Program](bl::ast::Program)
//! tree and renders that tree back out in several formats.
//!
//! ## Testing
//!
//! Parser tests use the fluent assertions in the [testing module](bl::testing).

pub mod bl;
