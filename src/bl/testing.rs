//! Testing utilities for AST assertions
//!
//! This module provides a fluent API for asserting on parsed programs and
//! statements, so parser tests read like the structure they expect.
//!
//! # Example
//!
//! ```rust,ignore
//! let program = parse_program("PROGRAM p IS BEGIN IF random THEN move END IF END p")?;
//!
//! assert_ast(&program)
//!     .name("p")
//!     .instruction_count(0)
//!     .body(|body| {
//!         body.len(1).statement(0, |s| {
//!             s.is_if(Condition::Random).then_block(|block| {
//!                 block.len(1).statement(0, |s| {
//!                     s.is_call("move");
//!                 });
//!             });
//!         });
//!     });
//! ```

mod assertions;

pub use assertions::{
    assert_ast, assert_block, assert_statement, BlockAssertion, ProgramAssertion,
    StatementAssertion,
};
