//! BL pretty-printer
//!
//! Renders programs and statements back to BL source in a canonical layout:
//!
//! ```text
//! PROGRAM Hunter IS
//!
//!     INSTRUCTION FindObstacle IS
//!         WHILE next-is-empty DO
//!             move
//!         END WHILE
//!     END FindObstacle
//!
//! BEGIN
//!     FindObstacle
//! END Hunter
//! ```
//!
//! Instructions are written in name order. The output always parses back to the
//! tree it was printed from.

use crate::bl::ast::{Block, Program, Statement};
use crate::bl::config::FormattingConfig;

/// Pretty-print a program with the default layout
pub fn pretty_print_program(program: &Program) -> String {
    pretty_print_program_with(program, &FormattingConfig::default())
}

pub fn pretty_print_program_with(program: &Program, config: &FormattingConfig) -> String {
    let printer = Printer { config };
    let mut out = String::new();

    out.push_str(&format!("PROGRAM {} IS\n\n", program.name()));
    for (i, (name, body)) in program.context().iter().enumerate() {
        if i > 0 && config.blank_line_between_instructions {
            out.push('\n');
        }
        printer.line(&mut out, 1, &format!("INSTRUCTION {} IS", name));
        printer.block(&mut out, body, 2);
        printer.line(&mut out, 1, &format!("END {}", name));
    }
    if !program.context().is_empty() {
        out.push('\n');
    }
    out.push_str("BEGIN\n");
    printer.block(&mut out, program.body(), 1);
    out.push_str(&format!("END {}\n", program.name()));
    out
}

/// Pretty-print one statement, starting at nesting level `level`
pub fn pretty_print_statement(statement: &Statement, level: usize) -> String {
    let config = FormattingConfig::default();
    let printer = Printer { config: &config };
    let mut out = String::new();
    printer.statement(&mut out, statement, level);
    out
}

/// Pretty-print the statements of a block at nesting level 0
pub fn pretty_print_block(block: &Block) -> String {
    pretty_print_block_with(block, &FormattingConfig::default())
}

pub fn pretty_print_block_with(block: &Block, config: &FormattingConfig) -> String {
    let printer = Printer { config };
    let mut out = String::new();
    printer.block(&mut out, block, 0);
    out
}

struct Printer<'a> {
    config: &'a FormattingConfig,
}

impl Printer<'_> {
    fn line(&self, out: &mut String, level: usize, text: &str) {
        out.push_str(&" ".repeat(level * self.config.indent_width));
        out.push_str(text);
        out.push('\n');
    }

    fn block(&self, out: &mut String, block: &Block, level: usize) {
        for statement in block {
            self.statement(out, statement, level);
        }
    }

    fn statement(&self, out: &mut String, statement: &Statement, level: usize) {
        match statement {
            Statement::Block(block) => self.block(out, block, level),
            Statement::If {
                condition,
                then_block,
            } => {
                self.line(out, level, &format!("IF {} THEN", condition));
                self.block(out, then_block, level + 1);
                self.line(out, level, "END IF");
            }
            Statement::IfElse {
                condition,
                then_block,
                else_block,
            } => {
                self.line(out, level, &format!("IF {} THEN", condition));
                self.block(out, then_block, level + 1);
                self.line(out, level, "ELSE");
                self.block(out, else_block, level + 1);
                self.line(out, level, "END IF");
            }
            Statement::While { condition, body } => {
                self.line(out, level, &format!("WHILE {} DO", condition));
                self.block(out, body, level + 1);
                self.line(out, level, "END WHILE");
            }
            Statement::Call { instruction } => self.line(out, level, instruction),
        }
    }
}
