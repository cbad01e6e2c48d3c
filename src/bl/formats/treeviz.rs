//! Treeviz formatter for BL programs
//!
//! One line per node, with the nesting drawn as box connectors. Good for eyeballing
//! what the parser built without reading JSON.
//!
//! ```text
//! ⧉ PROGRAM Hunter
//! ├─ INSTRUCTION turn: 1 statements
//! │ └─ CALL: CALL turnleft
//! └─ BEGIN: 1 statements
//!   └─ WHILE: WHILE true
//!     └─ CALL: CALL turn
//! ```
//!
//! IF_ELSE nodes get synthetic `THEN` / `ELSE` children so both branches stay
//! visually apart. Labels are truncated to a configurable width.

use crate::bl::ast::{Block, Program, Statement};

const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(program: &Program) -> String {
    to_treeviz_str_with(program, DEFAULT_LABEL_WIDTH)
}

pub fn to_treeviz_str_with(program: &Program, label_width: usize) -> String {
    let mut result = format!("⧉ PROGRAM {}\n", program.name());
    let viz = TreeViz { label_width };

    for (name, body) in program.context() {
        viz.section(
            &mut result,
            &format!("INSTRUCTION {}: {} statements", name, body.len()),
            body,
            "",
            false,
        );
    }
    viz.section(
        &mut result,
        &format!("BEGIN: {} statements", program.body().len()),
        program.body(),
        "",
        true,
    );
    result
}

/// Render a bare block, one top-level line per statement
pub fn block_to_treeviz_str(block: &Block) -> String {
    let mut result = String::new();
    TreeViz {
        label_width: DEFAULT_LABEL_WIDTH,
    }
    .children(&mut result, block, "");
    result
}

struct TreeViz {
    label_width: usize,
}

impl TreeViz {
    fn section(&self, result: &mut String, label: &str, block: &Block, prefix: &str, is_last: bool) {
        let connector = if is_last { "└─" } else { "├─" };
        result.push_str(&format!("{}{} {}\n", prefix, connector, label));
        let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        self.children(result, block, &new_prefix);
    }

    fn children(&self, result: &mut String, block: &Block, prefix: &str) {
        for (i, statement) in block.iter().enumerate() {
            let is_last = i == block.len() - 1;
            self.statement(result, statement, prefix, is_last);
        }
    }

    fn statement(&self, result: &mut String, statement: &Statement, prefix: &str, is_last: bool) {
        let connector = if is_last { "└─" } else { "├─" };
        let label = truncate(&statement.display_label(), self.label_width);
        result.push_str(&format!(
            "{}{} {}: {}\n",
            prefix,
            connector,
            statement.kind(),
            label
        ));

        let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });

        match statement {
            Statement::Block(block) => self.children(result, block, &new_prefix),
            Statement::If { then_block, .. } => self.children(result, then_block, &new_prefix),
            Statement::IfElse {
                then_block,
                else_block,
                ..
            } => {
                self.section(result, "THEN", then_block, &new_prefix, false);
                self.section(result, "ELSE", else_block, &new_prefix, true);
            }
            Statement::While { body, .. } => self.children(result, body, &new_prefix),
            Statement::Call { .. } => {}
        }
    }
}
