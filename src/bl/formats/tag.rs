//! XML-like AST tag serialization
//!
//! Each AST node becomes a tag; conditions and names go in attributes, calls carry
//! the instruction name as text content.
//!
//! ```text
//! <program name="p">
//!   <instruction name="turn">
//!     <call>turnleft</call>
//!   </instruction>
//!   <body>
//!     <if-else condition="random">
//!       <then>
//!         <call>turn</call>
//!       </then>
//!       <else>
//!         <call>move</call>
//!       </else>
//!     </if-else>
//!   </body>
//! </program>
//! ```
//!
//! Empty blocks collapse to a self-closing tag.

use crate::bl::ast::{Block, Program, Statement};

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new(indent_level: usize) -> Self {
        Self {
            output: String::new(),
            indent_level,
        }
    }

    fn push_line(&mut self, s: &str) {
        self.output.push_str(&"  ".repeat(self.indent_level));
        self.output.push_str(s);
        self.output.push('\n');
    }

    fn container(&mut self, open: &str, tag: &str, block: &Block) {
        if block.is_empty() {
            self.push_line(&format!("<{open}/>"));
            return;
        }
        self.push_line(&format!("<{open}>"));
        self.indent_level += 1;
        self.block(block);
        self.indent_level -= 1;
        self.push_line(&format!("</{tag}>"));
    }

    fn block(&mut self, block: &Block) {
        for statement in block {
            self.statement(statement);
        }
    }

    fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Block(block) => self.container("block", "block", block),
            Statement::If {
                condition,
                then_block,
            } => self.container(&format!("if condition=\"{}\"", condition), "if", then_block),
            Statement::IfElse {
                condition,
                then_block,
                else_block,
            } => {
                self.push_line(&format!("<if-else condition=\"{}\">", condition));
                self.indent_level += 1;
                self.container("then", "then", then_block);
                self.container("else", "else", else_block);
                self.indent_level -= 1;
                self.push_line("</if-else>");
            }
            Statement::While { condition, body } => {
                self.container(&format!("while condition=\"{}\"", condition), "while", body)
            }
            Statement::Call { instruction } => {
                self.push_line(&format!("<call>{}</call>", escape_xml(instruction)))
            }
        }
    }
}

/// Serialize a program to AST tag format
pub fn serialize_ast_tag(program: &Program) -> String {
    let mut serializer = TagSerializer::new(1);
    for (name, body) in program.context() {
        serializer.container(
            &format!("instruction name=\"{}\"", escape_xml(name)),
            "instruction",
            body,
        );
    }
    serializer.container("body", "body", program.body());

    format!(
        "<program name=\"{}\">\n{}</program>",
        escape_xml(program.name()),
        serializer.output
    )
}

/// Serialize the statements of a block, without a wrapping tag
pub fn serialize_block_tag(block: &Block) -> String {
    let mut serializer = TagSerializer::new(0);
    serializer.block(block);
    serializer.output
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
