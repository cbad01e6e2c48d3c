//! Statement nodes
//!
//!     A Statement is one node of a labeled ordered tree. Its kind decides everything
//!     else about it:
//!
//!         BLOCK     0..n children, none of them a BLOCK
//!         IF        condition, then-block
//!         IF_ELSE   condition, then-block, else-block
//!         WHILE     condition, body block
//!         CALL      instruction name, no children
//!
//!     Each kind is its own enum variant and nested branches are typed as Block, so
//!     a node with the wrong arity or a missing condition cannot be built.
//!
//! Ownership
//!
//!     Assembly operations (`add_to_block`, `assemble_*`) take their operands by
//!     value; the caller's binding is moved from and cannot be used again.
//!     Disassembly operations (`remove_from_block`, `disassemble_*`) return the parts
//!     by value and reset the node to an empty BLOCK. Calling an operation on a node
//!     of the wrong kind, or with an out-of-range position, is a caller bug and
//!     panics.

use super::condition::Condition;
use crate::bl::lexing::is_identifier;
use serde::Serialize;
use std::fmt;

/// Statement kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Block,
    If,
    IfElse,
    While,
    Call,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Block => "BLOCK",
            Kind::If => "IF",
            Kind::IfElse => "IF_ELSE",
            Kind::While => "WHILE",
            Kind::Call => "CALL",
        };
        write!(f, "{}", name)
    }
}

/// The ordered children of a BLOCK statement
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Block {
    statements: Vec<Statement>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&Statement> {
        self.statements.get(pos)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    /// Insert `statement` at `pos`, shifting later children right
    pub fn insert(&mut self, pos: usize, statement: Statement) {
        assert!(
            pos <= self.len(),
            "Violation of: pos <= [length of this BLOCK] (pos = {}, length = {})",
            pos,
            self.len()
        );
        assert!(
            statement.kind() != Kind::Block,
            "Violation of: [s is not a BLOCK statement]"
        );
        self.statements.insert(pos, statement);
    }

    pub fn push(&mut self, statement: Statement) {
        self.insert(self.len(), statement);
    }

    /// Remove and return the child at `pos`
    pub fn remove(&mut self, pos: usize) -> Statement {
        assert!(
            pos < self.len(),
            "Violation of: pos < [length of this BLOCK] (pos = {}, length = {})",
            pos,
            self.len()
        );
        self.statements.remove(pos)
    }
}

impl FromIterator<Statement> for Block {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        let mut block = Block::new();
        for statement in iter {
            block.push(statement);
        }
        block
    }
}

impl IntoIterator for Block {
    type Item = Statement;
    type IntoIter = std::vec::IntoIter<Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

/// A BL statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Statement {
    Block(Block),
    If {
        condition: Condition,
        then_block: Block,
    },
    IfElse {
        condition: Condition,
        then_block: Block,
        else_block: Block,
    },
    While {
        condition: Condition,
        body: Block,
    },
    Call {
        instruction: String,
    },
}

impl Default for Statement {
    /// An empty BLOCK
    fn default() -> Self {
        Statement::Block(Block::new())
    }
}

impl Statement {
    pub fn kind(&self) -> Kind {
        match self {
            Statement::Block(_) => Kind::Block,
            Statement::If { .. } => Kind::If,
            Statement::IfElse { .. } => Kind::IfElse,
            Statement::While { .. } => Kind::While,
            Statement::Call { .. } => Kind::Call,
        }
    }

    /// The condition of an IF, IF_ELSE or WHILE node
    pub fn condition(&self) -> Option<Condition> {
        match self {
            Statement::If { condition, .. }
            | Statement::IfElse { condition, .. }
            | Statement::While { condition, .. } => Some(*condition),
            _ => None,
        }
    }

    /// The instruction name of a CALL node
    pub fn instruction(&self) -> Option<&str> {
        match self {
            Statement::Call { instruction } => Some(instruction.as_str()),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Statement::Block(block) => Some(block),
            _ => None,
        }
    }

    /// Reset to an empty BLOCK
    pub fn clear(&mut self) {
        *self = Statement::default();
    }

    fn block_mut(&mut self) -> &mut Block {
        match self {
            Statement::Block(block) => block,
            other => panic!(
                "Violation of: [this is a BLOCK statement] (found {})",
                other.kind()
            ),
        }
    }

    pub fn length_of_block(&self) -> usize {
        match self {
            Statement::Block(block) => block.len(),
            other => panic!(
                "Violation of: [this is a BLOCK statement] (found {})",
                other.kind()
            ),
        }
    }

    /// Insert `s` as the child at `pos` of this BLOCK
    pub fn add_to_block(&mut self, pos: usize, s: Statement) {
        self.block_mut().insert(pos, s);
    }

    /// Remove and return the child at `pos` of this BLOCK
    pub fn remove_from_block(&mut self, pos: usize) -> Statement {
        self.block_mut().remove(pos)
    }

    pub fn assemble_if(&mut self, condition: Condition, then_block: Block) {
        *self = Statement::If {
            condition,
            then_block,
        };
    }

    pub fn disassemble_if(&mut self) -> (Condition, Block) {
        let kind = self.kind();
        let Statement::If {
            condition,
            then_block,
        } = std::mem::take(self)
        else {
            panic!("Violation of: [this is an IF statement] (found {})", kind);
        };
        (condition, then_block)
    }

    pub fn assemble_if_else(&mut self, condition: Condition, then_block: Block, else_block: Block) {
        *self = Statement::IfElse {
            condition,
            then_block,
            else_block,
        };
    }

    pub fn disassemble_if_else(&mut self) -> (Condition, Block, Block) {
        let kind = self.kind();
        let Statement::IfElse {
            condition,
            then_block,
            else_block,
        } = std::mem::take(self)
        else {
            panic!("Violation of: [this is an IF_ELSE statement] (found {})", kind);
        };
        (condition, then_block, else_block)
    }

    pub fn assemble_while(&mut self, condition: Condition, body: Block) {
        *self = Statement::While { condition, body };
    }

    pub fn disassemble_while(&mut self) -> (Condition, Block) {
        let kind = self.kind();
        let Statement::While { condition, body } = std::mem::take(self) else {
            panic!("Violation of: [this is a WHILE statement] (found {})", kind);
        };
        (condition, body)
    }

    pub fn assemble_call(&mut self, instruction: impl Into<String>) {
        let instruction = instruction.into();
        assert!(
            is_identifier(&instruction),
            "Violation of: inst is a valid IDENTIFIER (got \"{}\")",
            instruction
        );
        *self = Statement::Call { instruction };
    }

    pub fn disassemble_call(&mut self) -> String {
        let kind = self.kind();
        let Statement::Call { instruction } = std::mem::take(self) else {
            panic!("Violation of: [this is a CALL statement] (found {})", kind);
        };
        instruction
    }

    /// Short human-readable label, e.g. `IF next-is-wall` or `CALL move`
    pub fn display_label(&self) -> String {
        match self {
            Statement::Block(block) => format!("BLOCK ({} statements)", block.len()),
            Statement::Call { instruction } => format!("CALL {}", instruction),
            other => format!(
                "{} {}",
                other.kind(),
                other.condition().map(|c| c.as_token()).unwrap_or_default()
            ),
        }
    }
}
