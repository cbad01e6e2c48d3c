//! Program: the result of parsing a BL source file

use super::statement::Block;
use serde::Serialize;
use std::collections::BTreeMap;

/// Instruction name -> instruction body
pub type Context = BTreeMap<String, Block>;

/// A parsed BL program
///
/// The program exclusively owns its context and body. `swap_context` and
/// `swap_body` exchange content with the caller, so replacing a program's parts
/// never merges old and new content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    name: String,
    context: Context,
    body: Block,
}

impl Default for Program {
    fn default() -> Self {
        Self {
            name: "Unnamed".to_string(),
            context: Context::new(),
            body: Block::new(),
        }
    }
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn body(&self) -> &Block {
        &self.body
    }

    /// An empty context, ready to be filled and swapped in
    pub fn new_context(&self) -> Context {
        Context::new()
    }

    pub fn swap_context(&mut self, context: &mut Context) {
        std::mem::swap(&mut self.context, context);
    }

    pub fn swap_body(&mut self, body: &mut Block) {
        std::mem::swap(&mut self.body, body);
    }

    /// Body of the instruction called `name`, if the program defines one
    pub fn instruction(&self, name: &str) -> Option<&Block> {
        self.context.get(name)
    }

    pub fn clear(&mut self) {
        *self = Program::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bl::ast::Statement;

    fn block_of(names: &[&str]) -> Block {
        names
            .iter()
            .map(|name| {
                let mut s = Statement::default();
                s.assemble_call(*name);
                s
            })
            .collect()
    }

    #[test]
    fn test_default_program() {
        let program = Program::new();
        assert_eq!(program.name(), "Unnamed");
        assert!(program.context().is_empty());
        assert!(program.body().is_empty());
    }

    #[test]
    fn test_swap_context_replaces_instead_of_merging() {
        let mut program = Program::new();
        let mut first = program.new_context();
        first.insert("a".to_string(), block_of(&["move"]));
        program.swap_context(&mut first);
        assert!(first.is_empty());

        let mut second = program.new_context();
        second.insert("b".to_string(), block_of(&["skip"]));
        program.swap_context(&mut second);

        assert_eq!(program.context().len(), 1);
        assert!(program.instruction("b").is_some());
        assert!(program.instruction("a").is_none());
        // the caller gets the previous context back
        assert!(second.contains_key("a"));
    }

    #[test]
    fn test_swap_body() {
        let mut program = Program::new();
        let mut body = block_of(&["move", "infect"]);
        program.swap_body(&mut body);
        assert!(body.is_empty());
        assert_eq!(program.body().len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut program = Program::new();
        program.set_name("Hunter");
        program.swap_body(&mut block_of(&["move"]));
        program.clear();
        assert_eq!(program, Program::default());
    }
}
