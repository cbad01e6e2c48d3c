//! Fluent assertion API for AST nodes

use crate::bl::ast::{Block, Condition, Kind, Program, Statement};

// ============================================================================
// Entry Points
// ============================================================================

/// Create an assertion builder for a program
pub fn assert_ast(program: &Program) -> ProgramAssertion<'_> {
    ProgramAssertion { program }
}

/// Create an assertion builder for a single statement
pub fn assert_statement(statement: &Statement) -> StatementAssertion<'_> {
    StatementAssertion {
        statement,
        context: "statement".to_string(),
    }
}

/// Create an assertion builder for a block
pub fn assert_block(block: &Block) -> BlockAssertion<'_> {
    BlockAssertion {
        block,
        context: "block".to_string(),
    }
}

// ============================================================================
// Program Assertions
// ============================================================================

pub struct ProgramAssertion<'a> {
    program: &'a Program,
}

impl<'a> ProgramAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.program.name(),
            expected,
            "Expected program name '{}', found '{}'",
            expected,
            self.program.name()
        );
        self
    }

    /// Assert the number of user-defined instructions
    pub fn instruction_count(self, expected: usize) -> Self {
        let actual = self.program.context().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} instructions, found {}: [{}]",
            expected,
            actual,
            self.program
                .context()
                .keys()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        );
        self
    }

    /// Assert on the body of the instruction called `name`
    pub fn instruction<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let block = self
            .program
            .instruction(name)
            .unwrap_or_else(|| panic!("Program has no instruction named '{}'", name));
        assertion(BlockAssertion {
            block,
            context: format!("instruction {}", name),
        });
        self
    }

    /// Assert on the main body
    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assertion(BlockAssertion {
            block: self.program.body(),
            context: "body".to_string(),
        });
        self
    }
}

// ============================================================================
// Block Assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    /// Assert the number of statements in the block
    pub fn len(self, expected: usize) -> Self {
        let actual = self.block.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} statements, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.block)
        );
        self
    }

    pub fn empty(self) -> Self {
        self.len(0)
    }

    /// Assert on a specific statement by index
    pub fn statement<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StatementAssertion<'a>),
    {
        let statement = self.block.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Statement index {} out of bounds (block has {} statements)",
                self.context,
                index,
                self.block.len()
            )
        });
        assertion(StatementAssertion {
            statement,
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Assert the block is a sequence of calls to exactly these instructions
    pub fn calls(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .block
            .iter()
            .map(|s| s.instruction().unwrap_or("<not a call>"))
            .collect();
        assert_eq!(actual, expected, "{}: call sequence differs", self.context);
        self
    }
}

// ============================================================================
// Statement Assertions
// ============================================================================

pub struct StatementAssertion<'a> {
    statement: &'a Statement,
    context: String,
}

impl<'a> StatementAssertion<'a> {
    pub fn kind(self, expected: Kind) -> Self {
        assert_eq!(
            self.statement.kind(),
            expected,
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.statement.display_label()
        );
        self
    }

    pub fn is_call(self, instruction: &str) -> Self {
        let this = self.kind(Kind::Call);
        assert_eq!(
            this.statement.instruction(),
            Some(instruction),
            "{}: Expected CALL {}, found {}",
            this.context,
            instruction,
            this.statement.display_label()
        );
        this
    }

    pub fn is_if(self, condition: Condition) -> Self {
        self.kind(Kind::If).condition(condition)
    }

    pub fn is_if_else(self, condition: Condition) -> Self {
        self.kind(Kind::IfElse).condition(condition)
    }

    pub fn is_while(self, condition: Condition) -> Self {
        self.kind(Kind::While).condition(condition)
    }

    pub fn condition(self, expected: Condition) -> Self {
        assert_eq!(
            self.statement.condition(),
            Some(expected),
            "{}: Expected condition {}, found {}",
            self.context,
            expected,
            self.statement.display_label()
        );
        self
    }

    /// Assert on the statements of a BLOCK statement
    pub fn block<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        match self.statement {
            Statement::Block(block) => assertion(BlockAssertion {
                block,
                context: self.context.clone(),
            }),
            other => panic!(
                "{}: Expected BLOCK, found {}",
                self.context,
                other.display_label()
            ),
        }
        self
    }

    /// Assert on the then-branch of an IF or IF_ELSE
    pub fn then_block<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        match self.statement {
            Statement::If { then_block, .. } | Statement::IfElse { then_block, .. } => {
                assertion(BlockAssertion {
                    block: then_block,
                    context: format!("{}.then", self.context),
                })
            }
            other => panic!(
                "{}: Expected IF or IF_ELSE, found {}",
                self.context,
                other.display_label()
            ),
        }
        self
    }

    /// Assert on the else-branch of an IF_ELSE
    pub fn else_block<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        match self.statement {
            Statement::IfElse { else_block, .. } => assertion(BlockAssertion {
                block: else_block,
                context: format!("{}.else", self.context),
            }),
            other => panic!(
                "{}: Expected IF_ELSE, found {}",
                self.context,
                other.display_label()
            ),
        }
        self
    }

    /// Assert on the body of a WHILE
    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        match self.statement {
            Statement::While { body, .. } => assertion(BlockAssertion {
                block: body,
                context: format!("{}.body", self.context),
            }),
            other => panic!(
                "{}: Expected WHILE, found {}",
                self.context,
                other.display_label()
            ),
        }
        self
    }
}

fn summarize(block: &Block) -> String {
    block
        .iter()
        .map(|s| s.display_label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Statement {
        let mut call = Statement::default();
        call.assemble_call("move");
        let mut s = Statement::default();
        s.assemble_while(Condition::True, [call].into_iter().collect());
        s
    }

    #[test]
    fn test_passing_assertions_chain() {
        assert_statement(&sample())
            .is_while(Condition::True)
            .body(|body| {
                body.calls(&["move"]);
            });
    }

    #[test]
    #[should_panic(expected = "statement: Expected IF, found WHILE true")]
    fn test_wrong_kind_reports_context() {
        assert_statement(&sample()).is_if(Condition::True);
    }

    #[test]
    #[should_panic(expected = "statement.body: Expected 2 statements, found 1")]
    fn test_wrong_length_reports_context() {
        assert_statement(&sample()).body(|body| {
            body.len(2);
        });
    }
}
