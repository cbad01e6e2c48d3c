//! Program-level parsing: accepted programs and every rejection path

use bl_parser::bl::ast::{Condition, ParseError, Program, ReservedKind};
use bl_parser::bl::lexing::{tokens, Position};
use bl_parser::bl::parsing::parse_program;
use bl_parser::bl::testing::assert_ast;
use rstest::rstest;
use std::fs;

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name))
        .expect("Failed to read fixture")
}

fn parse_err(source: &str) -> ParseError {
    *parse_program(source).expect_err("parse should fail")
}

#[test]
fn test_minimal_program() {
    let program = parse_program("PROGRAM p IS BEGIN move END p").unwrap();
    assert_ast(&program)
        .name("p")
        .instruction_count(0)
        .body(|body| {
            body.calls(&["move"]);
        });
}

#[test]
fn test_if_in_body() {
    let program =
        parse_program("PROGRAM p IS BEGIN IF next-is-enemy THEN move END IF END p").unwrap();
    assert_ast(&program).body(|body| {
        body.len(1).statement(0, |s| {
            s.is_if(Condition::NextIsEnemy).then_block(|then| {
                then.calls(&["move"]);
            });
        });
    });
}

#[test]
fn test_hunter_fixture() {
    let program = parse_program(&fixture("hunter.bl")).unwrap();
    assert_ast(&program)
        .name("Hunter")
        .instruction_count(2)
        .instruction("FindObstacle", |block| {
            block.len(1).statement(0, |s| {
                s.is_while(Condition::NextIsEmpty).body(|body| {
                    body.calls(&["move"]);
                });
            });
        })
        .instruction("TurnAround", |block| {
            block.calls(&["turnleft", "turnleft"]);
        })
        .body(|body| {
            body.len(1).statement(0, |s| {
                s.is_while(Condition::True).body(|body| {
                    body.len(2)
                        .statement(0, |s| {
                            s.is_call("FindObstacle");
                        })
                        .statement(1, |s| {
                            s.is_if_else(Condition::NextIsEnemy)
                                .then_block(|then| {
                                    then.calls(&["infect"]);
                                })
                                .else_block(|otherwise| {
                                    otherwise.len(1).statement(0, |s| {
                                        s.is_if_else(Condition::NextIsWall);
                                    });
                                });
                        });
                });
            });
        });
}

#[test]
fn test_instructions_may_call_each_other_and_unknown_names() {
    // calls are not resolved against the context
    let program = parse_program(
        "PROGRAM p IS INSTRUCTION a IS b END a INSTRUCTION b IS nowhere END b BEGIN a END p",
    )
    .unwrap();
    assert_ast(&program)
        .instruction_count(2)
        .instruction("a", |block| {
            block.calls(&["b"]);
        })
        .instruction("b", |block| {
            block.calls(&["nowhere"]);
        });
}

#[test]
fn test_empty_instruction_and_body() {
    let program = parse_program("PROGRAM p IS INSTRUCTION a IS END a BEGIN END p").unwrap();
    assert_ast(&program)
        .instruction("a", |block| {
            block.empty();
        })
        .body(|body| {
            body.empty();
        });
}

#[test]
fn test_duplicate_instruction() {
    let err = parse_err("PROGRAM p IS INSTRUCTION a IS move END a INSTRUCTION a IS skip END a BEGIN END p");
    assert_eq!(
        err,
        ParseError::DuplicateInstruction {
            name: "a".to_string(),
            position: Position::new(1, 42),
        }
    );
}

#[rstest]
#[case("move", ReservedKind::PrimitiveInstruction)]
#[case("infect", ReservedKind::PrimitiveInstruction)]
#[case("WHILE", ReservedKind::Keyword)]
#[case("BEGIN", ReservedKind::Keyword)]
#[case("random", ReservedKind::Condition)]
#[case("next-is-wall", ReservedKind::Condition)]
fn test_reserved_instruction_names(#[case] name: &str, #[case] kind: ReservedKind) {
    let source = format!("PROGRAM p IS INSTRUCTION {name} IS skip END {name} BEGIN END p");
    match parse_err(&source) {
        ParseError::ReservedName {
            name: found,
            reserved,
            ..
        } => {
            assert_eq!(found, name);
            assert_eq!(reserved, kind);
        }
        other => panic!("expected ReservedName, got {other:?}"),
    }
}

#[rstest]
#[case::program_name("PROGRAM p IS BEGIN move END q", "p", "q")]
#[case::instruction_name("PROGRAM p IS INSTRUCTION a IS move END b BEGIN END p", "a", "b")]
fn test_name_mismatch(#[case] source: &str, #[case] opening: &str, #[case] closing: &str) {
    match parse_err(source) {
        ParseError::NameMismatch {
            opening: o,
            closing: c,
            ..
        } => {
            assert_eq!(o, opening);
            assert_eq!(c, closing);
        }
        other => panic!("expected NameMismatch, got {other:?}"),
    }
}

#[test]
fn test_name_mismatch_fixture_position() {
    let err = parse_err(&fixture("name_mismatch.bl"));
    assert_eq!(err.position(), Position::new(6, 9));
    assert!(err.to_string().starts_with("Identifier names do not match"));
}

#[rstest]
#[case::missing_program("p IS BEGIN END p", "PROGRAM")]
#[case::missing_is("PROGRAM p BEGIN END p", "IS")]
#[case::body_without_begin("PROGRAM p IS move END p", "INSTRUCTION")]
#[case::missing_end_if("PROGRAM p IS BEGIN IF random THEN move END p", "IF")]
#[case::missing_end_while("PROGRAM p IS BEGIN WHILE true DO move END p", "WHILE")]
#[case::truncated("PROGRAM p IS BEGIN move", "END")]
#[case::instruction_without_is("PROGRAM p IS INSTRUCTION a move END a BEGIN END p", "IS")]
fn test_missing_keyword(#[case] source: &str, #[case] keyword: &str) {
    match parse_err(source) {
        ParseError::MissingKeyword { expected, .. } => assert_eq!(expected, keyword),
        other => panic!("expected MissingKeyword {keyword}, got {other:?}"),
    }
}

#[rstest]
#[case::numeric_program_name("PROGRAM 42 IS BEGIN END 42")]
#[case::keyword_program_name("PROGRAM IF IS BEGIN END IF")]
#[case::stray_else("PROGRAM p IS BEGIN ELSE move END p")]
#[case::stray_end_in_instruction("PROGRAM p IS INSTRUCTION a IS END END a BEGIN END p")]
#[case::symbol_in_body("PROGRAM p IS BEGIN move; END p")]
#[case::stray_end_in_body("PROGRAM p IS BEGIN IF random THEN move END IF END END p")]
fn test_misplaced_tokens_are_rejected(#[case] source: &str) {
    let err = parse_err(source);
    assert!(
        matches!(
            err,
            ParseError::InvalidIdentifier { .. }
                | ParseError::MissingKeyword { .. }
                | ParseError::NameMismatch { .. }
        ),
        "unexpected error {err:?}"
    );
}

#[test]
fn test_stray_else_in_body_reports_missing_end() {
    let err = parse_err("PROGRAM p IS BEGIN ELSE move END p");
    assert_eq!(
        err,
        ParseError::MissingKeyword {
            expected: "END",
            found: "ELSE".to_string(),
            position: Position::new(1, 20),
        }
    );
}

#[test]
fn test_invalid_condition() {
    let err = parse_err("PROGRAM p IS BEGIN IF is-enemy THEN move END IF END p");
    assert_eq!(
        err,
        ParseError::InvalidCondition {
            found: "is-enemy".to_string(),
            position: Position::new(1, 23),
        }
    );
}

#[rstest]
#[case("PROGRAM p IS BEGIN move END p extra")]
#[case("PROGRAM p IS BEGIN move END p END")]
#[case("PROGRAM p IS BEGIN END p PROGRAM q IS BEGIN END q")]
fn test_trailing_content(#[case] source: &str) {
    assert!(matches!(parse_err(source), ParseError::TrailingContent { .. }));
}

#[test]
fn test_comments_are_ignored() {
    let program = parse_program(
        "# leading comment\nPROGRAM p IS # after header\nBEGIN\n  move # trailing\nEND p\n# done",
    )
    .unwrap();
    assert_ast(&program).name("p").body(|body| {
        body.calls(&["move"]);
    });
}

#[test]
fn test_failed_parse_leaves_program_untouched() {
    let mut program = Program::new();
    program
        .parse(&mut tokens("PROGRAM first IS INSTRUCTION a IS move END a BEGIN a END first"))
        .unwrap();
    let before = program.clone();

    let result = program.parse(&mut tokens("PROGRAM second IS BEGIN move END other"));
    assert!(result.is_err());
    assert_eq!(program, before);
}

#[test]
fn test_reparse_replaces_everything() {
    let mut program = Program::new();
    program
        .parse(&mut tokens("PROGRAM first IS INSTRUCTION a IS move END a BEGIN a END first"))
        .unwrap();
    program
        .parse(&mut tokens("PROGRAM second IS BEGIN skip END second"))
        .unwrap();
    assert_ast(&program)
        .name("second")
        .instruction_count(0)
        .body(|body| {
            body.calls(&["skip"]);
        });
}
