//! Output formats rendered from the hunter fixture and small programs

use bl_parser::bl::formats::{pretty_print_program, serialize_ast_tag, to_treeviz_str};
use bl_parser::bl::parsing::parse_program;
use std::fs;

fn hunter_source() -> String {
    fs::read_to_string(format!(
        "{}/tests/fixtures/hunter.bl",
        env!("CARGO_MANIFEST_DIR")
    ))
    .expect("Failed to read fixture")
}

#[test]
fn test_pretty_print_is_canonical_for_hunter() {
    let source = hunter_source();
    let program = parse_program(&source).unwrap();

    // the fixture is already in canonical layout apart from its leading comment
    let without_comment: String = source.lines().skip(1).map(|l| format!("{l}\n")).collect();
    assert_eq!(pretty_print_program(&program), without_comment);
}

#[test]
fn test_treeviz_hunter() {
    let program = parse_program(&hunter_source()).unwrap();
    insta::assert_snapshot!(to_treeviz_str(&program), @r"
⧉ PROGRAM Hunter
├─ INSTRUCTION FindObstacle: 1 statements
│ └─ WHILE: WHILE next-is-empty
│   └─ CALL: CALL move
├─ INSTRUCTION TurnAround: 2 statements
│ ├─ CALL: CALL turnleft
│ └─ CALL: CALL turnleft
└─ BEGIN: 1 statements
  └─ WHILE: WHILE true
    ├─ CALL: CALL FindObstacle
    └─ IF_ELSE: IF_ELSE next-is-enemy
      ├─ THEN
      │ └─ CALL: CALL infect
      └─ ELSE
        └─ IF_ELSE: IF_ELSE next-is-wall
          ├─ THEN
          │ └─ CALL: CALL TurnAround
          └─ ELSE
            └─ CALL: CALL skip
");
}

#[test]
fn test_tag_hunter() {
    let program = parse_program(&hunter_source()).unwrap();
    insta::assert_snapshot!(serialize_ast_tag(&program), @r#"
<program name="Hunter">
  <instruction name="FindObstacle">
    <while condition="next-is-empty">
      <call>move</call>
    </while>
  </instruction>
  <instruction name="TurnAround">
    <call>turnleft</call>
    <call>turnleft</call>
  </instruction>
  <body>
    <while condition="true">
      <call>FindObstacle</call>
      <if-else condition="next-is-enemy">
        <then>
          <call>infect</call>
        </then>
        <else>
          <if-else condition="next-is-wall">
            <then>
              <call>TurnAround</call>
            </then>
            <else>
              <call>skip</call>
            </else>
          </if-else>
        </else>
      </if-else>
    </while>
  </body>
</program>
"#);
}

#[test]
fn test_json_shape() {
    let program =
        parse_program("PROGRAM p IS INSTRUCTION go IS move END go BEGIN WHILE true DO go END WHILE END p")
            .unwrap();
    insta::assert_snapshot!(serde_json::to_string_pretty(&program).unwrap(), @r#"
{
  "name": "p",
  "context": {
    "go": {
      "statements": [
        {
          "kind": "CALL",
          "instruction": "move"
        }
      ]
    }
  },
  "body": {
    "statements": [
      {
        "kind": "WHILE",
        "condition": "true",
        "body": {
          "statements": [
            {
              "kind": "CALL",
              "instruction": "go"
            }
          ]
        }
      }
    ]
  }
}
"#);
}
