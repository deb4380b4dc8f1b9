use argflag::{ArgParser, Argument, ParseError, RegistrationError, Token, Value};
use assert_matches::assert_matches;
use rstest::rstest;

fn registry() -> ArgParser {
    let mut parser = ArgParser::new();
    parser
        .add_argument(Argument::new("--name", "-n", "name"))
        .unwrap()
        .add_argument(Argument::new("--count", "-c", "count").argument_type("int"))
        .unwrap()
        .add_argument(
            Argument::new("--nums", "-N", "nums")
                .argument_type("list")
                .secondary_argument_type("int"),
        )
        .unwrap()
        .add_argument(
            Argument::new("--point", "-p", "point")
                .argument_type("tuple")
                .secondary_argument_type("float"),
        )
        .unwrap()
        .add_argument(
            Argument::new("--verbose", "-v", "verbose")
                .has_arguments(false)
                .help("Print more."),
        )
        .unwrap();
    parser
}

#[test]
fn switch_is_true() {
    let mut parser = registry();
    let output = parser.parse_arguments(["--verbose"]).unwrap();
    assert_eq!(output.get_bool("verbose"), Some(true));
    assert_eq!(output.len(), 1);
}

#[test]
fn unconverted_value_is_raw() {
    let mut parser = registry();
    let output = parser.parse_arguments(["--name", "Alice"]).unwrap();
    assert_eq!(output.get("name"), Some(&Value::Str("Alice".to_string())));
}

#[test]
fn int_value() {
    let mut parser = registry();
    let output = parser.parse_arguments(["--count", "42"]).unwrap();
    assert_eq!(output.get("count"), Some(&Value::Int(42)));

    let mut parser = registry();
    assert_matches!(
        parser.parse_arguments(["--count", "abc"]),
        Err(ParseError::ConversionError { target: "int", .. })
    );
}

#[test]
fn list_of_ints() {
    let mut parser = registry();
    let output = parser.parse_arguments(["--nums", "1", "2", "3"]).unwrap();
    assert_eq!(
        output.get("nums"),
        Some(&Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]))
    );
}

#[test]
fn tuple_of_floats() {
    let mut parser = registry();
    let output = parser.parse_arguments(["-p", "1", "2.5"]).unwrap();
    assert_eq!(
        output.get("point"),
        Some(&Value::Tuple(
            vec![Value::Float(1.0), Value::Float(2.5)].into_boxed_slice()
        ))
    );
}

#[rstest]
#[case(vec!["-v", "-n", "Bob", "-c", "3", "-N", "4", "5"])]
#[case(vec!["stray", "-N", "4", "5", "-c", "3", "-n", "Bob", "Alice", "-v"])]
fn fresh_parsers_agree(#[case] tokens: Vec<&str>) {
    let mut a = registry();
    let mut b = registry();
    let output_a = a.parse_arguments(tokens.clone()).unwrap();
    let output_b = b.parse_arguments(tokens).unwrap();
    assert_eq!(output_a, output_b);
    assert_eq!(output_a.get_str("name"), Some("Bob"));
    assert_eq!(output_a.get_int("count"), Some(3));
    assert_eq!(output_a.get_bool("verbose"), Some(true));
}

#[test]
fn unknown_flag() {
    let mut parser = registry();
    assert_eq!(
        parser.parse_arguments(["--bogus"]).unwrap_err(),
        ParseError::UnknownFlag {
            flag: "--bogus".to_string(),
            index: 0,
        }
    );
}

#[test]
fn missing_value() {
    let mut parser = registry();
    assert_eq!(
        parser.parse_arguments(["--count"]).unwrap_err(),
        ParseError::MissingValue {
            flag: "--count".to_string(),
            index: 0,
        }
    );
}

#[test]
fn last_write_wins() {
    let mut parser = registry();
    let output = parser
        .parse_arguments(["--count", "1", "--count", "2"])
        .unwrap();
    assert_eq!(output.get_int("count"), Some(2));
}

#[test]
fn mixed_tokens() {
    let mut parser = registry();
    let tokens: Vec<Token> = vec![
        "--nums".into(),
        Token::Int(1),
        "2".into(),
        Token::Bool(true),
        "--name".into(),
        Token::Float(0.5),
    ];
    let output = parser.parse_arguments(tokens).unwrap();
    assert_eq!(
        output.get("nums"),
        Some(&Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(1)]))
    );
    assert_eq!(output.get_float("name"), Some(0.5));
}

#[test]
fn invalid_registration() {
    let mut parser = ArgParser::new();
    assert_matches!(
        parser.add_argument(Argument::new("--x", "-x", "x").argument_type("dict")),
        Err(RegistrationError::InvalidValue {
            field: "argument_type",
            ..
        })
    );
    assert_matches!(
        parser.add_argument(
            Argument::new("--x", "-x", "x")
                .argument_type("list")
                .secondary_argument_type("tuple")
        ),
        Err(RegistrationError::InvalidValue {
            field: "secondary_argument_type",
            ..
        })
    );
    assert!(parser.arguments().is_empty());
}

#[test]
fn empty_secondary_flag_registers() {
    let mut parser = ArgParser::new();
    parser
        .add_argument(Argument::new("--verbose", "", "verbose").has_arguments(false))
        .unwrap()
        .add_argument(Argument::new("--name", "-n", "name").argument_type(""))
        .unwrap();
    let output = parser.parse_arguments(["--verbose", "-n", "7"]).unwrap();
    assert_eq!(output.get_bool("verbose"), Some(true));
    assert_eq!(output.get_str("name"), Some("7"));
}

#[test]
fn help_messages_are_kept() {
    let parser = registry();
    let documented: Vec<(&str, Option<&str>)> = parser
        .arguments()
        .iter()
        .map(|entry| (entry.main_flag(), entry.help_message()))
        .collect();
    assert_eq!(
        documented,
        vec![
            ("--name", None),
            ("--count", None),
            ("--nums", None),
            ("--point", None),
            ("--verbose", Some("Print more.")),
        ]
    );
}
