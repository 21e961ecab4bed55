// tests/grammar.rs
use arbor_lsystem::{
    Error, GrammarError, LSystem, StringLSystem, Symbol, parse_lsystem, parse_symbols,
    symbols_to_string,
};

#[test]
fn test_parse_basic_symbols() {
    assert_eq!(
        parse_symbols("Ab1!"),
        vec![
            Symbol::new('A'),
            Symbol::new('b'),
            Symbol::new('1'),
            Symbol::new('!'),
        ]
    );
    assert_eq!(symbols_to_string(&parse_symbols("Ab1!")), "Ab1!");
}

#[test]
fn test_parse_lsystem() {
    let grammar = StringLSystem::new("X").with_rule("F", "FF").with_rule("X", "F[+X]");
    let lsystem = parse_lsystem(&grammar).unwrap();

    assert_eq!(lsystem.axiom, parse_symbols("X"));
    assert_eq!(lsystem.rules.len(), 2);
    assert_eq!(lsystem.rules[&Symbol::new('F')], parse_symbols("FF"));
    assert_eq!(lsystem.rules[&Symbol::new('X')], parse_symbols("F[+X]"));
}

#[test]
fn test_multi_symbol_predecessor_is_rejected() {
    let grammar = StringLSystem::new("A").with_rule("A", "B").with_rule("AB", "C");
    let err = parse_lsystem(&grammar).unwrap_err();
    assert_eq!(
        err,
        GrammarError::InvalidPredecessor {
            index: 1,
            predecessor: "AB".to_string(),
            found: 2,
        }
    );
}

#[test]
fn test_empty_predecessor_is_rejected() {
    let grammar = StringLSystem::new("A").with_rule("", "B");
    assert!(matches!(
        grammar.parse(),
        Err(GrammarError::InvalidPredecessor { found: 0, .. })
    ));
}

#[test]
fn test_empty_successor_is_allowed() {
    let lsystem = StringLSystem::new("AB").with_rule("A", "").parse().unwrap();
    assert!(lsystem.rules[&Symbol::new('A')].is_empty());
    assert_eq!(lsystem.generate(1), parse_symbols("B"));
}

#[test]
fn test_later_duplicate_predecessor_wins() {
    let lsystem = StringLSystem::new("A")
        .with_rule("A", "B")
        .with_rule("A", "CC")
        .parse()
        .unwrap();
    assert_eq!(lsystem.rules.len(), 1);
    assert_eq!(lsystem.rules[&Symbol::new('A')], parse_symbols("CC"));
}

#[test]
fn test_rename_predecessor_keeps_position() {
    let mut grammar = StringLSystem::new("X")
        .with_rule("F", "FF")
        .with_rule("X", "F")
        .with_rule("G", "F");

    assert!(grammar.rename_predecessor(1, "Y"));
    assert!(!grammar.rename_predecessor(7, "Z"));
    assert!(grammar.set_successor(1, "FY"));

    let predecessors: Vec<&str> = grammar.rules.iter().map(|r| r.predecessor.as_str()).collect();
    assert_eq!(predecessors, vec!["F", "Y", "G"]);
    assert_eq!(grammar.rules[1].successor, "FY");

    let removed = grammar.remove_rule(0).unwrap();
    assert_eq!(removed.predecessor, "F");
    assert!(grammar.remove_rule(5).is_none());
    assert_eq!(grammar.rules.len(), 2);
}

#[test]
fn test_json_round_trip_preserves_rule_order() {
    let grammar = StringLSystem::new("X")
        .with_rule("X", "F-[[X]+X]+F[+FX]-X")
        .with_rule("F", "FF")
        .with_rule("B", "");

    let json = grammar.to_json().unwrap();
    let restored = StringLSystem::from_json(&json).unwrap();
    assert_eq!(restored, grammar);
}

#[test]
fn test_json_shape() {
    let json = r#"{ "axiom": "A", "rules": [ { "predecessor": "A", "successor": "AB" } ] }"#;
    let grammar = StringLSystem::from_json(json).unwrap();
    assert_eq!(grammar, StringLSystem::new("A").with_rule("A", "AB"));
}

#[test]
fn test_malformed_json_is_a_serialization_error() {
    let err = StringLSystem::from_json("{ \"axiom\": 3 }").unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_lsystem_renders_back_to_text() {
    let grammar = StringLSystem::new("X").with_rule("X", "F[X]").with_rule("F", "FF");
    let lsystem: LSystem = grammar.parse().unwrap();

    let text = StringLSystem::from(&lsystem);
    assert_eq!(text.axiom, "X");
    // Rules come back in symbol order.
    assert_eq!(text, StringLSystem::new("X").with_rule("F", "FF").with_rule("X", "F[X]"));
    assert_eq!(text.parse().unwrap(), lsystem);
}

#[test]
fn test_grammar_error_converts_to_crate_error() {
    let err: Error = StringLSystem::new("").with_rule("xy", "").parse().unwrap_err().into();
    assert!(matches!(err, Error::Grammar(_)));
    assert!(err.to_string().contains("exactly one symbol"));
}
