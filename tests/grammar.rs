use cfgkit::grammar::Grammar;
mod common;

#[test]
fn test_grammar_new() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let g = Grammar::new(&common::read_test_file("grammars/expr.cfg"))?;
    assert_eq!(g.num_alternatives(), 6);
    assert_eq!(g.name(g.start()), "E");
    assert!(g.is_left_recursive());

    Ok(())
}

#[test]
fn test_grammar_new_from_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let g = Grammar::new_from_file(&common::test_file_path("grammars/nlr_expr.cfg"))?;
    assert_eq!(g.num_alternatives(), 8);
    assert!(!g.is_left_recursive());

    Ok(())
}

#[test]
fn test_malformed_lines_skipped() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let g = Grammar::new_from_file(&common::test_file_path("grammars/malformed.cfg"))?;

    assert_eq!(g.num_alternatives(), 2);
    assert_eq!(g.diagnostics().len(), 2);
    assert_eq!(g.diagnostics()[0].line, 3);
    assert_eq!(g.diagnostics()[1].line, 4);

    Ok(())
}

#[test]
fn test_remove_left_recursion() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let g = Grammar::new_from_file(&common::test_file_path("grammars/expr.cfg"))?
        .without_left_recursion();

    assert!(!g.is_left_recursive());

    let e = g.maybe_non_terminal_index("E").unwrap();
    let ep = g.maybe_non_terminal_index("E'").unwrap();
    assert_eq!(g.format_alternatives(e), "T E'");
    assert_eq!(g.format_alternatives(ep), "+ T E' | ϵ");

    Ok(())
}

#[test]
fn test_left_factor() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let g = Grammar::new_from_file(&common::test_file_path("grammars/ifelse.cfg"))?
        .left_factored()?;

    let s = g.maybe_non_terminal_index("S").unwrap();
    let sp = g.maybe_non_terminal_index("S'").unwrap();
    assert_eq!(g.format_alternatives(s), "a | i E t S S'");
    assert_eq!(g.format_alternatives(sp), "ϵ | e S");

    Ok(())
}
