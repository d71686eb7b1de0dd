use cfgkit::errors::Error;
use cfgkit::grammar::Grammar;
use cfgkit::parsers::predictive::{Parser, Verdict};
mod common;

#[test]
fn test_pipeline() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // The left-recursive expression grammar becomes LL(1) after
    // left recursion removal and left factoring
    let g = Grammar::new_from_file(&common::test_file_path("grammars/expr.cfg"))?
        .without_left_recursion()
        .left_factored()?;

    let parser = Parser::new(&g)?;

    assert!(parser.parse("id+id*id").accepted());
    assert!(parser.parse("id*(id+id)").accepted());
    assert!(parser.parse("(a + b) * count").accepted());
    assert!(!parser.parse("id+").accepted());
    assert!(!parser.parse("+id").accepted());
    assert!(!parser.parse("(id").accepted());

    Ok(())
}

#[test]
fn test_non_ll1_grammar_refused() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let g = Grammar::new_from_file(&common::test_file_path("grammars/expr.cfg"))?;

    // Left-recursive grammars always produce table conflicts
    assert!(matches!(Parser::new(&g), Err(Error::GrammarNotLL1(_))));

    Ok(())
}

#[test]
fn test_dangling_else_stays_ambiguous() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Left factoring removes the common prefix, but the dangling-else
    // conflict between S' → e S S' and S' → ϵ on 'e' remains
    let g = Grammar::new_from_file(&common::test_file_path("grammars/ifelse.cfg"))?;
    assert!(matches!(Parser::new(&g), Err(Error::GrammarNotLL1(_))));

    let g = g.left_factored()?;
    assert!(matches!(Parser::new(&g), Err(Error::GrammarNotLL1(_))));

    Ok(())
}

#[test]
fn test_trace() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let g = Grammar::new_from_file(&common::test_file_path("grammars/nlr_expr.cfg"))?;
    let parser = Parser::new(&g)?;

    let result = parser.parse("id+id");
    assert!(result.accepted());

    let first = &result.steps[0];
    assert_eq!(first.stack, vec!["$", "E"]);
    assert_eq!(first.input, vec!["id", "+", "id", "$"]);

    let last = result.steps.last().unwrap();
    assert_eq!(last.stack, vec!["$"]);
    assert_eq!(last.input, vec!["$"]);

    Ok(())
}

#[test]
fn test_verdicts() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let g = Grammar::new_from_file(&common::test_file_path("grammars/nlr_expr.cfg"))?;
    let parser = Parser::new(&g)?;

    assert_eq!(parser.parse("id").verdict, Verdict::Accepted);
    assert_eq!(
        parser.parse("(id").verdict,
        Verdict::Mismatch {
            expected: ")".to_string(),
            found: "$".to_string(),
        }
    );
    assert_eq!(
        parser.parse("+id").verdict,
        Verdict::NoRule {
            non_terminal: "E".to_string(),
            terminal: "+".to_string(),
        }
    );

    Ok(())
}
