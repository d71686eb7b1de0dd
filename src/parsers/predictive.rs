use super::reader::Reader;
use super::table::ParseTable;
use super::{InputSymbol, END_MARK};
use crate::errors::{Error, Result};
use crate::grammar::{Grammar, Sets, Symbol};
use std::fmt;

/// A table-driven, non-backtracking predictive parser for LL(1)
/// context-free grammars
pub struct Parser<'p> {
    grammar: &'p Grammar,
    table: ParseTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A symbol on the parsing stack
enum StackSymbol {
    Terminal(usize),
    NonTerminal(usize),
    EndMarker,
}

#[derive(Debug, Clone, PartialEq)]
/// The outcome of a parse. Rejections carry the reason as data; a
/// rejected input is an expected result of analysis, not a fault.
pub enum Verdict {
    Accepted,
    Mismatch { expected: String, found: String },
    NoRule { non_terminal: String, terminal: String },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::Mismatch { expected, found } => {
                write!(f, "expected '{}', got '{}'", expected, found)
            }
            Verdict::NoRule {
                non_terminal,
                terminal,
            } => write!(f, "no rule for [{}, {}]", non_terminal, terminal),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The action taken at one step of the automaton
pub enum Action {
    Match(String),
    Predict { non_terminal: String, body: String },
    Accept,
    Error(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Match(t) => write!(f, "match {}", t),
            Action::Predict { non_terminal, body } => write!(f, "{} → {}", non_terminal, body),
            Action::Accept => write!(f, "accept"),
            Action::Error(reason) => write!(f, "error ({})", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One step of the automaton: the stack (bottom to top), the remaining
/// input including the end marker, and the action taken
pub struct Step {
    pub stack: Vec<String>,
    pub input: Vec<String>,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq)]
/// A parse verdict together with the full trace of configurations
pub struct ParseResult {
    pub verdict: Verdict,
    pub steps: Vec<Step>,
}

impl ParseResult {
    pub fn accepted(&self) -> bool {
        matches!(self.verdict, Verdict::Accepted)
    }
}

impl<'p> Parser<'p> {
    /// Creates a new parser for an LL(1) grammar. A grammar whose
    /// parsing table contains any conflict is refused.
    pub fn new(grammar: &Grammar) -> Result<Parser<'_>> {
        let sets = Sets::new(grammar)?;
        let table = ParseTable::new(grammar, &sets);

        if let Some((nt, on)) = table.conflicts().first() {
            return Err(Error::GrammarNotLL1(format!(
                "conflict for non-terminal {} on input symbol {}",
                grammar.name(*nt),
                column_text(grammar, *on),
            )));
        }

        Ok(Parser { grammar, table })
    }

    /// Parses an input string against the table. The stack starts as
    /// [end marker, start symbol]; each step matches a terminal or
    /// predicts an alternative until accept or a structured rejection.
    pub fn parse(&self, input: &str) -> ParseResult {
        // Algorithm adapted from Aho et al (2007) p.227

        let mut reader = Reader::new(input);
        let mut stack = vec![
            StackSymbol::EndMarker,
            StackSymbol::NonTerminal(self.grammar.start()),
        ];
        let mut steps: Vec<Step> = Vec::new();

        loop {
            let snapshot = self.snapshot(&stack, &reader);
            let lookahead: Option<String> = reader.lookahead().map(str::to_string);

            // The end marker is never popped, so the stack is never empty
            match *stack.last().unwrap_or(&StackSymbol::EndMarker) {
                StackSymbol::EndMarker => {
                    let Some(found) = lookahead else {
                        steps.push(finish(snapshot, Action::Accept));
                        return ParseResult {
                            verdict: Verdict::Accepted,
                            steps,
                        };
                    };

                    let expected = END_MARK.to_string();
                    steps.push(finish(snapshot, Action::Error(format!("expected {}", expected))));
                    return ParseResult {
                        verdict: Verdict::Mismatch { expected, found },
                        steps,
                    };
                }
                StackSymbol::Terminal(t) => {
                    let expected = self.grammar.name(t).to_string();
                    if lookahead.as_deref() == Some(expected.as_str()) {
                        stack.pop();
                        reader.next();
                        steps.push(finish(snapshot, Action::Match(expected)));
                    } else {
                        let found = lookahead.unwrap_or_else(|| END_MARK.to_string());
                        steps.push(finish(
                            snapshot,
                            Action::Error(format!("expected {}", expected)),
                        ));
                        return ParseResult {
                            verdict: Verdict::Mismatch { expected, found },
                            steps,
                        };
                    }
                }
                StackSymbol::NonTerminal(nt) => {
                    let column = match &lookahead {
                        Some(token) => self
                            .grammar
                            .maybe_terminal_index(token)
                            .map(InputSymbol::Terminal),
                        None => Some(InputSymbol::EndOfInput),
                    };

                    let Some(alt) = column.and_then(|on| self.table.production(nt, on)) else {
                        let non_terminal = self.grammar.name(nt).to_string();
                        let terminal = lookahead.unwrap_or_else(|| END_MARK.to_string());
                        steps.push(finish(
                            snapshot,
                            Action::Error(format!("no rule for [{}, {}]", non_terminal, terminal)),
                        ));
                        return ParseResult {
                            verdict: Verdict::NoRule {
                                non_terminal,
                                terminal,
                            },
                            steps,
                        };
                    };

                    // Pop the non-terminal and push the body in reverse
                    // order so its leftmost symbol ends up on top; an ϵ
                    // alternative pushes nothing
                    let body = &self.grammar.alternatives(nt)[alt.alternative];
                    let action = Action::Predict {
                        non_terminal: self.grammar.name(nt).to_string(),
                        body: self.grammar.format_alternative(body),
                    };

                    stack.pop();
                    for symbol in body.iter().rev() {
                        match symbol {
                            Symbol::NonTerminal(n) => stack.push(StackSymbol::NonTerminal(*n)),
                            Symbol::Terminal(t) => stack.push(StackSymbol::Terminal(*t)),
                            Symbol::Empty => {}
                        }
                    }

                    steps.push(finish(snapshot, action));
                }
            }
        }
    }

    /// Returns the parsing table, for inspection and display
    pub fn table(&self) -> &ParseTable {
        &self.table
    }

    /// Captures the current configuration for the trace: the stack from
    /// bottom to top and the remaining input including the end marker
    fn snapshot(&self, stack: &[StackSymbol], reader: &Reader) -> (Vec<String>, Vec<String>) {
        let stack = stack
            .iter()
            .map(|s| match s {
                StackSymbol::Terminal(t) | StackSymbol::NonTerminal(t) => {
                    self.grammar.name(*t).to_string()
                }
                StackSymbol::EndMarker => END_MARK.to_string(),
            })
            .collect();

        let mut input: Vec<String> = reader.remaining().to_vec();
        input.push(END_MARK.to_string());

        (stack, input)
    }
}

fn finish((stack, input): (Vec<String>, Vec<String>), action: Action) -> Step {
    Step {
        stack,
        input,
        action,
    }
}

fn column_text(g: &Grammar, on: InputSymbol) -> String {
    match on {
        InputSymbol::Terminal(t) => g.name(t).to_string(),
        InputSymbol::EndOfInput => END_MARK.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn expression_grammar() -> Grammar {
        Grammar::new(concat!(
            "E -> T E'\n",
            "E' -> + T E' | eps\n",
            "T -> F T'\n",
            "T' -> * F T' | eps\n",
            "F -> ( E ) | id\n",
        ))
        .unwrap()
    }

    #[test]
    fn test_accept() -> Result<()> {
        let g = expression_grammar();
        let parser = Parser::new(&g)?;

        assert!(parser.parse("id+id*id").accepted());
        assert!(parser.parse("id*(id+id)").accepted());
        assert!(parser.parse("id").accepted());
        assert!(parser.parse("(id)").accepted());

        Ok(())
    }

    #[test]
    fn test_reject() -> Result<()> {
        let g = expression_grammar();
        let parser = Parser::new(&g)?;

        let result = parser.parse("id+");
        assert_eq!(
            result.verdict,
            Verdict::NoRule {
                non_terminal: "T".to_string(),
                terminal: "$".to_string(),
            }
        );

        let result = parser.parse("+id");
        assert_eq!(
            result.verdict,
            Verdict::NoRule {
                non_terminal: "E".to_string(),
                terminal: "+".to_string(),
            }
        );

        let result = parser.parse("id id");
        assert!(!result.accepted());

        Ok(())
    }

    #[test]
    fn test_mismatch() -> Result<()> {
        let g = expression_grammar();
        let parser = Parser::new(&g)?;

        let result = parser.parse("(id");
        assert_eq!(
            result.verdict,
            Verdict::Mismatch {
                expected: ")".to_string(),
                found: "$".to_string(),
            }
        );

        Ok(())
    }

    #[test]
    fn test_unknown_terminal() -> Result<()> {
        let g = expression_grammar();
        let parser = Parser::new(&g)?;

        // '-' is not in the grammar's alphabet; the table has no column
        // for it and the lookup fails at the first non-terminal on top
        let result = parser.parse("id-id");
        assert_eq!(
            result.verdict,
            Verdict::NoRule {
                non_terminal: "T'".to_string(),
                terminal: "-".to_string(),
            }
        );

        Ok(())
    }

    #[test]
    fn test_trace() -> Result<()> {
        let g = expression_grammar();
        let parser = Parser::new(&g)?;

        let result = parser.parse("id");
        assert!(result.accepted());

        // E → T E', T → F T', F → id, match id, T' → ϵ, E' → ϵ, accept
        assert_eq!(result.steps.len(), 7);
        assert_eq!(result.steps[0].stack, vec!["$", "E"]);
        assert_eq!(result.steps[0].input, vec!["id", "$"]);
        assert_eq!(
            result.steps[0].action,
            Action::Predict {
                non_terminal: "E".to_string(),
                body: "T E'".to_string(),
            }
        );
        assert_eq!(result.steps[3].action, Action::Match("id".to_string()));
        assert_eq!(result.steps[3].stack, vec!["$", "E'", "T'", "id"]);
        assert_eq!(result.steps.last().unwrap().action, Action::Accept);
        assert_eq!(result.steps.last().unwrap().stack, vec!["$"]);
        assert_eq!(result.steps.last().unwrap().input, vec!["$"]);

        Ok(())
    }

    #[test]
    fn test_empty_input_rejected() -> Result<()> {
        let g = expression_grammar();
        let parser = Parser::new(&g)?;

        let result = parser.parse("");
        assert_eq!(
            result.verdict,
            Verdict::NoRule {
                non_terminal: "E".to_string(),
                terminal: "$".to_string(),
            }
        );

        Ok(())
    }

    #[test]
    fn test_nullable_grammar_accepts_empty_input() -> Result<()> {
        // Identifier runs in the input all read as the terminal `id`
        let g = Grammar::new("S -> id S | eps")?;
        let parser = Parser::new(&g)?;

        assert!(parser.parse("").accepted());
        assert!(parser.parse("a b c").accepted());
        assert!(!parser.parse("a +").accepted());

        Ok(())
    }

    #[test]
    fn test_conflicted_grammar_refused() -> Result<()> {
        let g = Grammar::new("S -> id | id id")?;
        match Parser::new(&g) {
            Err(Error::GrammarNotLL1(s)) => {
                assert!(s.contains("non-terminal S"));
            }
            _ => panic!("expected GrammarNotLL1"),
        }

        // The same grammar is accepted once left-factored
        let g = g.left_factored()?;
        let parser = Parser::new(&g)?;
        assert!(parser.parse("x").accepted());
        assert!(parser.parse("x y").accepted());
        assert!(!parser.parse("x y z").accepted());

        Ok(())
    }
}
