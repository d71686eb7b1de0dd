use super::symbol::Symbol;
use super::symboltable::SymbolTable;
use crate::errors::{Error, Result};
use std::collections::HashMap;
use std::fmt;

/// Spellings recognized for ϵ when they form a complete alternative
const EPSILON_SPELLINGS: [&str; 5] = ["eps", "epsilon", "@", "ε", "ϵ"];

/// Characters which always form single-character symbols
const PUNCTUATION: [char; 7] = ['(', ')', '+', '*', '-', '/', '|'];

/// A diagnostic for a rule declaration which could not be parsed. The
/// offending line is skipped; it does not abort grammar construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDiagnostic {
    pub line: usize,
    pub text: String,
    pub error: Error,
}

impl fmt::Display for RuleDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.error, self.text)
    }
}

/// The parser's output. Body symbols are provisionally tagged as
/// terminals; Grammar::recompute_symbols derives the real roles.
#[derive(Debug)]
pub struct ParserOutput {
    pub symbol_table: SymbolTable,
    pub start: usize,
    pub order: Vec<usize>,
    pub productions: HashMap<usize, Vec<Vec<Symbol>>>,
    pub diagnostics: Vec<RuleDiagnostic>,
}

/// Parses a textual representation of a context-free grammar, one rule
/// declaration per line in the form `LHS -> alt1 | alt2`. Blank lines
/// and lines beginning with '#' are skipped. Malformed lines are
/// reported as diagnostics and skipped. Returns an error only if no
/// valid rule is found at all.
pub fn parse(input: &str) -> Result<ParserOutput> {
    let mut output = ParserOutput {
        symbol_table: SymbolTable::new(),
        start: 0,
        order: Vec::new(),
        productions: HashMap::new(),
        diagnostics: Vec::new(),
    };
    let mut start: Option<usize> = None;

    for (n, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_rule(&mut output, line) {
            Ok(head) => {
                // The first valid rule names the start symbol
                start.get_or_insert(head);
            }
            Err(error) => {
                output.diagnostics.push(RuleDiagnostic {
                    line: n + 1,
                    text: line.to_string(),
                    error,
                });
            }
        }
    }

    let Some(start) = start else {
        return Err(Error::EmptyInput);
    };
    output.start = start;

    Ok(output)
}

/// Parses a single rule declaration and returns the ID of its head.
/// Alternatives for a head already seen are appended to its list.
fn parse_rule(output: &mut ParserOutput, line: &str) -> Result<usize> {
    let (lhs, rhs) = split_rule(line)?;

    let lhs = lhs.trim();
    if lhs.is_empty() {
        return Err(Error::ExpectedNonTerminal);
    }

    let head = output.symbol_table.add(lhs);
    if !output.productions.contains_key(&head) {
        output.order.push(head);
        output.productions.insert(head, Vec::new());
    }

    let alternatives = output.productions.get_mut(&head).unwrap();
    for segment in rhs.split('|') {
        alternatives.push(parse_segment(&mut output.symbol_table, segment));
    }

    Ok(head)
}

/// Splits a rule declaration at its production symbol, which may be
/// spelled `->` or `→`
fn split_rule(line: &str) -> Result<(&str, &str)> {
    if let Some(pos) = line.find("->") {
        Ok((&line[..pos], &line[pos + 2..]))
    } else if let Some(pos) = line.find('→') {
        Ok((&line[..pos], &line[pos + '→'.len_utf8()..]))
    } else {
        Err(Error::ExpectedProductionSymbol)
    }
}

/// Tokenizes one alternative. Identifier-like runs (letters, digits,
/// underscore, prime mark) form one symbol, fixed punctuation characters
/// are single-character symbols, and any other character is its own
/// symbol. An ϵ spelling is recognized only when it is the entire
/// alternative; an empty alternative also denotes ϵ.
fn parse_segment(symbols: &mut SymbolTable, segment: &str) -> Vec<Symbol> {
    let mut names: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in segment.chars() {
        if c.is_whitespace() {
            flush(&mut names, &mut current);
        } else if PUNCTUATION.contains(&c) {
            flush(&mut names, &mut current);
            names.push(c.to_string());
        } else if is_symbol_char(c) {
            current.push(c);
        } else {
            flush(&mut names, &mut current);
            names.push(c.to_string());
        }
    }
    flush(&mut names, &mut current);

    if names.is_empty() || (names.len() == 1 && EPSILON_SPELLINGS.contains(&names[0].as_str())) {
        return vec![Symbol::Empty];
    }

    names
        .iter()
        .map(|name| Symbol::Terminal(symbols.add(name)))
        .collect()
}

fn flush(names: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        names.push(std::mem::take(current));
    }
}

/// Returns true if the character may form part of an identifier-like
/// symbol, including the prime mark used for generated non-terminals
fn is_symbol_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}
