use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    EmptyInput,
    ExpectedNonTerminal,
    ExpectedProductionSymbol,
    GrammarNotLL1(String),
    IterationLimit(&'static str),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input"),
            Error::ExpectedNonTerminal => write!(f, "expected non-terminal"),
            Error::ExpectedProductionSymbol => write!(f, "expected production symbol"),
            Error::GrammarNotLL1(s) => write!(f, "grammar is not LL(1): {}", s),
            Error::IterationLimit(s) => write!(f, "iteration limit exceeded during {}", s),
        }
    }
}
