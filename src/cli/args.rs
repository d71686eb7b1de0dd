use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Command line options for the cfgkit tool
pub struct Options {
    /// Path to the grammar file
    pub grammar: String,

    /// Transformations to apply to the grammar, in order, before
    /// running the command
    #[arg(short, long, value_enum)]
    pub transform: Vec<Transform>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
/// Grammar transformations
pub enum Transform {
    /// Left-factor the grammar
    Factor,
    /// Eliminate direct and indirect left recursion
    RemoveLr,
}

#[derive(Subcommand)]
/// Commands for the cfgkit tool
pub enum Commands {
    /// Show summary information about the grammar
    Info {
        #[arg(short, long)]
        verbose: bool,
    },
    /// Left-factor the grammar and show the result
    Factor,
    /// Eliminate left recursion and show the result
    RemoveLr,
    /// Show the FIRST set of every non-terminal
    First,
    /// Show the FOLLOW set of every non-terminal
    Follow,
    /// Show the LL(1) parsing table
    Table,
    /// Parse an input string with a predictive parser
    Parse {
        #[arg(long)]
        input: String,

        /// Show the parsing steps
        #[arg(long)]
        steps: bool,
    },
}
