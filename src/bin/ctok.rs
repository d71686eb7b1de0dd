use cfgkit::comments::strip_comments;
use cfgkit::lexer::tokenize;
use clap::Parser;

#[derive(Parser)]
#[command(version, about = "Tokenize C-like source code", long_about = None)]
/// Command line options for the ctok tool
struct Options {
    /// Path to the source file
    file: String,

    /// Output the comment-stripped source instead of tokens
    #[arg(long)]
    strip_only: bool,

    /// Tokenize the source as-is, without removing comments first
    #[arg(long)]
    keep_comments: bool,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let opts = Options::parse();
    let code = std::fs::read_to_string(&opts.file)?;

    if opts.strip_only {
        print!("{}", strip_comments(&code));
        return Ok(());
    }

    let code = if opts.keep_comments {
        code
    } else {
        strip_comments(&code)
    };

    println!("{:<6}{:<18}{}", "Line", "Type", "Lexeme");
    println!("{}", "-".repeat(60));
    for token in tokenize(&code) {
        println!("{:<6}{:<18}{}", token.line, token.kind, token.lexeme);
    }

    Ok(())
}
