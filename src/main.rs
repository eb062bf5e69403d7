//! `var2-parse`: parse a source file and print its tree.
//!
//! Prints the canonical source form of the parsed program, the structural
//! tree with `--tree`, or the token stream with `--tokens`. A FILE of `-`
//! reads standard input. Diagnostics go to stderr with a source snippet.
//!
//! Exit codes: 0 on success, 1 on a lex or parse error, 2 when the file
//! cannot be read.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::{
    fmt, fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use tracing::info;
use var2_frontend::{ast::tree::dump_tree, lexer::lexer::tokenize, parse, render_error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ExitCode(i32);

impl ExitCode {
    const SUCCESS: ExitCode = ExitCode(0);
    const SYNTAX: ExitCode = ExitCode(1);
    const IO: ExitCode = ExitCode(2);
}

/// A user-facing failure, already rendered, plus the code to exit with.
#[derive(Debug)]
struct CliError {
    message: String,
    exit_code: ExitCode,
}

impl CliError {
    fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

type CliResult<T> = Result<T, CliError>;

#[derive(clap::Parser, Debug)]
#[command(name = "var2-parse", version, about = "Parse a source file and print its syntax tree", long_about = None)]
struct Cli {
    /// Source file to parse, or `-` for standard input
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the token stream instead of the tree
    #[arg(long, conflicts_with = "tree")]
    tokens: bool,

    /// Print node kinds, fields and source ranges instead of source text
    #[arg(long)]
    tree: bool,

    /// With --tree, show the source text of every node, not just the leaves
    #[arg(long, requires = "tree")]
    all: bool,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != ExitCode::SUCCESS {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(e.exit_code.0);
        }
    }
}

fn execute(cli: Cli) -> CliResult<ExitCode> {
    let (file_name, source) = read_source(&cli.file)?;
    info!(file = %file_name, bytes = source.len(), "read source");

    if cli.tokens {
        print_tokens(&source, &file_name)
    } else if cli.tree {
        print_structure(&source, &file_name, cli.all)
    } else {
        print_tree(&source, &file_name)
    }
}

/// Reads `path`, or standard input when it is `-`. Returns the name to use
/// in diagnostics together with the text.
fn read_source(path: &Path) -> CliResult<(String, String)> {
    if path.as_os_str() == "-" {
        let file_name = String::from("<stdin>");
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).map_err(|e| {
            CliError::new(format!("{}: error: cannot read input: {}", file_name, e), ExitCode::IO)
        })?;
        return Ok((file_name, source));
    }

    let file_name = path.to_string_lossy().to_string();
    let source = fs::read_to_string(path).map_err(|e| {
        CliError::new(format!("{}: error: cannot read file: {}", file_name, e), ExitCode::IO)
    })?;
    Ok((file_name, source))
}

fn print_tokens(source: &str, file_name: &str) -> CliResult<ExitCode> {
    for token in tokenize(source) {
        let token = token
            .map_err(|e| CliError::new(render_error(&e, source, file_name), ExitCode::SYNTAX))?;
        println!("{}", token.debug());
    }

    Ok(ExitCode::SUCCESS)
}

fn print_tree(source: &str, file_name: &str) -> CliResult<ExitCode> {
    let program =
        parse(source).map_err(|e| CliError::new(render_error(&e, source, file_name), ExitCode::SYNTAX))?;

    print!("{}", program);
    Ok(ExitCode::SUCCESS)
}

fn print_structure(source: &str, file_name: &str, show_all: bool) -> CliResult<ExitCode> {
    let program =
        parse(source).map_err(|e| CliError::new(render_error(&e, source, file_name), ExitCode::SYNTAX))?;

    print!("{}", dump_tree(&program, source, show_all));
    Ok(ExitCode::SUCCESS)
}
