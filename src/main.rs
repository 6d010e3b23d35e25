use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use quill::lexer::TokenStream;
use quill::{Parsed, ParseError, ParseSession};

#[derive(Parser)]
#[command(name = "quillc", version, about = "Parser front end for the quill toy language")]
struct Cli {
    /// Source file; reads standard input when omitted
    file: Option<PathBuf>,

    /// What to print for each parsed unit
    #[arg(long, value_delimiter = ',', default_value = "ast")]
    dump: Vec<DumpKind>,

    /// Log filter (tracing env-filter syntax, e.g. "debug" or "quill=trace")
    #[arg(long, default_value = "info")]
    log: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DumpKind {
    /// Print every token before parsing
    Token,
    /// Print each parsed unit as an indented tree
    Ast,
    /// Print nothing
    None,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over --log so a one-off `RUST_LOG=trace quillc ...`
    // needs no flag juggling.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let source = match read_source(cli.file.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            quill::render_error(&source, &err);
            ExitCode::FAILURE
        }
    }
}

fn read_source(file: Option<&std::path::Path>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn run(cli: &Cli, source: &str) -> Result<(), ParseError> {
    // `none` carries no flag of its own; passing it just replaces the
    // default `ast` with an empty selection.
    let dump_tokens = cli.dump.contains(&DumpKind::Token);
    let dump_ast = cli.dump.contains(&DumpKind::Ast);

    let tokens = quill::lexer::lex(source)?;
    if dump_tokens {
        for tok in &tokens {
            eprintln!("{}", tok.node);
        }
    }

    let mut session = ParseSession::new();
    let mut parser = quill::Parser::new(TokenStream::new(tokens, source.len()), &mut session);
    loop {
        match parser.parse_unit()? {
            Parsed::Unit(unit) => {
                if dump_ast {
                    eprint!("{}", quill::dump::dump(parser.session(), unit));
                }
            }
            Parsed::Skip => {}
            Parsed::Eof => return Ok(()),
        }
    }
}
