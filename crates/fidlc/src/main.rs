//! The Franca IDL front-end CLI.
//!
//! Provides the `fidlc` command: read a `.fidl` document (from `--file`
//! or standard input), parse it, and print either its AST (default) or
//! its raw token stream (`--tokens`).

use std::io::Read;
use std::path::PathBuf;
use std::process;

use ariadne::{Label, Report, ReportKind, Source};
use clap::Parser as ClapParser;

#[derive(ClapParser)]
#[command(name = "fidlc", version, about = "Franca IDL front-end")]
struct Cli {
    /// Path to a `.fidl` file. Reads standard input if omitted.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Print the raw token stream instead of the parsed AST.
    #[arg(long)]
    tokens: bool,

    /// Omit attribute names, printing only bare values.
    #[arg(long)]
    no_attrnames: bool,

    /// Omit child slot names (e.g. `<key_type>`).
    #[arg(long)]
    no_nodenames: bool,

    /// Append each node's `line:column` source position.
    #[arg(long)]
    showcoord: bool,
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => {}
        Err(code) => process::exit(code),
    }
}

fn run(cli: &Cli) -> Result<(), i32> {
    let (source, file_label) = read_source(cli.file.as_deref())?;

    if cli.tokens {
        print_tokens(&source);
        return Ok(());
    }

    let (parse_result, lex_errors) = franca_parser::parse(&source);

    for err in &lex_errors {
        eprintln!("warning: {err}");
    }

    match parse_result {
        Ok(doc) => {
            let text = doc.show_to_string(!cli.no_attrnames, !cli.no_nodenames, cli.showcoord);
            print!("{text}");
            Ok(())
        }
        Err(err) => {
            report_parse_error(&source, &file_label, &err);
            Err(1)
        }
    }
}

fn read_source(file: Option<&std::path::Path>) -> Result<(String, String), i32> {
    match file {
        Some(path) => {
            let source = std::fs::read_to_string(path).map_err(|e| {
                eprintln!("error: failed to read '{}': {e}", path.display());
                1
            })?;
            Ok((source, path.display().to_string()))
        }
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source).map_err(|e| {
                eprintln!("error: failed to read stdin: {e}");
                1
            })?;
            Ok((source, "<stdin>".to_string()))
        }
    }
}

fn print_tokens(source: &str) {
    let (tokens, errors) = franca_lexer::Lexer::tokenize(source);
    for err in &errors {
        eprintln!("warning: {err}");
    }
    for tok in &tokens {
        println!("{:?} {:?} (line {})", tok.kind, tok.lexeme, tok.line);
    }
}

fn report_parse_error(source: &str, file_label: &str, err: &franca_common::ParseError) {
    match err.span {
        Some(span) => {
            let range = span.start as usize..span.end as usize;
            let id = file_label.to_string();
            let _ = Report::build(ReportKind::Error, (id.clone(), range.clone()))
                .with_message(err.to_string())
                .with_label(Label::new((id.clone(), range)).with_message("unexpected token"))
                .finish()
                .eprint((id, Source::from(source)));
        }
        None => {
            eprintln!("error: {err}");
        }
    }
}
