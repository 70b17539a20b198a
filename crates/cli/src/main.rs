use std::io::{self, Write};
use std::process::exit;

use anyhow::Result;
use oparse::{ParseOutcome, Parser};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    init_tracing();

    let argv: Vec<String> = std::env::args().collect();
    let mut parser = build_parser()?;

    match parser.parse(&argv)? {
        ParseOutcome::Help(text) => {
            // Help goes to stdout; a help run terminates with status 1.
            io::stdout().write_all(text.as_bytes())?;
            exit(1);
        }
        ParseOutcome::Completed => {}
    }

    report(&parser)?;
    Ok(())
}

fn build_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser.declare("output")?.alias("o")?.has_value();
    parser.declare("format")?.alias("f")?.default_value("plain");
    parser.declare("verbose")?.alias("v")?;
    Ok(parser)
}

fn report(parser: &Parser) -> Result<()> {
    tracing::debug!("reporting parsed state");

    println!("format: {}", parser.option("format")?.value()?);

    let output = parser.option("output")?;
    if output.was_read() {
        println!("output: {}", output.value()?);
    }

    println!("verbose: {}", parser.option("verbose")?.was_read());

    for positional in parser.positionals() {
        println!("positional: {positional}");
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
