use std::collections::BTreeSet;

use clap::Parser;
use log::info;

use statement_rs::{Assignment, Statement, Syntax};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render and evaluate a sample propositional statement")]
struct Cli {
    /// Variable bindings, e.g. `--set a=true --set b=0`.
    #[arg(long = "set", value_name = "NAME=BOOL", value_parser = parse_binding)]
    bindings: Vec<(String, bool)>,

    /// Render with mathematical symbols.
    #[arg(long)]
    unicode: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_binding(s: &str) -> Result<(String, bool), String> {
    let (name, value) = s.split_once('=').ok_or_else(|| format!("expected NAME=BOOL, got '{}'", s))?;
    let value = match value {
        "1" | "true" => true,
        "0" | "false" => false,
        _ => return Err(format!("invalid boolean '{}'", value)),
    };
    Ok((name.to_string(), value))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = if cli.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    // (a | ~b) > (c = (a ^ 1))
    let f = Statement::implies(
        Statement::or([Statement::var("a"), Statement::not(Statement::var("b"))]),
        Statement::xnor(Statement::var("c"), Statement::xor(Statement::var("a"), Statement::top())),
    );

    let syntax = if cli.unicode { Syntax::unicode() } else { Syntax::default() };
    println!("f = {}", f.display_with(&syntax));

    let variables: BTreeSet<String> = f.get_variables().into_iter().collect();
    println!("variables = {:?}", variables);

    let assignment: Assignment = cli.bindings.into_iter().collect();
    info!("assignment = {:?}", assignment);

    let value = f.evaluate(&assignment)?;
    println!("f = {}", value);

    Ok(())
}
