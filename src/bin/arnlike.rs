use std::process;

use arnlike::{parse, ArnLikeError, ArnPattern};
use clap::Parser;

#[derive(Parser)]
#[command(name = "arnlike", about = "Match an ARN against ArnLike patterns")]
struct Cli {
    /// ARN to test
    value: String,

    /// ArnLike patterns (`*` and `?` are wildcards within a section)
    #[arg(required = true)]
    patterns: Vec<String>,

    /// Require every pattern to match instead of any
    #[arg(long)]
    all: bool,

    /// Print the anchored regex compiled for each pattern section
    #[arg(long)]
    explain: bool,
}

fn run(cli: &Cli) -> Result<bool, ArnLikeError> {
    let value = parse(&cli.value).map_err(ArnLikeError::Value)?;

    let mut results = Vec::with_capacity(cli.patterns.len());
    for source in &cli.patterns {
        let pattern = ArnPattern::new(source)?;
        let matched = pattern.is_match(&value);

        if cli.explain {
            println!("{} => {}", pattern, if matched { "match" } else { "no match" });
            for (section, expr) in pattern.expressions() {
                println!("  {:<10} {:<24} {:?}", section.name(), expr, value.section(section));
            }
        }
        results.push(matched);
    }

    Ok(if cli.all {
        results.iter().all(|m| *m)
    } else {
        results.iter().any(|m| *m)
    })
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => println!("match"),
        Ok(false) => {
            println!("no match");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(2);
        }
    }
}
