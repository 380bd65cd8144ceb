use clap::{Parser, Subcommand};
use colored::Colorize;
use jsre_core::{compile, translate, translate_debug};

#[derive(Parser)]
#[command(name = "jsre")]
#[command(about = "Jsre - translate JavaScript regex literals for linear-time engines")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a literal to target engine syntax
    Translate {
        /// The slash-delimited literal, e.g. '/abc/i'
        pattern: String,
        /// Show the intermediate stages
        #[arg(short, long)]
        debug: bool,
    },
    /// Translate a literal and check that the target engine accepts it
    Check {
        /// The slash-delimited literal
        pattern: String,
    },
    /// Check if a literal matches input
    Match {
        /// The slash-delimited literal
        pattern: String,
        /// The input string to test
        input: String,
    },
    /// Find all matches of a literal in input
    Find {
        /// The slash-delimited literal
        pattern: String,
        /// The input string
        input: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Translate { pattern, debug } => cmd_translate(&pattern, debug),
        Commands::Check { pattern } => cmd_check(&pattern),
        Commands::Match { pattern, input } => cmd_match(&pattern, &input),
        Commands::Find { pattern, input } => cmd_find(&pattern, &input),
    }
}

fn cmd_translate(pattern: &str, debug: bool) {
    println!("{}", "Translating literal...".bold());
    println!("  Input:  {}", pattern.cyan());
    println!();

    if debug {
        translate_debug(pattern).report();
    } else {
        println!("{}", "Output:".bold());
        println!("  {}", translate(pattern).green());
    }
}

fn cmd_check(pattern: &str) {
    let translated = translate(pattern);
    println!("  Pattern:    {}", pattern.cyan());
    println!("  Translated: {}", translated.yellow());
    println!();

    match compile(pattern) {
        Ok(_) => println!("{}", "✓ Accepted by target engine".green().bold()),
        Err(e) => {
            eprintln!("{} {}", "✗ Rejected:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn cmd_match(pattern: &str, input: &str) {
    let regex = match compile(pattern) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if regex.is_match(input) {
        println!("{}", "true".green());
        std::process::exit(0);
    } else {
        println!("{}", "false".red());
        std::process::exit(1);
    }
}

fn cmd_find(pattern: &str, input: &str) {
    let regex = match compile(pattern) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let matches: Vec<_> = regex.find_iter(input).collect();

    if matches.is_empty() {
        println!("{}", "No matches found".red());
    } else {
        println!(
            "{} {}",
            "Found".bold(),
            format!("{} match(es)", matches.len()).green()
        );
        println!();

        for (i, m) in matches.iter().enumerate() {
            println!(
                "  [{}] {}..{} = {}",
                i + 1,
                m.start(),
                m.end(),
                m.as_str().green()
            );
        }
    }
}
