use crate::board::DepartureBoard;
use crate::fare::calculate_airfare;
use crate::printer::print_departures;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::path::PathBuf;
use tabled::settings::Style;
use tracing_subscriber::EnvFilter;

mod airport;
mod board;
mod error;
mod fare;
mod flight;
mod printer;
mod time;

#[derive(Parser)]
#[command(version, about = "Airport departures board")]
struct Args {
    /// Path to a JSON scenario file, the sample board is used when omitted
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Print the departures and a sample fare, then exit
    #[arg(long)]
    once: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn print_fare(bags: u32, miles: u32, travelers: u32) {
    println!("Total cost for this flight is {}", calculate_airfare(bags, miles, travelers));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let board = match &args.scenario {
        Some(path) => DepartureBoard::load_from_file(path)?,
        None => DepartureBoard::sample(),
    };

    if args.once {
        print_departures(&board);
        print_fare(2, 2000, 3);
        return Ok(());
    }

    println!(
        "{} {} ({})",
        "Departures for".bold(),
        board.current_airport.name.as_str().bold(),
        board.current_airport.city
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: ["ls", "print", "fare", "airport", "help", "exit"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => {
                        if board.flights().is_empty() {
                            println!("No departures.")
                        } else {
                            let mut table = tabled::Table::new(board.rows());
                            table.with(Style::rounded());
                            table.with(tabled::settings::Alignment::left());
                            println!("{}", table);
                        }
                    },
                    "print" => {
                        print_departures(&board);
                    },
                    "fare" => {
                        let numbers: Result<Vec<u32>, _> = parts[1..].iter().map(|p| p.parse::<u32>()).collect();
                        match numbers.as_deref() {
                            Ok([bags, miles, travelers]) => print_fare(*bags, *miles, *travelers),
                            _ => println!("{}", "Usage: fare <bags> <miles> <travelers>".yellow()),
                        }
                    },
                    "airport" => {
                        let mut table = tabled::Table::new([&board.current_airport]);
                        table.with(Style::rounded());
                        println!("{}", table);
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls                       - List all departures in a table");
                        println!("  print                    - Print departures with passenger alerts");
                        println!("  fare <bags> <m> <t>      - Airfare for <bags> checked bags, <m> miles and <t> travelers");
                        println!("  airport                  - Show the board's home airport");
                        println!("  help / ?                 - Show this help menu");
                        println!("  exit / quit              - Exit the board\n");
                    },
                    "exit" | "quit" => break,
                    other => println!("{} {}", "Unknown command:".red(), other),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("{} {:?}", "Error:".red(), err);
                break;
            }
        }
    }
    Ok(())
}
