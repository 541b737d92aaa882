use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use zuccbot::banner::print_banner;
use zuccbot::consts::STAR;
use zuccbot::oracle::{Oracle, OracleConfig};

/// No flags, no knobs. The oracle answers to nobody.
#[derive(Parser)]
#[command(name = "zuccbot", version, about = "An ELIZA-like oracle. It heard that.")]
struct Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Cli::parse();

    print_banner();

    let oracle = Oracle::spawn(OracleConfig::default());

    // Async stdin so Ctrl+C is caught while waiting for a line too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let question = line.trim();
        if question.is_empty() {
            continue;
        }

        println!("{} heard: {}", STAR, question);
        oracle.ask(question);
    }

    Ok(())
}
