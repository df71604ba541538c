use clap::Parser;
use retreat_registration::domain::model::NormalizerKind;
use retreat_registration::utils::logger::{self, LogFormat};
use std::io::BufRead;

#[derive(Parser)]
#[command(name = "normalize")]
#[command(about = "Apply the registration form input masks to raw text")]
struct Args {
    /// Which mask to apply
    #[arg(short, long, value_enum)]
    kind: NormalizerKind,

    /// Values to mask; lines from stdin are used when none are given
    values: Vec<String>,

    /// Show every intermediate value, one keystroke at a time
    #[arg(long)]
    keystrokes: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn print_masked(kind: NormalizerKind, raw: &str, keystrokes: bool) {
    if keystrokes {
        let mut buffer = String::new();
        for ch in raw.chars() {
            buffer.push(ch);
            buffer = kind.apply(&buffer);
            println!("{:?} -> {}", ch, buffer);
        }
    } else {
        println!("{}", kind.apply(raw));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger(args.verbose, LogFormat::Compact);
    tracing::debug!("Applying {:?} mask", args.kind);

    if args.values.is_empty() {
        for line in std::io::stdin().lock().lines() {
            print_masked(args.kind, &line?, args.keystrokes);
        }
    } else {
        for value in &args.values {
            print_masked(args.kind, value, args.keystrokes);
        }
    }

    Ok(())
}
