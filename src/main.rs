use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

use cipherbreak::error::CbResult;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encrypt text with a repeating key
    Encrypt(cmd::cipher::CipherArgs),
    /// Decrypt text with a known repeating key
    Decrypt(cmd::cipher::CipherArgs),
    /// Recover the key from ciphertext alone
    Crack(cmd::crack::CrackArgs),
    /// Rank all 26 shifts of a single-shift cipher
    ShiftCrack(cmd::shift_crack::ShiftCrackArgs),
    /// Generate n-gram tables from a training corpus
    Train(cmd::train::TrainArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let outcome: CbResult<()> = match cli.command {
        Commands::Encrypt(args) => cmd::cipher::run_encrypt(args),
        Commands::Decrypt(args) => cmd::cipher::run_decrypt(args),
        Commands::Crack(args) => cmd::crack::run(args),
        Commands::ShiftCrack(args) => cmd::shift_crack::run(args),
        Commands::Train(args) => cmd::train::run(args),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
