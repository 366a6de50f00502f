use std::sync::Arc;

use clap::Args;
use tracing::info;

use cipherbreak::config::Config;
use cipherbreak::error::CbResult;
use cipherbreak::model::LanguageModels;
use cipherbreak::search::{KeyRecovery, RecoveryOptions};

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    /// Ciphertext to attack
    pub text: String,

    #[command(flatten)]
    pub config: Config,

    /// Emit results as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: CrackArgs) -> CbResult<()> {
    info!("📚 Loading language models...");
    let models = Arc::new(LanguageModels::load(&args.config.models)?);

    let engine = KeyRecovery::new(models, RecoveryOptions::from(&args.config.search))?;

    info!(
        "🔍 Searching key lengths 2..={}",
        args.config.search.max_key_len
    );
    let results = engine.recover(&args.text)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        reports::print_decipher_report(&results);
    }
    Ok(())
}
