use clap::Args;
use tracing::info;

use cipherbreak::cipher::shift;
use cipherbreak::config::ModelPaths;
use cipherbreak::error::CbResult;
use cipherbreak::model::{loader, NgramOrder};

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct ShiftCrackArgs {
    /// Ciphertext to attack
    pub text: String,

    #[command(flatten)]
    pub models: ModelPaths,

    /// Emit results as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ShiftCrackArgs) -> CbResult<()> {
    let delimiter = args.models.delimiter_byte()?;

    info!("📚 Loading quadgram model...");
    let quadgram = loader::load_model(args.models.path(NgramOrder::Quadgram), delimiter)?;

    let guesses = shift::crack(&args.text, &quadgram)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&guesses)?);
    } else {
        reports::print_shift_report(&guesses);
    }
    Ok(())
}
