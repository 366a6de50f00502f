use std::fs;
use std::path::PathBuf;

use clap::Args;
use strum::IntoEnumIterator;
use tracing::info;

use cipherbreak::error::CbResult;
use cipherbreak::model::{corpus, NgramOrder};

#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    /// Raw training text file
    pub corpus: PathBuf,

    /// Directory the tables are written into
    #[arg(short, long, default_value = "data")]
    pub out_dir: PathBuf,
}

pub fn run(args: TrainArgs) -> CbResult<()> {
    let content = fs::read_to_string(&args.corpus)?;
    fs::create_dir_all(&args.out_dir)?;

    for order in NgramOrder::iter() {
        let table = corpus::generate_table(&content, order.word_len());
        let path = args
            .out_dir
            .join(format!("english_{}s.txt", order.to_string().to_lowercase()));
        fs::write(&path, table)?;
        info!("📝 Wrote {} table to {}", order, path.display());
    }
    Ok(())
}
