use clap::Args;

use cipherbreak::cipher::poly;
use cipherbreak::error::CbResult;

#[derive(Args, Debug, Clone)]
pub struct CipherArgs {
    /// Input text; case and non-letter characters are ignored
    pub text: String,

    #[arg(short, long)]
    pub key: String,
}

pub fn run_encrypt(args: CipherArgs) -> CbResult<()> {
    println!("{}", poly::encrypt(&args.text, &args.key)?);
    Ok(())
}

pub fn run_decrypt(args: CipherArgs) -> CbResult<()> {
    println!("{}", poly::decrypt(&args.text, &args.key)?);
    Ok(())
}
