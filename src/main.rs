use anyhow::Result;
use clap::Parser;

use fy_cli::cli::Args;
use fy_cli::cli::commands::translate;
use fy_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    output::init(OutputConfig::default());

    let options = translate::TranslateOptions {
        content: (!args.text.is_empty()).then(|| args.content()),
        into_english: args.into_english,
    };
    translate::run_translate(options).await?;

    Ok(())
}
