//! cfmigrate entry point

use std::process::ExitCode;

use clap::Parser;

use cfmigrate::{Cli, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut stdout = std::io::stdout();
    let result = cfmigrate::run(&cli, &mut stdout).await;
    ExitCode::from(cfmigrate::finish(result, &mut stdout))
}
