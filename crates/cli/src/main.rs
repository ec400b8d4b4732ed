mod commands;
mod error;
mod util;

use commands::{InscriberCli, InscriberSubcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> miette::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inscriber_cli=info,inscriber_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = InscriberCli::parse_args();
    match args.command {
        InscriberSubcommand::Spam { args } => commands::spam(*args).await?,
        InscriberSubcommand::Run { jobfile } => commands::run(&jobfile).await?,
        InscriberSubcommand::Session { args } => commands::session(*args).await?,
    }
    Ok(())
}
