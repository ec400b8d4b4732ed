use clap::Subcommand;

use super::common::ConnectionCliArgs;
use super::spam::SpamCliArgs;

#[derive(Debug, Subcommand)]
pub enum InscriberSubcommand {
    #[command(
        name = "spam",
        long_about = "Broadcast identical-calldata transactions at a fixed cadence."
    )]
    Spam {
        #[command(flatten)]
        args: Box<SpamCliArgs>,
    },

    #[command(
        name = "run",
        long_about = "Broadcast the job described by a TOML job file."
    )]
    Run {
        /// Path to the job file.
        jobfile: String,
    },

    #[command(
        name = "session",
        long_about = "Resolve and print the sender's starting nonce and the chain id without sending anything."
    )]
    Session {
        #[command(flatten)]
        args: Box<ConnectionCliArgs>,
    },
}
