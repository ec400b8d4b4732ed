mod inscriber_subcommand;

pub mod common;
pub mod run;
pub mod session;
pub mod spam;

use clap::Parser;

pub use inscriber_subcommand::InscriberSubcommand;
pub use run::run;
pub use session::session;
pub use spam::spam;

#[derive(Parser, Debug)]
pub struct InscriberCli {
    #[command(subcommand)]
    pub command: InscriberSubcommand,
}

impl InscriberCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use clap::Parser;
    use inscriber_core::config::NonceSource;
    use std::time::Duration;

    use super::*;

    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn parse(args: &[&str]) -> Result<InscriberCli, clap::Error> {
        InscriberCli::try_parse_from(args)
    }

    #[test]
    fn parses_spam_command() {
        let cli = parse(&[
            "inscriber",
            "spam",
            "--rpc-url",
            "https://rpc.example.org",
            "--priv-key",
            TEST_KEY,
            "--payload",
            r#"data:,{"p":"bsc-20","op":"mint","tick":"bsci","amt":"1000"}"#,
            "--gas-price",
            "6000000000",
            "--count",
            "10",
            "--delay-ms",
            "100",
        ])
        .unwrap();

        let InscriberSubcommand::Spam { args } = cli.command else {
            panic!("expected spam subcommand");
        };
        let config = args.into_config().unwrap();
        assert_eq!(config.rpc_url.as_str(), "https://rpc.example.org/");
        assert_eq!(config.gas_price, 6_000_000_000);
        assert_eq!(config.tx_count, 10);
        assert_eq!(config.send_interval, Duration::from_millis(100));
        assert_eq!(config.nonce_source, NonceSource::Pending);
    }

    #[test]
    fn rejects_non_numeric_count() {
        let err = parse(&[
            "inscriber",
            "spam",
            "--priv-key",
            TEST_KEY,
            "--payload",
            "data:,hello",
            "--gas-price",
            "1000000000",
            "--count",
            "ten",
            "--delay-ms",
            "100",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn rejects_non_numeric_gas_price() {
        let err = parse(&[
            "inscriber",
            "spam",
            "--priv-key",
            TEST_KEY,
            "--payload",
            "data:,hello",
            "--gas-price",
            "cheap",
            "--count",
            "10",
            "--delay-ms",
            "100",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn rejects_malformed_rpc_url() {
        let err = parse(&[
            "inscriber",
            "session",
            "--rpc-url",
            "not a url",
            "--priv-key",
            TEST_KEY,
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn rejects_missing_private_key() {
        let err = parse(&[
            "inscriber",
            "spam",
            "--payload",
            "data:,hello",
            "--gas-price",
            "1000000000",
            "--count",
            "10",
            "--delay-ms",
            "100",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn malformed_private_key_fails_before_any_network_use() {
        let cli = parse(&[
            "inscriber",
            "spam",
            "--priv-key",
            "not-a-key",
            "--payload",
            "data:,hello",
            "--gas-price",
            "1000000000",
            "--count",
            "10",
            "--delay-ms",
            "100",
        ])
        .unwrap();

        let InscriberSubcommand::Spam { args } = cli.command else {
            panic!("expected spam subcommand");
        };
        assert!(args.into_config().is_err());
    }

    #[test]
    fn nonce_source_flag_selects_confirmed() {
        let cli = parse(&[
            "inscriber",
            "session",
            "--priv-key",
            TEST_KEY,
            "--nonce-source",
            "confirmed",
        ])
        .unwrap();

        let InscriberSubcommand::Session { args } = cli.command else {
            panic!("expected session subcommand");
        };
        assert_eq!(NonceSource::from(args.nonce_source), NonceSource::Confirmed);
        // default endpoint kicks in when the flag is omitted
        assert_eq!(args.rpc_url.as_str(), "http://localhost:8545/");
    }

    #[test]
    fn parses_run_command_with_jobfile_path() {
        let cli = parse(&["inscriber", "run", "job.toml"]).unwrap();
        let InscriberSubcommand::Run { jobfile } = cli.command else {
            panic!("expected run subcommand");
        };
        assert_eq!(jobfile, "job.toml");
    }
}
