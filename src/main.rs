use clap::Parser;
use contract_dsl::infrastructure::logging;
use contract_dsl::presentation::cli::Cli;

/// contract-dsl: example values for request contracts
///
/// Lists the placeholder catalog and generates examples for placeholders,
/// enumerations and arbitrary regular expressions, checking each example
/// against its pattern.
fn main() {
    let cli = Cli::parse();

    let config = match cli.config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(1);
        }
    };
    logging::init(&config.log_filter, cli.verbose);

    if let Err(err) = cli.run(&config) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
