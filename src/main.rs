mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            mpta,
            ldfa,
            jlca,
            lang,
            json,
        } => cli::commands::analyze(mpta, ldfa, jlca, lang, json),
        Commands::Demo { lang, json } => cli::commands::demo(lang, json),
        Commands::Serve => cli::commands::serve(),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err.user_message());
        process::exit(1);
    }
}
