mod app;
mod browse;
mod cli;
mod codec;
mod config;
mod consts;
mod error;
mod fetch;
mod form;
mod page;
mod render;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();

    let config = if cli.quiet {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = match cli.with_config(&config) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    set_debug(cli.debug);

    if let Err(e) = app::run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
