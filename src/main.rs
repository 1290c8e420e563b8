use clap::Parser;

mod cli;
mod init;
mod logger;

use cli::{Cli, Context};
use init::initialize_app;

fn main() {
    let opts: Cli = Cli::parse();
    let config = match initialize_app(opts.log_level) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("failed to load config: {error}");
            std::process::exit(2);
        },
    };
    let context = Context::new(&config, opts.format);
    match opts.subcmd.execute(&context) {
        Ok(output) => println!("{output}"),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        },
    };
}
