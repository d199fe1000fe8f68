use clap::Parser;

mod args;
mod convert;
mod info;

use args::{Args, Commands};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    match args.command {
        Commands::Info(args) => info::info_command(args),
        Commands::Convert(args) => convert::convert_command(args),
    }
}
