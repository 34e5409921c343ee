mod cli;
mod options;
mod play;
mod self_play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use common::ConfigLoader;
use dotenv::dotenv;
use env_logger::Env;
use negamax::NegamaxOptions;
use options::{PlayOptions, SelfPlayOptions};

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Play(play_args) => {
            let config = ConfigLoader::new(&play_args.config, "play".to_string())?;

            let play_options: PlayOptions = config.load()?;
            let search_options: NegamaxOptions = config.load()?;

            play::play(&play_options, search_options)?
        }
        Commands::SelfPlay(self_play_args) => {
            let config = ConfigLoader::new(&self_play_args.config, "self_play".to_string())?;

            let self_play_options: SelfPlayOptions = config.load()?;
            let search_options: NegamaxOptions = config.load()?;

            self_play::play_self(&self_play_options, search_options)?
        }
    }

    Ok(())
}
