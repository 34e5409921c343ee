use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "Reversi Negamax Client")]
#[clap(about = "Play reversi against a lookahead agent or run agent self-play.", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Play(PlayCommand),
    SelfPlay(SelfPlayCommand),
}

#[derive(Args)]
#[clap(about = "Interactive game against the agent on the terminal.", long_about = None)]
pub struct PlayCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,
}

#[derive(Args)]
#[clap(about = "Runs a batch of agent-vs-agent games and reports the results.", long_about = None)]
pub struct SelfPlayCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,
}
