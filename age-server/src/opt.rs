use clap::Parser;
use clio::Input;

#[derive(Debug, Parser)]
#[command(name = "age-server", about = "Birth year to age calculator behind a login")]
pub struct Opt {
    /// Config file path
    #[arg(short, long, value_parser, default_value = "config.toml")]
    pub config: Input,
}
