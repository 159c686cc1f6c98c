// Wed Oct 14 2026 - Alex

pub mod args;
pub mod handler;

pub use args::{
    Args, ByteFreqArgs, Command, FindPatternArgs, NgramArgs, SearchArgs, SliceArgs, TransformArgs,
};
pub use handler::{read_file_list, CommandHandler};

use clap::Parser;

pub fn parse_args() -> Args {
    Args::parse()
}

pub fn run() -> anyhow::Result<()> {
    let args = parse_args();
    let handler = CommandHandler::from_args(&args)?;
    handler.execute(args.command)
}
