pub mod validation;

use clap::Parser;
use serde_json::Value;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Json file holding the golfer's posted rounds (an array of round
    /// objects; see the repo's test fixture for the shape).
    #[arg(
        short = 's',
        long,
        value_name = "SCORES_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub scores_json: Value,

    /// Compute 9-hole differentials with a halved course rating only,
    /// skipping the chronological blend against the running index.
    #[arg(long)]
    pub no_nine_hole_blending: bool,

    /// Pretty-print the result json.
    #[arg(long)]
    pub pretty: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
