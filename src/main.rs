use golf_handicap::model::Round;
use golf_handicap::{HandicapConfig, args, calculate_handicap, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();
    logging::init(args.verbose);

    let rounds: Vec<Round> = serde_json::from_value(args.scores_json.clone())?;
    let config = HandicapConfig {
        nine_hole_blending: !args.no_nine_hole_blending,
    };

    let result = calculate_handicap(&rounds, &config)?;

    let body = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{body}");
    Ok(())
}
