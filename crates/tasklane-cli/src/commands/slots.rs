use clap::Args;
use tasklane_core::{generate_time_slots, Config};

use super::{print_json, CliResult, HoursArgs};

#[derive(Args)]
pub struct SlotsArgs {
    #[command(flatten)]
    hours: HoursArgs,
}

pub fn run(args: SlotsArgs) -> CliResult {
    let config = Config::load_or_default();
    let hours = args.hours.resolve(&config)?;
    print_json(&generate_time_slots(&hours), &config)
}
