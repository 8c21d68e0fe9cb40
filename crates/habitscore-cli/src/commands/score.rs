use clap::Args;
use habitscore_core::calculate_score;

use super::InputArgs;

#[derive(Args, Debug)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let checkmarks = args.input.read()?;
    let score = calculate_score(checkmarks.iter().map(|c| c.value));
    println!("{score}");
    Ok(())
}
