use clap::Args;
use trend_score::error::AppError;
use trend_score::scoring::{
    ScoreInput, ScoreResult, PRICE_SCORE_CAP, RANK_SCORE_CAP, REVIEW_SCORE_CAP,
};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Change in sales rank per period (negative means the rank is improving)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_signal)]
    pub(crate) rank_velocity: f64,
    /// Price momentum signal
    #[arg(long, allow_hyphen_values = true, value_parser = parse_signal)]
    pub(crate) price_momentum: f64,
    /// Review growth signal
    #[arg(long, allow_hyphen_values = true, value_parser = parse_signal)]
    pub(crate) review_growth: f64,
    /// Print the JSON payload the HTTP endpoint would return
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn parse_signal(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(format!("'{raw}' is not a finite number")),
        Err(err) => Err(format!("failed to parse '{raw}' as a number ({err})")),
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let input = ScoreInput {
        rank_velocity: args.rank_velocity,
        price_momentum: args.price_momentum,
        review_growth: args.review_growth,
    };
    let result = input.score();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_score(&input, &result));
    }

    Ok(())
}

fn render_score(input: &ScoreInput, result: &ScoreResult) -> String {
    let breakdown = &result.breakdown;
    let mut out = String::new();

    out.push_str(&format!(
        "Trend score: {:.1} ({})\n",
        result.score,
        result.label.label()
    ));
    out.push_str("\nBreakdown\n");
    out.push_str(&format!(
        "- rank velocity {}: {:.1}/{}\n",
        input.rank_velocity, breakdown.rank_velocity, RANK_SCORE_CAP
    ));
    out.push_str(&format!(
        "- price momentum {}: {:.1}/{}\n",
        input.price_momentum, breakdown.price_momentum, PRICE_SCORE_CAP
    ));
    out.push_str(&format!(
        "- review growth {}: {:.1}/{}\n",
        input.review_growth, breakdown.review_growth, REVIEW_SCORE_CAP
    ));

    out
}
