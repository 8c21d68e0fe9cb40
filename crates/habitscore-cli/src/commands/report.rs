use std::fmt::Write as _;

use chrono::{Local, NaiveDate};
use clap::Args;
use habitscore_core::{Config, Goal, Labels, PerformanceReport, WeekStart};

use super::InputArgs;

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Reference day (YYYY-MM-DD), defaults to the local date
    #[arg(long)]
    pub today: Option<NaiveDate>,
    /// Goal percentage, overrides the configured goal
    #[arg(long)]
    pub goal: Option<i64>,
    /// First day of the week (monday or sunday), overrides the config
    #[arg(long)]
    pub week_start: Option<WeekStart>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    if let Some(week_start) = args.week_start {
        config.week_start = week_start;
    }
    let goal = match args.goal {
        Some(value) => Goal::new(value)?,
        None => config.goal,
    };

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let ctx = config.score_context(today);
    let labels = config.labels();

    let checkmarks = args.input.read()?;
    let report = PerformanceReport::build(&checkmarks, &ctx, goal, &labels);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report, &labels));
    }
    Ok(())
}

fn render_text<L: Labels>(report: &PerformanceReport, labels: &L) -> String {
    let mut out = String::new();

    if report.is_empty() {
        let _ = writeln!(out, "{}", labels.label("noHabits"));
        return out;
    }

    let _ = writeln!(out, "{}", labels.label("yourPerformance"));
    let width = report
        .windows
        .iter()
        .map(|w| w.label.chars().count())
        .max()
        .unwrap_or(0);

    for window in &report.windows {
        let status = if window.has_reached_goal(report.goal) {
            "done".to_string()
        } else {
            format!("{}: {}", labels.label("goal"), report.goal)
        };
        let _ = writeln!(
            out,
            "  {:<width$}  {:>3}%  ({}/{})  {}",
            window.label,
            window.score(),
            window.completed,
            window.total,
            status,
        );
    }

    let _ = writeln!(
        out,
        "{}: {}%",
        labels.label("overallPerformance"),
        report.all_time_score
    );
    out
}
