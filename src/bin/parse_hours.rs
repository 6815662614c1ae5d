use anyhow::{Context, Result};
use buying_frenzy::utils::validation::validate_open_at;
use buying_frenzy::{parse_schedule, Weekday};
use clap::Parser;

#[derive(Parser)]
#[command(name = "parse-hours")]
#[command(about = "Parse one opening-hours string and print the weekly table")]
struct Args {
    /// Opening hours, e.g. "Mon, Weds 11:45 am - 4:45 pm / Tues 7:45 am - 2 am"
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,

    /// Also report whether it is open at this local time
    #[arg(long)]
    at: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let text = args.text.join(" ");

    let schedule =
        parse_schedule(&text).with_context(|| format!("could not parse opening hours {:?}", text))?;

    for weekday in Weekday::ALL {
        match schedule.get(weekday) {
            Some(day) if day.overnight() => {
                println!("{}  {} - {} (next day)", weekday, day.opens_at(), day.closes_at())
            }
            Some(day) => println!("{}  {} - {}", weekday, day.opens_at(), day.closes_at()),
            None => println!("{}  closed", weekday),
        }
    }

    if let Some(at) = args.at {
        let at = validate_open_at("at", &at)?;
        let verdict = if schedule.is_open_on(at) { "open" } else { "closed" };
        println!("{} at {}", verdict, at);
    }

    Ok(())
}
