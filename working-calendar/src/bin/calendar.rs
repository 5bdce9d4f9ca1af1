use std::env;
use std::fs;

use chrono::NaiveDate;

use working_calendar::{CalendarDays, WorkingCalendar};

const USAGE: &str = "Usage: ./calendar <RULES_FILE> <START> <END> [--json]";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[cfg(feature = "serde")]
fn print_json(days: &CalendarDays) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", days.to_json(true)?);
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_json(_days: &CalendarDays) -> Result<(), Box<dyn std::error::Error>> {
    Err("JSON output requires the `serde` feature".into())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<_> = env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let positional: Vec<_> = args.iter().filter(|arg| *arg != "--json").collect();

    let [path, start, end] = positional.as_slice() else {
        return Err(USAGE.into());
    };

    let calendar: WorkingCalendar = fs::read_to_string(path)?.parse()?;
    let start = NaiveDate::parse_from_str(start, DATE_FORMAT)?;
    let end = NaiveDate::parse_from_str(end, DATE_FORMAT)?;
    let days = calendar.days(start, end)?;

    if json {
        return print_json(&days);
    }

    println!(" - rules: {path}");
    println!(" - range: {start} to {end}");
    println!(" - working days: {}/{}", days.working_days().count(), days.len());
    println!(" - working time: {}h", days.working_duration().num_minutes() as f64 / 60.0);
    println!("---");

    for day in &days {
        println!("{day}");
    }

    Ok(())
}
