use chrono::{Duration, NaiveDate, Utc};
use clap::Parser;
use serde_json::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Parser)]
#[command(name = "recommend-cli")]
#[command(about = "Ask the hotel recommender for the cheapest stay within budget", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:4040")]
    url: String,

    /// Destination, matched exactly against partner locations.
    #[arg(short, long)]
    location: String,

    /// Check-in date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    from: Option<String>,

    /// Check-out date (YYYY-MM-DD). Defaults to the day after `from`.
    #[arg(long)]
    to: Option<String>,

    /// Maximum price in minor units of the service's budget currency.
    #[arg(short, long)]
    budget: i64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (from, to) = trip_window(cli.from.as_deref(), cli.to.as_deref(), Utc::now().date_naive())?;

    let res = reqwest::Client::new()
        .get(format!("{}/recommendation", cli.url.trim_end_matches('/')))
        .query(&[
            ("location", cli.location.as_str()),
            ("from", from.as_str()),
            ("to", to.as_str()),
            ("budget", cli.budget.to_string().as_str()),
        ])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: recommender returned status {}", status);
        if let Ok(text) = res.text().await {
            if !text.is_empty() {
                eprintln!("Response: {}", text);
            }
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

/// Resolve `--from` / `--to`: `from` defaults to `today`, `to` to the day
/// after `from`.
fn trip_window(
    from: Option<&str>,
    to: Option<&str>,
    today: NaiveDate,
) -> Result<(String, String), chrono::ParseError> {
    let from = match from {
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)?,
        None => today,
    };
    let to = match to {
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)?,
        None => from + Duration::days(1),
    };
    Ok((
        from.format(DATE_FORMAT).to_string(),
        to.format(DATE_FORMAT).to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_to_defaults_to_day_after_from() {
        let window = trip_window(Some("2030-01-10"), None, date("2024-05-01")).unwrap();
        assert_eq!(window, ("2030-01-10".to_string(), "2030-01-11".to_string()));
    }

    #[test]
    fn test_defaults_start_today() {
        let window = trip_window(None, None, date("2024-12-31")).unwrap();
        assert_eq!(window, ("2024-12-31".to_string(), "2025-01-01".to_string()));
    }

    #[test]
    fn test_rejects_malformed_dates() {
        assert!(trip_window(Some("10/01/2030"), None, date("2024-05-01")).is_err());
        assert!(trip_window(None, Some("tomorrow"), date("2024-05-01")).is_err());
    }
}
