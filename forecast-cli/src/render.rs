//! Terminal rendering of the three widget states: a loading notice, an error
//! banner, or a row of per-day forecast cards.

use chrono::NaiveDate;
use forecast_core::{ForecastDay, ForecastResult, classify, relative_date_label};

const CARD_WIDTH: usize = 18;

pub fn loading_notice(label: &str) {
    println!("Fetching forecast for {label}...");
}

pub fn error_banner(message: &str) {
    eprintln!("✗ Error loading forecast: {message}");
}

pub fn cards(result: &ForecastResult, today: NaiveDate) {
    println!();
    println!("{}-Day Weather Forecast", result.days.len());
    println!("{}", result.location);
    println!();

    let cards: Vec<Vec<String>> = result
        .days
        .iter()
        .map(|day| card_lines(day, today))
        .collect();

    let height = cards.first().map_or(0, Vec::len);
    for row in 0..height {
        let line: Vec<&str> = cards.iter().map(|card| card[row].as_str()).collect();
        println!("{}", line.join("  "));
    }
}

/// One bordered card: date label, icon and caption, max/min, and the
/// precipitation line only when there is any. All cards share one height so
/// the row stays aligned.
fn card_lines(day: &ForecastDay, today: NaiveDate) -> Vec<String> {
    let conditions = classify(day.weather_code);
    let precipitation = if day.precipitation > 0.0 {
        format!("{:.1} mm", day.precipitation)
    } else {
        String::new()
    };

    let inner = [
        relative_date_label(day.date, today),
        format!("{} {}", conditions.kind.glyph(), conditions.description),
        format!("{}° / {}°", day.max_temp, day.min_temp),
        precipitation,
    ];

    let mut lines = Vec::with_capacity(inner.len() + 2);
    lines.push(format!("┌{}┐", "─".repeat(CARD_WIDTH)));
    for text in inner {
        lines.push(format!("│{}│", pad(&text, CARD_WIDTH)));
    }
    lines.push(format!("└{}┘", "─".repeat(CARD_WIDTH)));
    lines
}

fn pad(text: &str, width: usize) -> String {
    let used = text.chars().count() + 1;
    format!(" {}{}", text, " ".repeat(width.saturating_sub(used)))
}
