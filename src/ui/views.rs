//! Human-readable renderings of the store and its reports.

use super::messages::{footer, header};
use crate::config::Config;
use crate::models::summary::{Breakdown, Comparison, ReferenceCheck, Summary, Verdict};
use crate::models::{Activity, ActivityKind};
use crate::store::ActivityStore;
use crate::utils::formatting::{capitalize, fmt_kg, fmt_quantity};
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

/// Separator and width taken from the configuration.
pub struct ViewStyle {
    pub sep: String,
    pub width: usize,
}

impl ViewStyle {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            sep: cfg.separator_char.clone(),
            width: cfg.wrap_width.max(20),
        }
    }
}

/// One-line description, e.g. "Car - 12.5 km (2.14 kg CO2)".
pub fn describe(activity: &Activity) -> String {
    let what = match activity {
        Activity::Transport {
            mode, distance_km, ..
        } => format!("{} - {} km", capitalize(mode.as_str()), distance_km),
        Activity::Electricity { kwh, .. } => format!("Electricity - {} kWh", kwh),
        Activity::Water { litres, .. } => format!("Water usage - {} litres", litres),
        Activity::Waste { kg, .. } => format!("Waste - {} kg", kg),
    };

    match activity.emissions_kg() {
        Some(e) => format!("{what} ({})", fmt_kg(e)),
        None => what,
    }
}

fn type_label(activity: &Activity) -> String {
    match activity {
        Activity::Transport { mode, .. } => {
            format!("Transportation ({})", capitalize(mode.as_str()))
        }
        Activity::Electricity { .. } => "Electricity Usage".to_string(),
        Activity::Water { .. } => "Water Usage".to_string(),
        Activity::Waste { .. } => "Waste Generation".to_string(),
    }
}

pub fn print_summary(summary: &Summary, style: &ViewStyle) {
    header("ENVIRONMENTAL IMPACT SUMMARY", &style.sep, style.width);
    println!(
        "🌍 Total Carbon Footprint: {}",
        fmt_kg(summary.total_emissions_kg)
    );
    println!(
        "💧 Total Water Usage: {}",
        fmt_quantity(summary.total_water_litres, "litres")
    );
    println!(
        "📊 Total Activities Logged: {} activities",
        summary.activity_count
    );

    println!("\n📈 Activity Breakdown:");
    for stats in &summary.breakdown.kinds {
        println!(
            "   {} {}: {}",
            stats.kind.icon(),
            stats.kind.label(),
            stats.count
        );
    }
    footer(&style.sep, style.width);
}

pub fn print_activities(store: &ActivityStore, style: &ViewStyle) {
    if store.is_empty() {
        println!("\n❌ No activities logged yet!\n");
        return;
    }

    header("ACTIVITY LOG", &style.sep, style.width);

    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left("Date"),
        Column::left("Type"),
        Column::right("Amount"),
        Column::right("Emissions"),
    ]);

    for (i, a) in store.iter().enumerate() {
        let emissions = match a.emissions_kg() {
            Some(e) => fmt_kg(e),
            None => Colour::Fixed(8).paint("--").to_string(),
        };
        table.add_row(vec![
            (i + 1).to_string(),
            a.date_str(),
            type_label(a),
            fmt_quantity(a.quantity(), a.kind().unit()),
            emissions,
        ]);
    }

    print!("{}", table.render());
    footer(&style.sep, style.width);
}

pub fn print_statistics(breakdown: &Breakdown, style: &ViewStyle) {
    if breakdown.kinds.iter().all(|k| k.count == 0) {
        println!("\n❌ No data available for statistics!\n");
        return;
    }

    header("DETAILED STATISTICS", &style.sep, style.width);

    for stats in breakdown.kinds.iter().filter(|k| k.count > 0) {
        println!("\n📊 {}:", stats.kind.as_str().to_uppercase());
        println!("   Activities: {}", stats.count);

        let label = match stats.kind {
            ActivityKind::Transport => "Total Distance",
            ActivityKind::Electricity => "Total Consumption",
            ActivityKind::Water => "Total Usage",
            ActivityKind::Waste => "Total Waste",
        };
        println!(
            "   {}: {}",
            label,
            fmt_quantity(stats.total, stats.kind.unit())
        );

        if stats.emissions_kg > 0.0 {
            println!("   Total Emissions: {}", fmt_kg(stats.emissions_kg));
        }
    }

    println!();
    footer(&style.sep, style.width);
}

pub fn print_suggestions(suggestions: &[&str], style: &ViewStyle) {
    header("SUSTAINABILITY SUGGESTIONS", &style.sep, style.width);

    for (i, s) in suggestions.iter().enumerate() {
        let prefix = format!("{}. ", i + 1);
        let indent = " ".repeat(prefix.len());
        let opts = textwrap::Options::new(style.width)
            .initial_indent(&prefix)
            .subsequent_indent(&indent);
        println!("{}", textwrap::fill(s, opts));
    }

    footer(&style.sep, style.width);
}

fn print_check(check: &ReferenceCheck, unit: &str, good: &str, bad: &str) {
    println!("   Your Total: {}", fmt_quantity(check.yours, unit));
    println!("   Daily Average: {}", fmt_quantity(check.reference, unit));
    match check.verdict {
        Verdict::AtOrBelow => println!("   {}", Colour::Green.paint(format!("✅ {good}"))),
        Verdict::Above => println!("   {}", Colour::Yellow.paint(format!("⚠️  {bad}"))),
    }
}

pub fn print_comparison(cmp: &Comparison, style: &ViewStyle) {
    header("COMPARISON WITH GLOBAL AVERAGES", &style.sep, style.width);

    println!("\n🌍 Carbon Footprint:");
    print_check(
        &cmp.carbon,
        "kg CO2",
        "You're at or below average! Keep it up!",
        "You're above average. Try to reduce emissions.",
    );

    println!("\n💧 Water Usage:");
    print_check(
        &cmp.water,
        "litres",
        "You're conserving water well!",
        "Consider reducing water consumption.",
    );

    footer(&style.sep, style.width);
}
