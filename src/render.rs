use crate::format::MoneyFormatter;
use analytics::{CampaignEvaluation, ZoneAnalysis};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use core_types::{CampaignStatus, Zone};

/// Renders an evaluation as the human-readable report: headline metrics,
/// the scenario table, the zone table and the break-even verdict.
pub fn render_report(evaluation: &CampaignEvaluation, fmt: &dyn MoneyFormatter) -> String {
    let mut out = String::new();

    out.push_str(&headline_table(evaluation, fmt).to_string());
    out.push('\n');
    out.push_str(verdict_line(evaluation.status));
    out.push_str("\nAbove the maximum CPC, the campaign starts losing money.\n\n");

    out.push_str(&scenario_table(evaluation, fmt).to_string());
    out.push_str("\n\n");

    out.push_str(&zone_table(&evaluation.zones, fmt).to_string());
    out.push('\n');
    out.push_str(ZONE_LEGEND);
    out.push('\n');
    out.push_str(&break_even_line(&evaluation.zones, fmt));
    out.push('\n');

    out
}

/// Explains the zone labels shown under the zone table.
pub const ZONE_LEGEND: &str = "Profit: every click pays for itself. \
Break-even: neither profit nor loss. \
Loss: each click costs more than the business can sustain.";

/// Summarizes whether scaling the campaign at the expected rate makes money.
pub fn verdict_line(status: CampaignStatus) -> &'static str {
    if status.is_sustainable() {
        "At this conversion rate, each sale pays for the clicks behind it."
    } else {
        "At this conversion rate, each sale costs more than it earns."
    }
}

/// Renders an evaluation as pretty-printed JSON.
pub fn render_json(evaluation: &CampaignEvaluation) -> serde_json::Result<String> {
    serde_json::to_string_pretty(evaluation)
}

/// Describes where the campaign stops losing money, or says that it never does in range.
pub fn break_even_line(zones: &ZoneAnalysis, fmt: &dyn MoneyFormatter) -> String {
    match &zones.break_even {
        Some(point) => format!(
            "Break-even: from a {} conversion rate, a CPC of {} is sustainable (max CPC {}).",
            fmt.percent(point.conversion_rate),
            fmt.money(zones.current_cpc),
            fmt.money(point.cpc_max)
        ),
        None => format!(
            "No break-even in range: none of the candidate conversion rates sustains a CPC of {}.",
            fmt.money(zones.current_cpc)
        ),
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn status_cell(status: CampaignStatus) -> Cell {
    let color = match status {
        CampaignStatus::Profitable => Color::Green,
        CampaignStatus::BreakEven => Color::Yellow,
        CampaignStatus::Unprofitable => Color::Red,
    };
    Cell::new(status.label()).fg(color)
}

fn headline_table(evaluation: &CampaignEvaluation, fmt: &dyn MoneyFormatter) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Conversion rate used"),
        Cell::new(fmt.percent(evaluation.inputs.conversion_rate)),
    ]);
    table.add_row(vec![
        Cell::new("Cost per sale (CPA)"),
        Cell::new(fmt.money(evaluation.cpa)),
    ]);
    table.add_row(vec![
        Cell::new("Maximum CPC"),
        Cell::new(fmt.money(evaluation.cpc_max)),
    ]);
    table.add_row(vec![Cell::new("Campaign status"), status_cell(evaluation.status)]);
    table
}

fn scenario_table(evaluation: &CampaignEvaluation, fmt: &dyn MoneyFormatter) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Conversion rate", "CPA", "Max CPC", "Status"]);
    for scenario in &evaluation.scenarios {
        table.add_row(vec![
            Cell::new(fmt.percent(scenario.conversion_rate)),
            Cell::new(fmt.money(scenario.cpa)),
            Cell::new(fmt.money(scenario.cpc_max)),
            status_cell(scenario.status),
        ]);
    }
    table
}

fn zone_table(zones: &ZoneAnalysis, fmt: &dyn MoneyFormatter) -> Table {
    let break_even_rate = zones.break_even.map(|p| p.conversion_rate);

    let mut table = new_table();
    table.set_header(vec!["Conversion rate", "Max CPC", "Current CPC", "Zone"]);
    for point in &zones.points {
        let (label, color) = match point.zone {
            Zone::Profit => ("Profit", Color::Green),
            Zone::Loss => ("Loss", Color::Red),
        };
        let label = if break_even_rate == Some(point.conversion_rate) {
            format!("{label} (break-even)")
        } else {
            label.to_string()
        };
        table.add_row(vec![
            Cell::new(fmt.percent(point.conversion_rate)),
            Cell::new(fmt.money(point.cpc_max)),
            Cell::new(fmt.money(zones.current_cpc)),
            Cell::new(label).fg(color),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::CurrencyFormatter;
    use analytics::AnalyticsEngine;
    use core_types::CampaignInputs;
    use rust_decimal_macros::dec;

    fn evaluate(cpc: rust_decimal::Decimal, commission: rust_decimal::Decimal) -> CampaignEvaluation {
        let inputs = CampaignInputs::new(cpc, commission, dec!(0.02)).unwrap();
        AnalyticsEngine::new().evaluate(&inputs).unwrap()
    }

    #[test]
    fn test_report_contains_headline_and_break_even() {
        let fmt = CurrencyFormatter::new("R$", 2);
        let report = render_report(&evaluate(dec!(2.0), dec!(150.0)), &fmt);

        assert!(report.contains("R$100.00"));
        assert!(report.contains("R$3.00"));
        assert!(report.contains("Profitable"));
        assert!(report.contains("Break-even: from a 1.50% conversion rate"));
    }

    #[test]
    fn test_report_explains_zones_and_verdict() {
        let fmt = CurrencyFormatter::new("$", 2);

        let report = render_report(&evaluate(dec!(2.0), dec!(150.0)), &fmt);
        assert!(report.contains(ZONE_LEGEND));
        assert!(report.contains(verdict_line(CampaignStatus::Profitable)));

        // cpa = 5 / 0.02 = 250 > 50
        let report = render_report(&evaluate(dec!(5.0), dec!(50.0)), &fmt);
        assert!(report.contains("each sale costs more than it earns"));
    }

    #[test]
    fn test_break_even_status_counts_as_sustainable() {
        assert_eq!(
            verdict_line(CampaignStatus::BreakEven),
            verdict_line(CampaignStatus::Profitable)
        );
        assert_ne!(
            verdict_line(CampaignStatus::Unprofitable),
            verdict_line(CampaignStatus::Profitable)
        );
    }

    #[test]
    fn test_missing_break_even_is_reported_explicitly() {
        let fmt = CurrencyFormatter::new("$", 2);
        let evaluation = evaluate(dec!(5.0), dec!(50.0));

        assert!(evaluation.zones.break_even.is_none());
        assert_eq!(
            break_even_line(&evaluation.zones, &fmt),
            "No break-even in range: none of the candidate conversion rates sustains a CPC of $5.00."
        );
    }

    #[test]
    fn test_json_round_trips_the_status() {
        let json = render_json(&evaluate(dec!(2.0), dec!(150.0))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["status"], "Profitable");
        assert_eq!(value["scenarios"].as_array().unwrap().len(), 1);
        assert!(value["zones"]["break_even"].is_object());
    }
}
