//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Every function returns a
//! `String` so the menu decides where it goes and tests can compare output
//! directly. Column layout is computed with `unicode-width`; colors come from
//! `colored` and disappear when color is turned off.

use colored::Colorize;
use towerkit::api::{CmdMessage, DisplayRecord, MessageLevel, StoreStatus};
use towerkit::config::TowerConfig;
use towerkit::error::TowerError;
use towerkit::locate::Located;
use towerkit::sort::SortReport;
use unicode_width::UnicodeWidthStr;

pub const NAME_WIDTH: usize = 28;
pub const CATEGORY_WIDTH: usize = 12;

pub fn render_records(records: &[DisplayRecord], status: Option<StoreStatus>) -> String {
    let mut out = String::new();
    let header = match status {
        Some(s) => format!(
            "=== RECORDS ({}/{}, {}) ===",
            s.len, s.capacity, s.order
        ),
        None => format!("=== RECORDS ({}) ===", records.len()),
    };
    out.push('\n');
    out.push_str(&header.bold().to_string());
    out.push('\n');

    if records.is_empty() {
        out.push_str(&"No records registered.".dimmed().to_string());
        out.push('\n');
        return out;
    }

    for dr in records {
        out.push_str(&format!(
            "{:>2}) Name: {} | Category: {} | Priority: {}\n",
            dr.position,
            pad_to_width(&dr.record.name, NAME_WIDTH),
            pad_to_width(&dr.record.category, CATEGORY_WIDTH),
            dr.record.priority
        ));
    }
    out
}

pub fn render_sort_report(report: &SortReport) -> String {
    format!(
        "Comparisons: {}\nElapsed: {:.6} seconds\n",
        report.comparisons,
        report.elapsed.as_secs_f64()
    )
}

pub fn render_located(located: &Located) -> String {
    let record = &located.record;
    format!(
        "\n{}\nName: {}\nCategory: {}\nPriority: {}\nBinary search comparisons: {}\n{}\n",
        "--- KEY COMPONENT FOUND ---".bold(),
        record.name,
        record.category,
        record.priority,
        located.comparisons,
        "Confirmed: the component is present and can activate the tower!".green()
    )
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

pub fn render_error(err: &TowerError) -> String {
    format!("{}\n", err.to_string().red())
}

pub fn render_config(config: &TowerConfig) -> String {
    config
        .list_all()
        .into_iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

/// Left-align `s` in a column `width` cells wide. Longer text is left whole.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use towerkit::model::{Order, Priority, Record};
    use towerkit::sort::SortKey;

    fn no_color() {
        colored::control::set_override(false);
    }

    fn dr(position: usize, name: &str, category: &str, priority: u8) -> DisplayRecord {
        DisplayRecord {
            position,
            record: Record::new(name, category, Priority::new(priority).unwrap()),
        }
    }

    #[test]
    fn renders_aligned_rows() {
        no_color();
        let out = render_records(
            &[dr(1, "Antena", "controle", 2), dr(10, "Motor", "propulsao", 5)],
            Some(StoreStatus {
                len: 2,
                capacity: 20,
                order: Order::ByName,
            }),
        );
        assert!(out.contains("=== RECORDS (2/20, by name) ==="));
        assert!(out.contains(&format!(
            " 1) Name: Antena{} | Category: controle{} | Priority: 2",
            " ".repeat(22),
            " ".repeat(4)
        )));
        assert!(out.contains("10) Name: Motor"));
    }

    #[test]
    fn wide_characters_use_display_width() {
        assert_eq!(pad_to_width("塔", 4), "塔  ");
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }

    #[test]
    fn renders_empty_list() {
        no_color();
        let out = render_records(&[], None);
        assert!(out.contains("=== RECORDS (0) ==="));
        assert!(out.contains("No records registered."));
    }

    #[test]
    fn renders_sort_report_with_six_decimals() {
        let report = SortReport {
            key: SortKey::Name,
            comparisons: 3,
            elapsed: Duration::from_micros(12),
        };
        assert_eq!(
            render_sort_report(&report),
            "Comparisons: 3\nElapsed: 0.000012 seconds\n"
        );
    }

    #[test]
    fn renders_located_record() {
        no_color();
        let located = Located {
            index: 0,
            record: Record::new("Antena", "controle", Priority::new(2).unwrap()),
            comparisons: 2,
        };
        let out = render_located(&located);
        assert!(out.contains("Name: Antena"));
        assert!(out.contains("Binary search comparisons: 2"));
    }

    #[test]
    fn renders_config_lines() {
        let out = render_config(&TowerConfig::default());
        assert_eq!(
            out,
            "capacity = 20\nname-max-len = 29\ncategory-max-len = 29\n"
        );
    }

    #[test]
    fn renders_messages_one_per_line() {
        no_color();
        let out = render_messages(&[CmdMessage::success("done"), CmdMessage::warning("careful")]);
        assert_eq!(out, "done\ncareful\n");
    }
}
