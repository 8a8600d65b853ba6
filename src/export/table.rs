//! Table rendering for whois records.

use colored::Colorize;
use tabled::builder::Builder;
use tabled::settings::{Alignment, Padding, Style};

use crate::whois::WhoisRecord;

/// Column headers, in display order.
pub const HEADERS: [&str; 4] = ["IP/CIDR", "NetName / OrgName", "Location", "Country/TLD"];

/// How the result table is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Box-drawn borders, a line between rows, bold blue header
    #[default]
    Fancy,
    /// No borders; columns aligned with two spaces and a dashed header underline
    Plain,
}

impl TableStyle {
    /// `Plain` when `plain` is set, `Fancy` otherwise.
    pub fn from_plain_flag(plain: bool) -> Self {
        if plain {
            Self::Plain
        } else {
            Self::Fancy
        }
    }
}

/// Renders records as a table, one row per record in the given order.
///
/// The header is always present, even with no records.
pub fn render_table(records: &[WhoisRecord], style: TableStyle) -> String {
    match style {
        TableStyle::Fancy => render_fancy(records),
        TableStyle::Plain => render_plain(records),
    }
}

fn record_cells(record: &WhoisRecord) -> [String; 4] {
    [
        record.target.clone(),
        record.net_org.clone(),
        record.location.clone(),
        record.country.clone(),
    ]
}

fn render_fancy(records: &[WhoisRecord]) -> String {
    let mut builder = Builder::default();
    builder.push_record(
        HEADERS
            .iter()
            .map(|header| header.bold().bright_blue().to_string()),
    );
    for record in records {
        builder.push_record(record_cells(record));
    }

    let mut table = builder.build();
    table.with(Style::modern()).with(Alignment::left());
    table.to_string()
}

fn render_plain(records: &[WhoisRecord]) -> String {
    let mut builder = Builder::default();
    builder.push_record(HEADERS.iter().map(|header| header.to_string()));
    builder.push_record(HEADERS.iter().map(|header| "-".repeat(header.len())));
    for record in records {
        builder.push_record(record_cells(record));
    }

    let mut table = builder.build();
    table
        .with(Style::empty())
        .with(Alignment::left())
        .with(Padding::new(0, 2, 0, 0));
    table
        .to_string()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
