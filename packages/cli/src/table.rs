//! Plain-terminal rendering of extracted records.

use console::style;
use mapleads::BusinessInfo;

/// Column headers, shared with the spreadsheet export.
pub const HEADERS: [&str; 4] = ["S.No.", "Business Name", "Address", "Contact Number"];

/// Print the records as a padded table, most recent first.
pub fn print_records(records: &[BusinessInfo]) {
    let rows = numbered_rows(records);
    let widths = column_widths(&rows);

    let header_line = format_row(&HEADERS.map(String::from), &widths);
    println!("{}", style(header_line).bold());
    println!("{}", "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));

    for row in &rows {
        println!("{}", format_row(row, &widths));
    }
}

/// Rows with a 1-based serial number prepended.
pub fn numbered_rows(records: &[BusinessInfo]) -> Vec<[String; 4]> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            [
                (i + 1).to_string(),
                record.name.clone(),
                record.address.clone(),
                record.phone.clone(),
            ]
        })
        .collect()
}

fn column_widths(rows: &[[String; 4]]) -> [usize; 4] {
    let mut widths = HEADERS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn format_row(row: &[String; 4], widths: &[usize; 4]) -> String {
    row.iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
}
