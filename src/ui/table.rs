//! Table rendering for CLI outputs.
//!
//! Attendance cells routinely contain Japanese text, so column widths are
//! computed with display width rather than char count.

use unicode_width::UnicodeWidthStr;

/// Side-effecting display consumed by the workflows. The workflows never
/// read anything back from it.
pub trait RenderSink {
    fn render_table(&mut self, header: &[String], rows: &[Vec<String>], footer: Option<&[String]>);
}

/// Renders tables to stdout.
#[derive(Default)]
pub struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn render_table(&mut self, header: &[String], rows: &[Vec<String>], footer: Option<&[String]>) {
        print!("{}", format_table(header, rows, footer));
    }
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Format header, body and optional footer into aligned columns with a
/// rule under the header and above the footer.
pub fn format_table(header: &[String], rows: &[Vec<String>], footer: Option<&[String]>) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| UnicodeWidthStr::width(h.as_str())).collect();

    let mut measure = |row: &[String]| {
        for (i, cell) in row.iter().enumerate() {
            let w = UnicodeWidthStr::width(cell.as_str());
            if i >= widths.len() {
                widths.push(w);
            } else if w > widths[i] {
                widths[i] = w;
            }
        }
    };
    for row in rows {
        measure(row);
    }
    if let Some(f) = footer {
        measure(f);
    }

    let rule: String = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    let mut push_row = |out: &mut String, row: &[String]| {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths.get(i).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(line.trim_end());
        out.push('\n');
    };

    if !header.is_empty() {
        push_row(&mut out, header);
        out.push_str(&rule);
        out.push('\n');
    }
    for row in rows {
        push_row(&mut out, row);
    }
    if let Some(f) = footer {
        out.push_str(&rule);
        out.push('\n');
        push_row(&mut out, f);
    }

    out
}
