// src/report.rs
use crate::record::JobRecord;

/// Column headers, in `JobRecord::table_row` order. Shared with CSV export.
pub const HEADERS: [&str; 5] = ["Título", "Empresa", "Ubicación", "Vacantes", "Fecha de Publicación"];

pub const NO_MATCHES: &str = "No se encontraron ofertas que coincidan con los filtros.";
pub const NO_RECORDS: &str = "El archivo JSON no contiene ofertas de trabajo.";

/// Summary line plus table, or the no-matches message for an empty subset.
pub fn render(records: &[JobRecord]) -> String {
    if records.is_empty() {
        return s!(NO_MATCHES);
    }
    format!(
        "Se encontraron {} ofertas que coinciden con los filtros:\n{}",
        records.len(),
        render_table(records)
    )
}

/// Bordered table with centered cells:
///
/// ```text
/// +--------+---------+
/// | Título | Empresa |
/// +--------+---------+
/// | Cajero |  ACME   |
/// +--------+---------+
/// ```
pub fn render_table(records: &[JobRecord]) -> String {
    let rows: Vec<[&str; 5]> = records.iter().map(JobRecord::table_row).collect();

    let mut widths = HEADERS.map(cell_width);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell_width(cell));
        }
    }

    let rule = rule_line(&widths);
    let mut out = String::new();
    out.push_str(&rule);
    out.push_str(&row_line(&HEADERS, &widths));
    out.push_str(&rule);
    for row in &rows {
        out.push_str(&row_line(row, &widths));
    }
    out.push_str(&rule);
    out.pop(); // trailing newline
    out
}

fn cell_width(s: &str) -> usize {
    s.chars().count()
}

fn rule_line(widths: &[usize; 5]) -> String {
    let mut line = s!("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn row_line(cells: &[&str; 5], widths: &[usize; 5]) -> String {
    let mut line = s!("|");
    for (cell, w) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(&center(cell, *w));
        line.push_str(" |");
    }
    line.push('\n');
    line
}

/// Odd padding puts the extra space on the right.
fn center(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(cell_width(s));
    let left = pad / 2;
    let right = pad - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}
