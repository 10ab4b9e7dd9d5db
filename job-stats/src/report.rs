use crate::stats::JobsReport;

const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Render one provider's report as a title line followed by a
/// box-drawing table, rows in insertion order.
pub fn render_table(report: &JobsReport, title: &str) -> String {
    let header: [String; 4] = HEADERS.map(String::from);
    let mut rows: Vec<[String; 4]> = Vec::with_capacity(report.len());
    for (language, stats) in report.iter() {
        rows.push([
            language.to_owned(),
            stats.vacancies_found.to_string(),
            stats.vacancies_processed.to_string(),
            stats.average_salary.to_string(),
        ]);
    }

    let mut widths: [usize; 4] = [0; 4];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    push_border(&mut out, &widths, '┌', '┬', '┐');
    push_row(&mut out, &widths, &header);
    push_border(&mut out, &widths, '├', '┼', '┤');
    for row in &rows {
        push_row(&mut out, &widths, row);
    }
    push_border(&mut out, &widths, '└', '┴', '┘');
    out
}

fn push_border(out: &mut String, widths: &[usize; 4], left: char, mid: char, right: char) {
    out.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(mid);
        }
        for _ in 0..width + 2 {
            out.push('─');
        }
    }
    out.push(right);
    out.push('\n');
}

fn push_row(out: &mut String, widths: &[usize; 4], cells: &[String; 4]) {
    for (width, cell) in widths.iter().zip(cells) {
        out.push('│');
        out.push(' ');
        out.push_str(cell);
        for _ in cell.chars().count()..*width {
            out.push(' ');
        }
        out.push(' ');
    }
    out.push('│');
    out.push('\n');
}
