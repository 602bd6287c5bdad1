use crate::models::report::Report;
use crate::utils::formatting::hours2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;

const STAMP: &str = "%Y-%m-%d %H:%M";

pub fn render(report: &Report, details: bool) -> String {
    let mut out = String::new();

    if details {
        let mut table = Table::new(vec![
            Column::right("#"),
            Column::left("start"),
            Column::left("end"),
            Column::left("duration"),
            Column::right("man-hours"),
        ]);

        for (i, entry) in report.entries.iter().enumerate() {
            let duration = if entry.sentinel {
                "-".to_string()
            } else {
                entry.duration.clone()
            };

            table.add_row(vec![
                (i + 1).to_string(),
                entry.start.format(STAMP).to_string(),
                entry.end.format(STAMP).to_string(),
                duration,
                format_hours(entry.man_hours, report.step),
            ]);
        }

        out.push_str(&table.render());
        out.push('\n');
    }

    out.push_str(&format!(
        "Total: {} man-hours ({} worked)\n",
        format_hours(report.total_man_hours, report.step),
        hours2readable(report.total_hours)
    ));

    out
}
