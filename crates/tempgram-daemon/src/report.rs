//! Report rendering.
//!
//! Turns a decoded snapshot into the HTML message sent to Telegram:
//! a timestamped headline, a monospace table of all readings wrapped in
//! `<pre>`, and an uptime footer.
//!
//! ```text
//! 2026-08-29 18:45:12: Temperature: <strong>45.00°C</strong>
//!
//! <pre>Module             Sensor        Temp
//! -----------------  ------------  -------
//! coretemp-isa-0000  Package id 0  45.00°C
//! nvme-pci-0400      Composite     38.50°C</pre>
//!
//! Uptime: 5d 12h 34m ; Boot time: 2026-08-24 06:10:40
//! ```

use chrono::{DateTime, Local};
use tempgram_sensors::SensorSnapshot;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// First reading with a numeric value, in module-then-reading order. Used
/// as the headline temperature.
fn headline_input(snapshot: &SensorSnapshot) -> Option<f64> {
    snapshot
        .readings()
        .filter_map(|(_, reading)| reading.input)
        .next()
}

/// One-line summary for the daemon log.
pub fn render_log_line(snapshot: &SensorSnapshot) -> String {
    match headline_input(snapshot) {
        Some(temp) => format!("Temperature: {temp:.2}°C"),
        None => "Temperature: N/A".to_string(),
    }
}

/// Renders the full HTML report for one snapshot.
pub fn render_report(
    snapshot: &SensorSnapshot,
    now: DateTime<Local>,
    boot_time: DateTime<Local>,
) -> String {
    let headline = match headline_input(snapshot) {
        Some(temp) => format!("<strong>{temp:.2}°C</strong>"),
        None => "N/A".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{}: Temperature: {}\n\n",
        now.format(TIME_FORMAT),
        headline
    ));
    out.push_str("<pre>");
    out.push_str(&render_table(snapshot));
    out.push_str("</pre>");

    let uptime = now.signed_duration_since(boot_time);
    out.push_str(&format!(
        "\n\nUptime: {} ; Boot time: {}",
        format_uptime(uptime.num_seconds().max(0) as u64),
        boot_time.format(TIME_FORMAT)
    ));
    out
}

/// Renders the readings table. Readings without a numeric value are
/// omitted; a snapshot with none renders just the header.
fn render_table(snapshot: &SensorSnapshot) -> String {
    const HEADERS: [&str; 3] = ["Module", "Sensor", "Temp"];

    let rows: Vec<[String; 3]> = snapshot
        .readings()
        .filter_map(|(module, reading)| {
            let temp = reading.input?;
            Some([
                module.name.clone(),
                reading.name.clone(),
                format!("{temp:.2}°C"),
            ])
        })
        .collect();

    // Column widths in characters, not bytes: the degree sign is multi-byte.
    let mut widths = [0usize; 3];
    for (width, header) in widths.iter_mut().zip(HEADERS) {
        *width = header.chars().count();
    }
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    push_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        // No trailing padding on the last column.
        if i < cells.len() - 1 {
            for _ in cell.chars().count()..*width {
                out.push(' ');
            }
        }
    }
    out.push('\n');
}

/// Formats a duration in seconds as "Xd Yh Zm".
fn format_uptime(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
