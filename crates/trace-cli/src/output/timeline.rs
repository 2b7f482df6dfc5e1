use std::fmt::Write as _;

use trace_core::dates::format_iso;
use trace_core::responses::TraceResponse;

use crate::ui;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Render a product trace as a header block followed by one line per event,
/// oldest first.
#[must_use]
pub fn render_trace(trace: &TraceResponse, color: bool) -> String {
    let produce = &trace.produce;
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", produce.name, produce.id);
    if trace.requested_id != produce.id {
        let _ = writeln!(out, "requested id: {}", trace.requested_id);
    }
    let _ = writeln!(out, "harvested: {}", format_iso(produce.harvest_date));
    if !produce.quality_metrics.is_empty() {
        let _ = writeln!(out, "quality:");
        for metric in &produce.quality_metrics {
            let _ = writeln!(out, "  - {metric}");
        }
    }

    out.push('\n');
    let last = trace.events.len().saturating_sub(1);
    for (index, event) in trace.events.iter().enumerate() {
        let glyph = event.event_type.glyph();
        let marker = if color {
            format!("\u{1b}[1m[{glyph}]\u{1b}[0m")
        } else {
            format!("[{glyph}]")
        };
        let _ = writeln!(
            out,
            "{marker} {:<10} {}  {}",
            event.event_type.label(),
            event.timestamp.format(TIMESTAMP_FORMAT),
            event.title
        );
        let _ = writeln!(out, "  |  {} · {}", event.location, event.actor);
        if let Some(price) = &event.price {
            let _ = writeln!(out, "  |  price: {price}");
        }
        if let Some(tx) = &event.transaction_ref {
            let _ = writeln!(out, "  |  tx: {tx}");
        }
        if index != last {
            out.push_str("  |\n");
        }
    }

    out.trim_end().to_string()
}

/// Print a trace in the table format's timeline layout.
pub fn print_trace(trace: &TraceResponse) {
    println!("{}", render_trace(trace, ui::prefs().table_color));
}
