//! Text and table output for clients, summaries and reports.

use studiobook_core::{ClientRecord, Report, ReportEntry, Summary};

use crate::constants::EMPTY_VALUE;
use crate::ui::theme::{status_style, styled, styles};
use crate::ui::{
    blank_line, format_inr, format_wedding_date, kv, or_dash, plural, print, short_id,
    simple_table, truncate, Column, UiContext,
};

const NAME_MAX: usize = 28;
const VENUE_MAX: usize = 32;
const PACKAGE_MAX: usize = 24;
const NOTE_MAX: usize = 40;

/// Print clients as a table, or `empty_message` when there are none.
pub fn print_client_list(ctx: &UiContext, records: &[&ClientRecord], empty_message: &str) {
    if records.is_empty() {
        print(ctx, empty_message);
        return;
    }

    let columns = [
        Column::new("ID"),
        Column::new("Client"),
        Column::new("Wedding"),
        Column::new("Venue"),
        Column::new("Package"),
        Column::new("Status"),
        Column::new("Advance"),
    ];
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            if ctx.mode.is_pretty() {
                vec![
                    short_id(&record.id),
                    truncate(&or_dash(&record.client_name), NAME_MAX),
                    format_wedding_date(&record.wedding_date),
                    truncate(&or_dash(&record.venue), VENUE_MAX),
                    truncate(&or_dash(&record.package_details), PACKAGE_MAX),
                    or_dash(&record.payment_status),
                    format_inr(record.advance_payment),
                ]
            } else {
                vec![
                    record.id.clone(),
                    record.client_name.clone(),
                    record.wedding_date.clone(),
                    record.venue.clone(),
                    record.package_details.clone(),
                    record.payment_status.clone(),
                    record.advance_payment.to_string(),
                ]
            }
        })
        .collect();

    print(ctx, &simple_table(ctx, &columns, &rows));
    if ctx.mode.is_pretty() {
        blank_line(ctx);
        print(
            ctx,
            &styled(&plural(records.len(), "client"), styles::dim(), ctx.color),
        );
    }
}

/// Print every field of one client.
pub fn print_client(ctx: &UiContext, record: &ClientRecord, map_embed_url: Option<&str>) {
    if ctx.mode.is_pretty() {
        let name = or_dash(&record.client_name);
        print(ctx, &styled(&name, styles::bold(), ctx.color));
        print(ctx, &kv(ctx, "ID", &record.id));
        print(
            ctx,
            &kv(ctx, "Wedding", &format_wedding_date(&record.wedding_date)),
        );
    } else {
        print(ctx, &kv(ctx, "ID", &record.id));
        print(ctx, &kv(ctx, "Client", &record.client_name));
        print(ctx, &kv(ctx, "Wedding Date", &record.wedding_date));
    }

    let display = |value: &str| {
        if ctx.mode.is_pretty() {
            or_dash(value)
        } else {
            value.to_string()
        }
    };

    print(ctx, &kv(ctx, "Venue", &display(&record.venue)));
    print(ctx, &kv(ctx, "Map Link", &display(&record.map_link)));
    if let Some(url) = map_embed_url {
        print(ctx, &kv(ctx, "Map Embed", url));
    }
    print(ctx, &kv(ctx, "Package", &display(&record.package_details)));
    print(ctx, &kv(ctx, "Deliverables", &display(&record.deliverables)));

    let status = display(&record.payment_status);
    let status = if ctx.mode.is_pretty() {
        styled(&status, status_style(&record.payment_status), ctx.color)
    } else {
        status
    };
    print(ctx, &kv(ctx, "Payment Status", &status));

    let advance = if ctx.mode.is_pretty() {
        format_inr(record.advance_payment)
    } else {
        record.advance_payment.to_string()
    };
    print(ctx, &kv(ctx, "Advance", &advance));
    print(ctx, &kv(ctx, "Payment Info", &display(&record.payment_info)));

    let added = match record.created_at {
        Some(at) if ctx.mode.is_pretty() => at.format("%Y-%m-%d %H:%M UTC").to_string(),
        Some(at) => at.to_rfc3339(),
        None => display(""),
    };
    print(ctx, &kv(ctx, "Added", &added));

    for (key, value) in &record.extra {
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        print(ctx, &kv(ctx, key, &text));
    }
}

/// Print the dashboard totals.
pub fn print_summary(ctx: &UiContext, summary: &Summary) {
    let advance = match summary.advance_total {
        Some(total) if ctx.mode.is_pretty() => format_inr(total),
        Some(total) => total.to_string(),
        None => EMPTY_VALUE.to_string(),
    };
    print(ctx, &kv(ctx, "Total Clients", &summary.total.to_string()));
    print(
        ctx,
        &kv(
            ctx,
            "Weddings This Month",
            &summary.upcoming_this_month.to_string(),
        ),
    );
    print(ctx, &kv(ctx, "Pending Payments", &summary.pending.to_string()));
    print(ctx, &kv(ctx, "Advance Received", &advance));
}

/// Print a grouped report, most recent period first.
pub fn print_report(ctx: &UiContext, report: &Report, empty_message: &str) {
    if report.is_empty() {
        print(ctx, empty_message);
        return;
    }
    for (index, entry) in report.entries.iter().enumerate() {
        if index > 0 {
            blank_line(ctx);
        }
        if ctx.mode.is_pretty() {
            print_entry_pretty(ctx, entry);
        } else {
            print_entry_plain(ctx, entry);
        }
    }
}

fn print_entry_pretty(ctx: &UiContext, entry: &ReportEntry) {
    let title = styled(&entry.label, styles::bold(), ctx.color);
    let meta = styled(
        &format!(
            "{} \u{00B7} {} advance",
            plural(entry.count, "client"),
            format_inr(entry.advance_total)
        ),
        styles::dim(),
        ctx.color,
    );
    print(ctx, &format!("{}  {}", title, meta));

    let columns = [
        Column::new("Date"),
        Column::new("Client"),
        Column::new("Package"),
        Column::new("Status"),
        Column::new("Advance"),
        Column::new("Payment Info"),
    ];
    let rows: Vec<Vec<String>> = entry
        .clients
        .iter()
        .map(|line| {
            vec![
                format_wedding_date(&line.wedding_date),
                truncate(&or_dash(&line.client_name), NAME_MAX),
                truncate(&or_dash(&line.package_details), PACKAGE_MAX),
                or_dash(&line.payment_status),
                format_inr(line.advance_payment),
                truncate(&or_dash(&line.payment_info), NOTE_MAX),
            ]
        })
        .collect();
    print(ctx, &simple_table(ctx, &columns, &rows));
}

fn print_entry_plain(ctx: &UiContext, entry: &ReportEntry) {
    print(ctx, &kv(ctx, "Period", &entry.key));
    print(ctx, &kv(ctx, "Label", &entry.label));
    print(ctx, &kv(ctx, "Count", &entry.count.to_string()));
    print(ctx, &kv(ctx, "Advance Total", &entry.advance_total.to_string()));
    let rows: Vec<Vec<String>> = entry
        .clients
        .iter()
        .map(|line| {
            vec![
                line.id.clone(),
                line.wedding_date.clone(),
                line.client_name.clone(),
                line.payment_status.clone(),
                line.advance_payment.to_string(),
            ]
        })
        .collect();
    print(ctx, &simple_table(ctx, &[], &rows));
}
