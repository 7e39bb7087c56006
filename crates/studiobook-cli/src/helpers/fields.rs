use studiobook_core::record::parse_wedding_date;
use studiobook_core::ClientInput;

use crate::cli::ClientFieldArgs;

/// Copy the provided flags onto a store request. Omitted flags stay unset.
pub fn apply_fields(mut input: ClientInput, fields: &ClientFieldArgs) -> ClientInput {
    if let Some(value) = &fields.name {
        input = input.client_name(value);
    }
    if let Some(value) = &fields.date {
        input = input.wedding_date(value);
    }
    if let Some(value) = &fields.venue {
        input = input.venue(value);
    }
    if let Some(value) = &fields.map_link {
        input = input.map_link(value);
    }
    if let Some(value) = &fields.package {
        input = input.package_details(value);
    }
    if let Some(value) = &fields.deliverables {
        input = input.deliverables(value);
    }
    if let Some(value) = &fields.payment_info {
        input = input.payment_info(value);
    }
    if let Some(value) = &fields.advance {
        input = input.advance_payment_text(value);
    }
    if let Some(value) = &fields.status {
        input = input.payment_status(value);
    }
    input
}

/// The `--date` value when it is present, non-blank and not a calendar date.
pub fn unrecognized_date(fields: &ClientFieldArgs) -> Option<&str> {
    fields
        .date
        .as_deref()
        .filter(|date| !date.trim().is_empty() && parse_wedding_date(date).is_none())
}
