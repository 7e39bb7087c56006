//! First-run sample dataset.
//!
//! Installed by the store when no usable persisted data exists, so a new
//! install has something to search and report on.

use chrono::{DateTime, Utc};

use crate::record::{generate_client_id, ClientInput, ClientRecord};

/// The built-in sample clients, each with a fresh id and `created_at = now`.
pub fn sample_clients(now: DateTime<Utc>) -> Vec<ClientRecord> {
    sample_inputs()
        .into_iter()
        .map(|input| ClientRecord::from_input(input, generate_client_id(), now))
        .collect()
}

fn sample_inputs() -> Vec<ClientInput> {
    vec![
        ClientInput::new()
            .client_name("Pradeep & Anu")
            .wedding_date("2025-02-23")
            .venue("Silver Leaf Convention, Salem, India")
            .map_link("https://www.google.com/maps/place/Silver+Leaf+Convention,+Salem")
            .package_details("Silver Package")
            .deliverables(
                "Wedding album, traditional video coverage, candid highlights, \
                 pre-wedding album, pre-wedding video",
            )
            .payment_info("Total: \u{20B9}2,80,000 \u{00B7} Balance due 15 days before wedding")
            .advance_payment(90000.0)
            .payment_status("In Progress"),
        ClientInput::new()
            .client_name("Ramani & Rajitha")
            .wedding_date("2024-12-14")
            .venue("Golden Aura Hall, Erode, India")
            .map_link("https://www.google.com/maps/place/Golden+Aura+Hall,+Erode")
            .package_details("Gold Package")
            .deliverables(
                "Wedding album, traditional full-length video, candid cinema edit, \
                 pre & post wedding albums, pre & post wedding videos",
            )
            .payment_info("Total: \u{20B9}3,40,000 \u{00B7} Balance due on wedding day")
            .advance_payment(120000.0)
            .payment_status("Pending"),
        ClientInput::new()
            .client_name("Gokul & Pooja")
            .wedding_date("2025-05-18")
            .venue("Platinum Meadows, Tiruppur, India")
            .map_link("https://www.google.com/maps/place/Platinum+Meadows,+Tiruppur")
            .package_details("Platinum Package")
            .deliverables(
                "Premium wedding album set, traditional multi-cam video, cinematic candid film, \
                 pre/post wedding albums, pre/post wedding documentary",
            )
            .payment_info("Total: \u{20B9}4,10,000 \u{00B7} Balance due 30 days before wedding")
            .advance_payment(200000.0)
            .payment_status("In Progress"),
        ClientInput::new()
            .client_name("Deepak & Deepika")
            .wedding_date("2024-08-09")
            .venue("Diamond Shore Resort, Erode, India")
            .map_link("https://www.google.com/maps/place/Diamond+Shore+Resort,+Erode")
            .package_details("Diamond Package")
            .deliverables(
                "Luxury wedding album suite, traditional & candid master videos, \
                 pre/post wedding albums, pre/post wedding cinematic film",
            )
            .payment_info("Total: \u{20B9}4,60,000 \u{00B7} Paid in full")
            .advance_payment(460000.0)
            .payment_status("Paid"),
    ]
}
