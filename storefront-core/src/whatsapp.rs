//! WhatsApp click-to-chat links.

use reqwest::Url;

use crate::catalog::format_npr;
use crate::models::CatalogItem;

const WA_ME: &str = "https://wa.me";
const API_SEND: &str = "https://api.whatsapp.com/send";

/// Strip everything but ASCII digits: `+977 980-000 0000` -> `9779800000000`.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// `https://wa.me/<digits>?text=<encoded>`
pub fn wa_me_link(phone: &str, message: &str) -> String {
    let base = format!("{}/{}", WA_ME, normalize_phone(phone));
    match Url::parse_with_params(&base, &[("text", message)]) {
        Ok(url) => url.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to build wa.me link, sending bare chat link");
            base
        }
    }
}

/// `https://api.whatsapp.com/send?phone=<digits>&text=<encoded>`
pub fn api_send_link(phone: &str, message: &str) -> String {
    let digits = normalize_phone(phone);
    match Url::parse_with_params(API_SEND, &[("phone", digits.as_str()), ("text", message)]) {
        Ok(url) => url.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to build api.whatsapp.com link");
            format!("{}?phone={}", API_SEND, digits)
        }
    }
}

/// Pre-filled order message for a product page.
pub fn order_message(item: &CatalogItem) -> String {
    format!(
        "Hello! I want to order {} ({}) for {}.",
        item.name,
        item.duration,
        format_npr(item.price_npr)
    )
}

pub fn order_link(phone: &str, item: &CatalogItem) -> String {
    wa_me_link(phone, &order_message(item))
}
