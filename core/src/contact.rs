//! Outbound contact links.

use crate::model::ContactInfo;

/// Greeting prefilled in the WhatsApp chat opened by the floating button.
pub const WHATSAPP_GREETING: &str = "Halo, saya tertarik untuk konsultasi tentang proyek.";

pub fn whatsapp_url(number: &str, message: Option<&str>) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    match message {
        Some(text) => format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text)),
        None => format!("https://wa.me/{}", digits),
    }
}

pub fn mailto(info: &ContactInfo) -> String {
    format!("mailto:{}", info.email)
}

pub fn tel(info: &ContactInfo) -> String {
    let digits: String = info
        .phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

pub fn maps_link(address: &str) -> String {
    format!("https://maps.google.com/?q={}", urlencoding::encode(address))
}

pub fn maps_embed(address: &str) -> String {
    format!(
        "https://maps.google.com/maps?q={}&t=&z=15&ie=UTF8&iwloc=&output=embed",
        urlencoding::encode(address)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CONTACT_INFO;

    #[test]
    fn whatsapp_link_encodes_greeting() {
        let url = whatsapp_url("+62 812-3456", Some(WHATSAPP_GREETING));
        assert!(url.starts_with("https://wa.me/628123456?text=Halo%2C%20saya"));
        assert!(!url.contains(' '));
        assert_eq!(whatsapp_url(CONTACT_INFO.whatsapp, None), "https://wa.me/6281234567890");
    }

    #[test]
    fn phone_and_mail_links() {
        assert_eq!(tel(&CONTACT_INFO), "tel:+6281234567890");
        assert_eq!(mailto(&CONTACT_INFO), "mailto:info@askra.id");
    }

    #[test]
    fn maps_links_escape_address() {
        let link = maps_link(CONTACT_INFO.address);
        assert_eq!(
            link,
            "https://maps.google.com/?q=JL.%20Peta%20Barat%20No.%2061%2C%20Jakarta%2C%20Indonesia"
        );
        assert!(maps_embed(CONTACT_INFO.address).ends_with("&output=embed"));
    }
}
