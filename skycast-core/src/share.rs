//! Share-to-messaging: a WhatsApp deep link pre-filled with a short
//! summary of the current snapshot.

use crate::model::WeatherSnapshot;

const WHATSAPP_SHARE_URL: &str = "https://wa.me/";

/// Human-readable summary used as the share payload. The optional footer
/// comes from configuration and is appended verbatim.
pub fn share_message(snapshot: &WeatherSnapshot, footer: Option<&str>) -> String {
    let mut text = format!(
        "Current weather in {}: {}\u{b0}C, {}.",
        snapshot.location_name, snapshot.temperature_c, snapshot.description
    );
    if let Some(footer) = footer {
        text.push(' ');
        text.push_str(footer);
    }
    text
}

/// Deep link that opens the share target with the summary pre-filled.
pub fn share_link(snapshot: &WeatherSnapshot, footer: Option<&str>) -> String {
    let message = share_message(snapshot, footer);
    format!("{WHATSAPP_SHARE_URL}?text={}", urlencoding::encode(&message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            location_name: "Jakarta".to_string(),
            description: "scattered clouds".to_string(),
            icon_code: "03d".to_string(),
            temperature_c: 31.5,
            humidity_pct: 62,
            wind_speed_mps: 2.6,
            utc_offset_secs: 7 * 3600,
        }
    }

    #[test]
    fn message_contains_location_temperature_and_description() {
        let msg = share_message(&snapshot(), None);
        assert_eq!(
            msg,
            "Current weather in Jakarta: 31.5\u{b0}C, scattered clouds."
        );
    }

    #[test]
    fn footer_is_appended_after_summary() {
        let msg = share_message(&snapshot(), Some("Sent from skycast"));
        assert!(msg.ends_with(". Sent from skycast"));
    }

    #[test]
    fn link_targets_whatsapp_with_encoded_text() {
        let link = share_link(&snapshot(), None);
        assert!(link.starts_with("https://wa.me/?text="));
        // No raw spaces or degree signs survive encoding.
        let encoded = link.trim_start_matches("https://wa.me/?text=");
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\u{b0}'));
        assert!(encoded.contains("Current%20weather%20in%20Jakarta"));
    }
}
