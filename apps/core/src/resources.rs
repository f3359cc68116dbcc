//! Crisis-support contacts shown to every user.

use crate::models::ResourceItem;

fn item(name: &str, country: &str, phone: &str, url: &str, notes: &str) -> ResourceItem {
    ResourceItem {
        name: name.to_string(),
        country: country.to_string(),
        phone: Some(phone.to_string()),
        url: Some(url.to_string()),
        notes: Some(notes.to_string()),
    }
}

pub fn crisis_resources() -> Vec<ResourceItem> {
    vec![
        item(
            "988 Suicide & Crisis Lifeline",
            "US",
            "988",
            "https://988lifeline.org/",
            "24/7 free and confidential support",
        ),
        item(
            "Samaritans",
            "UK & ROI",
            "116 123",
            "https://www.samaritans.org/",
            "24/7 helpline",
        ),
        item(
            "Lifeline Australia",
            "AU",
            "13 11 14",
            "https://www.lifeline.org.au/",
            "24/7 crisis support",
        ),
        item(
            "Kiran Mental Health Helpline",
            "IN",
            "1800-599-0019",
            "https://www.mohfw.gov.in/",
            "National helpline",
        ),
        item(
            "Your local emergency number",
            "Global",
            "",
            "",
            "If you are in immediate danger, call emergency services",
        ),
    ]
}
