use crate::core::{CrimeRecord, EngagementMethod};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// National non-emergency number, shown when a neighbourhood lists no
/// telephone contact.
const NON_EMERGENCY_NUMBER: &str = "101";

fn html_tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<[^<]+?>").expect("valid html tag pattern"))
}

/// Turns a slug-like identifier into a display title: hyphens become spaces
/// and each word is title-cased ("west-midlands" -> "West Midlands"). Only
/// for display; the underlying identifier stays untouched for API calls.
pub fn format_data_title(name: &str) -> String {
    name.replace('-', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn strip_html_tags(text: &str) -> String {
    html_tag_pattern().replace_all(text, "").into_owned()
}

/// A section header underlined with asterisks.
pub fn output_header(header: &str) -> String {
    format!("\n{}\n{}\n", header, "*".repeat(header.chars().count()))
}

pub fn format_info_line(title: &str, value: Option<&str>) -> String {
    format!("{:<10}: {}\n", title, value.unwrap_or("(not listed)"))
}

pub fn render_contact_info(details: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    let mut has_telephone = false;

    for (key, value) in details {
        if key == "telephone" {
            has_telephone = true;
        }
        out.push_str(&format!("{:<10}: {}\n", key, value));
    }

    if !has_telephone {
        out.push_str(&format!("{:<10}: {}\n", "telephone", NON_EMERGENCY_NUMBER));
    }

    out
}

pub fn render_area_description(description: Option<&str>) -> String {
    let stripped = description.map(strip_html_tags).unwrap_or_default();
    if stripped.trim().is_empty() {
        "No Description\n".to_string()
    } else {
        format!("{}\n", stripped.trim())
    }
}

pub fn render_engagement_methods(methods: &[EngagementMethod]) -> String {
    let mut out = String::new();
    for method in methods {
        out.push_str(&format!("{:<10}: {}\n", method.title, method.url));
    }
    out
}

/// One line per crime in fixed-width columns: category, month, street name.
pub fn render_crimes_info(crimes: &[CrimeRecord]) -> String {
    if crimes.is_empty() {
        return "No street-level crimes found\n".to_string();
    }

    let mut out = String::new();
    for crime in crimes {
        out.push_str(&format!(
            "{:<25}{:<10}{:<30}\n",
            format_data_title(&crime.category),
            crime.month,
            format_data_title(&crime.location.street.name),
        ));
    }
    out
}
