//! Result cards
//!
//! The results panel lists one card per selected person: the name, the email
//! as a `mailto:` link and the phone number. The interactive view and the
//! `cards` output format share these lines.

use super::Colorizer;
use crate::source::Person;

/// Lines of a single card, without trailing blank line
pub fn card_lines(person: &Person, colorizer: &Colorizer) -> Vec<String> {
    vec![
        colorizer.name(&person.name),
        format!(
            "{} {}",
            colorizer.label("Email:"),
            colorizer.link(&person.email, &person.mailto())
        ),
        format!("{} {}", colorizer.label("Phone Number:"), person.phone),
    ]
}

/// Message shown when a committed search found nobody
pub fn no_results_line(query: &str, colorizer: &Colorizer) -> String {
    colorizer.warning(&format!("No results found for \"{}\"", query))
}

/// Every card separated by a blank line, or the "no results" message
pub fn results_lines(query: &str, people: &[Person], colorizer: &Colorizer) -> Vec<String> {
    if people.is_empty() {
        return vec![no_results_line(query, colorizer)];
    }

    let mut lines = Vec::with_capacity(people.len() * 4);
    for (i, person) in people.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(card_lines(person, colorizer));
    }
    lines
}
