//! Text shown in the contact drawer after the form is sent.

const FALLBACK_MODEL: &str = "your chosen vehicle";

pub fn contact_feedback(name: Option<&str>, model: Option<&str>) -> String {
    let name = name.map(str::trim).filter(|n| !n.is_empty());
    let model = model
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(FALLBACK_MODEL);
    match name {
        Some(name) => format!("Thanks {}! We will get back to you about {}.", name, model),
        None => format!("Thanks! We will get back to you about {}.", model),
    }
}
