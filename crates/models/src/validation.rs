//! Field validators shared by every write path.

use crate::errors::ModelError;

const LOCAL_SPECIALS: &str = ".!#$%&'*+/=?^_`{|}~-";

/// Reject absent or whitespace-only text.
pub fn validate_required(value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation("must not be empty".into()));
    }
    Ok(())
}

/// Syntactic email check: `local@domain.tld` with a dotted, hostname-shaped domain.
pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let invalid = |reason: &str| Err(ModelError::Validation(format!("invalid email: {reason}")));

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return invalid("missing '@'"),
    };
    if domain.contains('@') {
        return invalid("more than one '@'");
    }
    if local.is_empty() || local.len() > 64 {
        return invalid("local part must be 1..=64 characters");
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return invalid("misplaced '.' in local part");
    }
    if !local.chars().all(|c| c.is_alphanumeric() || LOCAL_SPECIALS.contains(c)) {
        return invalid("unsupported character in local part");
    }
    if domain.len() > 253 {
        return invalid("domain too long");
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return invalid("domain must contain a '.'");
    }
    for label in &labels {
        if label.is_empty() || label.len() > 63 {
            return invalid("empty or oversized domain label");
        }
        if label.starts_with('-') || label.ends_with('-') {
            return invalid("domain label cannot start or end with '-'");
        }
        if !label.chars().all(|c| c.is_alphanumeric() || c == '-') {
            return invalid("unsupported character in domain");
        }
    }
    let tld = labels[labels.len() - 1];
    if tld.chars().count() < 2 || !tld.chars().all(char::is_alphabetic) {
        return invalid("top-level domain must be alphabetic");
    }
    Ok(())
}
