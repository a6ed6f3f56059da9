//! Per-field sanitization rules.
//!
//! The rule for a field is picked from its name: names containing `mail`
//! get the email rule, then names containing `url` get the URL rule, every
//! other field is treated as plain text. Matching is case-insensitive and
//! the first entry of [`FIELD_RULES`] that matches wins.

use crate::utils::html::{escape, strip_tags};

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;
const MAX_LABEL_LENGTH: usize = 63;

/// Punctuation kept by the email rule, besides ASCII letters and digits.
const EMAIL_PUNCTUATION: &str = "!#$%&'*+-=?^_`{|}~@.[]";

/// Punctuation kept by the URL rule, besides ASCII letters and digits.
const URL_PUNCTUATION: &str = "$-_.+!*'(),{}|\\^~[]`<>#%\";/?:@&=";

/// Sanitization applied to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Drop characters illegal in addresses, then validate.
    Email,
    /// Drop characters illegal in URLs. No validation.
    Url,
    /// Strip markup and escape HTML-significant characters.
    Text,
}

/// Field-name fragments in match order.
pub const FIELD_RULES: [(&str, Rule); 2] = [("mail", Rule::Email), ("url", Rule::Url)];

impl Rule {
    /// Rule for a field, chosen by its name.
    pub fn for_field(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        FIELD_RULES
            .iter()
            .find(|(fragment, _)| name.contains(fragment))
            .map_or(Self::Text, |(_, rule)| *rule)
    }

    /// Apply the rule. `None` means the value was rejected.
    pub fn apply(self, value: &str) -> Option<String> {
        match self {
            Self::Email => sanitize_email(value),
            Self::Url => Some(sanitize_url(value)),
            Self::Text => Some(sanitize_text(value)),
        }
    }
}

/// Keep only characters allowed in addresses, then validate the result.
pub fn sanitize_email(value: &str) -> Option<String> {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || EMAIL_PUNCTUATION.contains(*c))
        .collect();
    is_valid_email(&cleaned).then_some(cleaned)
}

/// Keep only characters allowed in URLs.
pub fn sanitize_url(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || URL_PUNCTUATION.contains(*c))
        .collect()
}

/// Plain-text-safe rendition of arbitrary input.
pub fn sanitize_text(value: &str) -> String {
    escape(&strip_tags(value)).into_owned()
}

/// `local@domain` with a dot-atom local part and a hostname domain.
///
/// Quoted local parts and IP literals are rejected.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_PART_LENGTH {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~.".contains(c))
}

fn is_valid_domain(domain: &str) -> bool {
    if !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LENGTH
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
