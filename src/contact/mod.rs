//! Contact form hand-off
//!
//! The form never talks to a server itself. Its four fields are encoded into
//! the query string of a third-party form endpoint and the resulting URL is
//! handed to the system browser.

mod launcher;

pub use launcher::{copy_to_clipboard, open_in_browser, wait_for_launcher};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Url;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FORM_URL: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSfdrSW_I6P22iHxeEBHSMB8QHSmU2ZyNr0CrSB3N-Fa3RRSRQ/viewform";

/// Characters left as-is in a query component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Contact hand-off errors
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Invalid form endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Failed to launch browser: {0}")]
    Launch(String),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

/// Fields of the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your name",
            ContactField::Email => "Your email",
            ContactField::Subject => "Select a subject",
            ContactField::Message => "Your message",
        }
    }
}

/// The form endpoint and the entry id each field is submitted under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormEndpoint {
    pub url: String,
    pub name_entry: String,
    pub email_entry: String,
    pub subject_entry: String,
    pub message_entry: String,
}

impl Default for FormEndpoint {
    fn default() -> Self {
        Self {
            url: DEFAULT_FORM_URL.to_string(),
            name_entry: "entry.1806414786".to_string(),
            email_entry: "entry.1577174129".to_string(),
            subject_entry: "entry.162820519".to_string(),
            message_entry: "entry.847912545".to_string(),
        }
    }
}

impl FormEndpoint {
    fn entry_for(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name_entry,
            ContactField::Email => &self.email_entry,
            ContactField::Subject => &self.subject_entry,
            ContactField::Message => &self.message_entry,
        }
    }

    /// Parse the endpoint, requiring an absolute http(s) URL
    pub fn parse(&self) -> Result<Url, ContactError> {
        let url = Url::parse(&self.url).map_err(|e| ContactError::InvalidEndpoint {
            endpoint: self.url.clone(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ContactError::InvalidEndpoint {
                endpoint: self.url.clone(),
                reason: format!("unsupported scheme '{}'", other),
            }),
        }
    }
}

/// Free-text contents of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Build the submission URL. Field contents are not validated; every
    /// field is sent, empty or not. Spaces become `%20`, never `+`.
    pub fn submission_url(&self, endpoint: &FormEndpoint) -> Result<String, ContactError> {
        let mut url = endpoint.parse()?;
        url.set_fragment(None);

        let mut pairs: Vec<String> = url
            .query()
            .filter(|query| !query.is_empty())
            .map(str::to_string)
            .into_iter()
            .collect();
        url.set_query(None);

        for field in ContactField::ALL {
            pairs.push(format!(
                "{}={}",
                utf8_percent_encode(endpoint.entry_for(field), QUERY_COMPONENT),
                utf8_percent_encode(self.field(field), QUERY_COMPONENT)
            ));
        }

        Ok(format!("{}?{}", url, pairs.join("&")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> ContactForm {
        ContactForm {
            name: "Ana Lima".to_string(),
            email: "ana@example.org".to_string(),
            subject: "research".to_string(),
            message: "Hello & welcome?".to_string(),
        }
    }

    #[test]
    fn test_submission_url_encodes_fields_in_order() {
        let url = Url::parse(&sample_form().submission_url(&FormEndpoint::default()).unwrap()).unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("entry.1806414786".to_string(), "Ana Lima".to_string()),
                ("entry.1577174129".to_string(), "ana@example.org".to_string()),
                ("entry.162820519".to_string(), "research".to_string()),
                ("entry.847912545".to_string(), "Hello & welcome?".to_string()),
            ]
        );
        assert!(url.as_str().starts_with(DEFAULT_FORM_URL));
        assert!(!url.as_str().contains("Hello & welcome"));
    }

    #[test]
    fn test_empty_fields_still_submitted() {
        let url = ContactForm::default()
            .submission_url(&FormEndpoint::default())
            .unwrap();
        assert_eq!(Url::parse(&url).unwrap().query_pairs().count(), 4);
    }

    #[test]
    fn test_submission_url_uses_component_encoding() {
        let form = ContactForm {
            name: "Ana Lima".to_string(),
            email: "ana+lab@example.org".to_string(),
            subject: String::new(),
            message: "it's (ok)! ~*_.-".to_string(),
        };
        let url = form.submission_url(&FormEndpoint::default()).unwrap();

        assert_eq!(
            url,
            format!(
                "{}?entry.1806414786=Ana%20Lima&entry.1577174129=ana%2Blab%40example.org\
                 &entry.162820519=&entry.847912545=it's%20(ok)!%20~*_.-",
                DEFAULT_FORM_URL
            )
        );
    }

    #[test]
    fn test_submission_url_keeps_endpoint_query() {
        let endpoint = FormEndpoint {
            url: format!("{}?usp=pp_url#top", DEFAULT_FORM_URL),
            ..FormEndpoint::default()
        };
        let url = sample_form().submission_url(&endpoint).unwrap();
        assert!(url.starts_with(&format!("{}?usp=pp_url&entry.1806414786=Ana%20Lima", DEFAULT_FORM_URL)));
        assert!(!url.contains('#'));
    }

    #[test]
    fn test_invalid_endpoint() {
        let endpoint = FormEndpoint {
            url: "not a url".to_string(),
            ..FormEndpoint::default()
        };
        assert!(matches!(
            sample_form().submission_url(&endpoint),
            Err(ContactError::InvalidEndpoint { .. })
        ));

        let endpoint = FormEndpoint {
            url: "ftp://example.org/form".to_string(),
            ..FormEndpoint::default()
        };
        assert!(endpoint.parse().is_err());
    }

    #[test]
    fn test_field_access() {
        let mut form = ContactForm::default();
        form.field_mut(ContactField::Email).push_str("a@b.c");
        assert_eq!(form.field(ContactField::Email), "a@b.c");
        assert_eq!(form.email, "a@b.c");
    }
}
