use std::path::PathBuf;

/// One address or an ordered list of them
///
/// Either form collapses into a single `To` field, so `"a@x.com"` and
/// `vec!["a@x.com"]` produce the same header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipients {
    Single(String),
    Many(Vec<String>),
}

impl Recipients {
    /// `", "`-joined `To` value; blank entries are dropped
    pub fn to_field(&self) -> String {
        match self {
            Self::Single(address) => address.trim().to_string(),
            Self::Many(addresses) => addresses
                .iter()
                .map(|a| a.trim())
                .filter(|a| !a.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(address) => address.trim().is_empty(),
            Self::Many(addresses) => addresses.iter().all(|a| a.trim().is_empty()),
        }
    }
}

impl From<&str> for Recipients {
    fn from(address: &str) -> Self {
        Self::Single(address.to_string())
    }
}

impl From<String> for Recipients {
    fn from(address: String) -> Self {
        Self::Single(address)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(addresses: Vec<String>) -> Self {
        Self::Many(addresses)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(addresses: Vec<&str>) -> Self {
        Self::Many(addresses.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Recipients {
    fn from(addresses: &[&str]) -> Self {
        Self::Many(addresses.iter().map(|a| a.to_string()).collect())
    }
}

/// A message built for a single send
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub recipients: Recipients,
    pub subject: String,
    /// HTML body
    pub body: String,
    pub attachment: Option<PathBuf>,
}

impl OutgoingEmail {
    pub fn new(
        recipients: impl Into<Recipients>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipients: recipients.into(),
            subject: subject.into(),
            body: body.into(),
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, path: impl Into<PathBuf>) -> Self {
        self.attachment = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_one_element_list_match() {
        let single = Recipients::from("ops@example.com");
        let many = Recipients::from(vec!["ops@example.com"]);
        assert_eq!(single.to_field(), many.to_field());
    }

    #[test]
    fn test_many_joined_in_order() {
        let recipients = Recipients::from(vec!["a@example.com", " b@example.com"]);
        assert_eq!(recipients.to_field(), "a@example.com, b@example.com");
    }

    #[test]
    fn test_blank_entries_are_dropped() {
        let recipients = Recipients::from(vec!["ops@example.com", "", "  "]);
        assert_eq!(recipients.to_field(), "ops@example.com");
        assert!(!recipients.is_empty());
    }

    #[test]
    fn test_empty_recipients() {
        assert!(Recipients::from("  ").is_empty());
        assert!(Recipients::from(Vec::<String>::new()).is_empty());
        assert!(!Recipients::from("a@example.com").is_empty());
    }

    #[test]
    fn test_outgoing_email_builder() {
        let email = OutgoingEmail::new("a@example.com", "Subject", "<p>Hi</p>")
            .with_attachment("/tmp/report.csv");
        assert_eq!(email.attachment, Some(PathBuf::from("/tmp/report.csv")));
        assert_eq!(email.body, "<p>Hi</p>");
    }
}
