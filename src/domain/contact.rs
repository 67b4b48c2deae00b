//! Contact form model and its validation rules.

use std::{collections::BTreeMap, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 10;
const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Company,
    Email,
    Phone,
    Origin,
    Destination,
    Vins,
    PreferredDate,
    Message,
}

impl ContactField {
    pub fn id(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Company => "company",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Origin => "origin",
            ContactField::Destination => "destination",
            ContactField::Vins => "vins",
            ContactField::PreferredDate => "preferredDate",
            ContactField::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub origin: String,
    pub destination: String,
    /// Free text, one VIN per line.
    pub vins: String,
    pub preferred_date: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Company => &self.company,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Origin => &self.origin,
            ContactField::Destination => &self.destination,
            ContactField::Vins => &self.vins,
            ContactField::PreferredDate => &self.preferred_date,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Company => &mut self.company,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Origin => &mut self.origin,
            ContactField::Destination => &mut self.destination,
            ContactField::Vins => &mut self.vins,
            ContactField::PreferredDate => &mut self.preferred_date,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn validate(&self) -> Result<ValidContact, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.chars().count() < MIN_NAME_CHARS {
            errors.insert(ContactField::Name, "Name must be at least 2 characters");
        }
        if !is_valid_email(&self.email) {
            errors.insert(ContactField::Email, "Please enter a valid email");
        }
        if self.phone.chars().count() < MIN_PHONE_CHARS {
            errors.insert(ContactField::Phone, "Please enter a valid phone number");
        }
        if self.message.chars().count() < MIN_MESSAGE_CHARS {
            errors.insert(
                ContactField::Message,
                "Message must be at least 10 characters",
            );
        }

        if errors.is_empty() {
            Ok(ValidContact(self.clone()))
        } else {
            Err(errors)
        }
    }
}

/// A submission that passed [`ContactSubmission::validate`].
#[derive(Clone, Debug, PartialEq)]
pub struct ValidContact(ContactSubmission);

impl ValidContact {
    pub fn submission(&self) -> &ContactSubmission {
        &self.0
    }

    pub fn vins(&self) -> Vec<&str> {
        self.0
            .vins
            .lines()
            .map(str::trim)
            .filter(|vin| !vin.is_empty())
            .collect()
    }
}

/// Validation messages keyed by the field they belong to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    entries: BTreeMap<ContactField, &'static str>,
}

impl FieldErrors {
    fn insert(&mut self, field: ContactField, message: &'static str) {
        self.entries.insert(field, message);
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.entries.get(&field).copied()
    }

    /// Drops the message for `field`, typically because the user edited it.
    pub fn clear(&mut self, field: ContactField) {
        self.entries.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.entries.keys().copied()
    }
}

/// Address shape: local part ending in `[A-Z0-9_+-]`, hyphenated domain
/// labels and a 2+ letter TLD, ASCII case-insensitive.
const EMAIL_PATTERN: &str =
    r"(?i-u)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$";

static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn email_regex() -> Option<&'static Regex> {
    EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
}

/// `regex` has no lookahead, so the leading-dot and double-dot rules are
/// checked before the pattern.
pub fn is_valid_email(input: &str) -> bool {
    !input.starts_with('.')
        && !input.contains("..")
        && email_regex().is_some_and(|regex| regex.is_match(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ContactSubmission {
        ContactSubmission {
            name: "John Smith".into(),
            email: "john@x.com".into(),
            phone: "5551234567".into(),
            message: "Need a quote for 2 cars".into(),
            ..ContactSubmission::default()
        }
    }

    #[test]
    fn complete_submission_validates() {
        let valid = complete().validate().expect("should validate");
        assert_eq!(valid.submission().name, "John Smith");
        assert!(valid.vins().is_empty());
    }

    #[test]
    fn short_fields_report_every_violation() {
        let submission = ContactSubmission {
            name: "Al".into(),
            email: "bad".into(),
            phone: "123".into(),
            message: "hi".into(),
            ..ContactSubmission::default()
        };

        let errors = submission.validate().unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![ContactField::Email, ContactField::Phone, ContactField::Message]
        );
        assert_eq!(errors.get(ContactField::Name), None);
        assert_eq!(errors.get(ContactField::Email), Some("Please enter a valid email"));
        assert_eq!(
            errors.get(ContactField::Message),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn name_length_alone_decides_name_error() {
        for (name, expect_error) in [("", true), ("J", true), ("Jo", false), ("Jöe", false)] {
            let mut submission = ContactSubmission {
                name: name.into(),
                ..ContactSubmission::default()
            };
            let errors = submission.validate().unwrap_err();
            assert_eq!(errors.get(ContactField::Name).is_some(), expect_error, "{name}");

            submission = ContactSubmission {
                name: name.into(),
                ..complete()
            };
            assert_eq!(submission.validate().is_err(), expect_error, "{name}");
        }
    }

    #[test]
    fn email_shapes() {
        for good in [
            "a@b.com",
            "first.last+tag@mail.example.ca",
            "o'neil@dealer-net.us",
            "Dispatch_24@TYRASGROUP.COM",
            "a-@b.co",
        ] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in [
            "bad",
            "",
            "@b.com",
            "a@",
            "a@b",
            "a@b.c",
            "a@.com",
            ".a@b.com",
            "a.@b.com",
            "a..b@b.com",
            "a b@b.com",
            "a@b.c0m",
            "a@-b.com",
            "a'@b.com",
            "a@b..com",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn email_pattern_compiles() {
        assert!(email_regex().is_some());
    }

    #[test]
    fn phone_counts_characters_only() {
        let submission = ContactSubmission {
            phone: "(555) 1234".into(),
            ..complete()
        };
        assert!(submission.validate().is_ok());

        let submission = ContactSubmission {
            phone: "555-1234".into(),
            ..complete()
        };
        let errors = submission.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(ContactField::Phone).is_some());
    }

    #[test]
    fn optional_fields_are_unconstrained() {
        let submission = ContactSubmission {
            company: "x".into(),
            origin: "?".into(),
            destination: "".into(),
            preferred_date: "whenever".into(),
            vins: "  1HGCM82633A004352 \n\n2T1BURHE0JC012345\n".into(),
            ..complete()
        };
        let valid = submission.validate().expect("optional fields are free-form");
        assert_eq!(valid.vins(), vec!["1HGCM82633A004352", "2T1BURHE0JC012345"]);
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut errors = ContactSubmission::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        errors.clear(ContactField::Email);
        assert_eq!(errors.get(ContactField::Email), None);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn setters_round_through_field_ids() {
        let mut submission = ContactSubmission::default();
        submission.set(ContactField::Vins, "VIN".into());
        submission.set(ContactField::PreferredDate, "2030-01-01".into());
        assert_eq!(submission.value(ContactField::Vins), "VIN");
        assert_eq!(submission.value(ContactField::PreferredDate), "2030-01-01");
        assert_eq!(ContactField::PreferredDate.id(), "preferredDate");
    }
}
