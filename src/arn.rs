//! Splitting ARNs into their six sections.
//!
//! `arn:partition:service:region:account-id:resource` - the resource section
//! keeps any further `:` characters.

use std::fmt;

use crate::error::ParseError;

pub const ARN_PREFIX: &str = "arn:";
pub const ARN_DELIMITER: char = ':';
pub const ARN_SECTIONS: usize = 6;

/// Position of a section within an ARN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Prefix,
    Partition,
    Service,
    Region,
    AccountId,
    Resource,
}

impl Section {
    pub const ALL: [Section; ARN_SECTIONS] = [
        Section::Prefix,
        Section::Partition,
        Section::Service,
        Section::Region,
        Section::AccountId,
        Section::Resource,
    ];

    /// Zero-based index of the section.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Section::Prefix => "prefix",
            Section::Partition => "partition",
            Section::Service => "service",
            Section::Region => "region",
            Section::AccountId => "account-id",
            Section::Resource => "resource",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ARN split into sections, borrowing from the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arn<'a> {
    sections: [&'a str; ARN_SECTIONS],
}

impl<'a> Arn<'a> {
    /// Always `"arn"` for a parsed value.
    pub fn prefix(&self) -> &'a str {
        self.sections[Section::Prefix.index()]
    }

    pub fn partition(&self) -> &'a str {
        self.sections[Section::Partition.index()]
    }

    pub fn service(&self) -> &'a str {
        self.sections[Section::Service.index()]
    }

    pub fn region(&self) -> &'a str {
        self.sections[Section::Region.index()]
    }

    pub fn account_id(&self) -> &'a str {
        self.sections[Section::AccountId.index()]
    }

    pub fn resource(&self) -> &'a str {
        self.sections[Section::Resource.index()]
    }

    pub fn section(&self, section: Section) -> &'a str {
        self.sections[section.index()]
    }

    pub fn sections(&self) -> &[&'a str; ARN_SECTIONS] {
        &self.sections
    }
}

impl fmt::Display for Arn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", ARN_DELIMITER)?;
            }
            f.write_str(section)?;
        }
        Ok(())
    }
}

/// Split `input` into six sections.
///
/// Splitting stops after the fifth delimiter, so the resource section may
/// itself contain `:`. Section contents are not validated.
pub fn parse(input: &str) -> Result<Arn<'_>, ParseError> {
    if !input.starts_with(ARN_PREFIX) {
        return Err(ParseError::InvalidPrefix);
    }

    let mut sections = [""; ARN_SECTIONS];
    let mut count = 0;
    for part in input.splitn(ARN_SECTIONS, ARN_DELIMITER) {
        sections[count] = part;
        count += 1;
    }
    if count != ARN_SECTIONS {
        return Err(ParseError::InvalidSectionCount(count));
    }

    Ok(Arn { sections })
}
