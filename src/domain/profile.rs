//! Profile domain entities
//!
//! Typed values produced from a profile snapshot: field identifiers,
//! accomplishment kinds, the media count quirk and the aggregate summary.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Value returned by the disabled certification accessor.
pub const CERTIFICATION_SENTINEL: u32 = 0;

/// Identifier for every field a profile snapshot can yield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Skills,
    Username,
    Location,
    CurrentCompany,
    AllCompanies,
    ConnectionCount,
    Bio,
    MediaNumber,
    Languages,
    Courses,
    Awards,
    Organizations,
    Projects,
    Certification,
}

impl ProfileField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Skills => "skills",
            Self::Username => "username",
            Self::Location => "location",
            Self::CurrentCompany => "current_company",
            Self::AllCompanies => "all_companies",
            Self::ConnectionCount => "connection_count",
            Self::Bio => "bio",
            Self::MediaNumber => "media_number",
            Self::Languages => "languages",
            Self::Courses => "courses",
            Self::Awards => "awards",
            Self::Organizations => "organizations",
            Self::Projects => "projects",
            Self::Certification => "certification",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-lists found under labeled title blocks of the accomplishments section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccomplishmentKind {
    Languages,
    Courses,
    Awards,
    Organizations,
    Projects,
}

impl AccomplishmentKind {
    /// Title block texts that introduce this sub-list
    pub const fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Languages => &["Language", "Languages"],
            Self::Courses => &["Courses", "Course"],
            Self::Awards => &["Honors & Awards", "Award"],
            Self::Organizations => &["Organizations", "Organization"],
            Self::Projects => &["Project", "Projects"],
        }
    }

    pub fn matches_title(self, title: &str) -> bool {
        self.labels().contains(&title)
    }

    pub const fn field(self) -> ProfileField {
        match self {
            Self::Languages => ProfileField::Languages,
            Self::Courses => ProfileField::Courses,
            Self::Awards => ProfileField::Awards,
            Self::Organizations => ProfileField::Organizations,
            Self::Projects => ProfileField::Projects,
        }
    }
}

/// Media item count read from the media carousel subheadline.
///
/// A missing subheadline is reported as `Empty`, which displays and
/// serializes as an empty string rather than a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaCount {
    #[default]
    Empty,
    Count(u64),
}

impl fmt::Display for MediaCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Count(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for MediaCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_str(""),
            Self::Count(n) => serializer.serialize_u64(*n),
        }
    }
}

/// Every extractable field of one profile snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    /// `None` when the snapshot has no canonical link or it is malformed
    pub username: Option<String>,
    pub location: Option<String>,
    pub current_company: Option<String>,
    pub all_companies: Vec<String>,
    pub skills: Vec<String>,
    pub connection_count: Option<u64>,
    pub bio: String,
    pub media_number: MediaCount,
    /// Accomplishment lists are `None` when the accomplishments section is missing
    pub languages: Option<Vec<String>>,
    pub courses: Option<Vec<String>>,
    pub awards: Option<Vec<String>>,
    pub organizations: Option<Vec<String>>,
    pub projects: Option<Vec<String>>,
    pub certification: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_count_renders_empty_as_blank() {
        assert_eq!(MediaCount::Empty.to_string(), "");
        assert_eq!(MediaCount::Count(12).to_string(), "12");
        assert_eq!(serde_json::to_string(&MediaCount::Empty).unwrap(), "\"\"");
        assert_eq!(serde_json::to_string(&MediaCount::Count(7)).unwrap(), "7");
    }

    #[test]
    fn test_accomplishment_labels() {
        assert!(AccomplishmentKind::Languages.matches_title("Language"));
        assert!(AccomplishmentKind::Languages.matches_title("Languages"));
        assert!(!AccomplishmentKind::Languages.matches_title("languages"));
        assert!(AccomplishmentKind::Awards.matches_title("Honors & Awards"));
        assert!(!AccomplishmentKind::Awards.matches_title("Awards"));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(ProfileField::AllCompanies.to_string(), "all_companies");
        assert_eq!(ProfileField::Languages.as_str(), "languages");
    }
}
