//! Profile field extraction
//!
//! `ProfileExtractor` owns one parsed snapshot and answers per-field
//! questions about it. Each accessor looks up its markup through the
//! compiled [`ProfileRules`] table and reduces the matched nodes to a value.
//!
//! Accessors for name, skills, username, location, current company, all
//! companies and connection count are memoized in a [`FieldCache`]. Bio,
//! media number, certification and the accomplishment lists are recomputed
//! on every call.

#![allow(clippy::uninlined_format_args)]

use std::sync::Arc;
use tracing::debug;

use super::cache::{compute_if_absent, try_compute_if_absent, FieldCache};
use super::document::{direct_text, has_any_class, parent_element, text_fragments, Document};
use super::rules::ProfileRules;
use super::sanitize;
use super::{ErrorTier, ParsingError, ParsingResult};
use crate::domain::profile::{
    AccomplishmentKind, CERTIFICATION_SENTINEL, MediaCount, ProfileField, ProfileSummary,
};

/// Typed view over one saved profile page
pub struct ProfileExtractor {
    document: Document,
    rules: Arc<ProfileRules>,
    cache: FieldCache,
}

impl ProfileExtractor {
    /// Parse `html` and prepare extraction with the default selector table
    pub fn new(html: &str) -> ParsingResult<Self> {
        let rules = ProfileRules::new()?;
        Ok(Self::with_rules(html, Arc::new(rules)))
    }

    /// Parse `html` and extract with an already compiled selector table
    pub fn with_rules(html: &str, rules: Arc<ProfileRules>) -> Self {
        debug!("Parsing profile snapshot ({} bytes)", html.len());
        Self {
            document: Document::parse(html),
            rules,
            cache: FieldCache::default(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cache(&self) -> &FieldCache {
        &self.cache
    }

    /// Full name of the profile holder. The only required field.
    pub fn name(&self) -> ParsingResult<&str> {
        try_compute_if_absent(&self.cache.name, ProfileField::Name, || {
            let element = self.document.find(&self.rules.name).ok_or_else(|| {
                ParsingError::required_field_missing(ProfileField::Name, Some("no name pattern matched"))
            })?;
            direct_text(element).map(ToString::to_string).ok_or_else(|| {
                ParsingError::required_field_missing(
                    ProfileField::Name,
                    Some("name element has no direct text"),
                )
            })
        })
        .map(String::as_str)
    }

    /// Skill names, lowercased and trimmed, in document order
    pub fn skills(&self) -> &[String] {
        compute_if_absent::<Vec<String>>(&self.cache.skills, ProfileField::Skills, || {
            self.document
                .find_all(&self.rules.skills)
                .into_iter()
                .filter(|candidate| !self.is_skill_control(*candidate))
                .filter_map(|candidate| {
                    let text = direct_text(candidate);
                    if text.is_none() {
                        debug!("Skipping skill entry without direct text");
                    }
                    text.map(sanitize::clean_skill)
                })
                .collect()
        })
        .as_slice()
    }

    /// Unique profile handle taken from the canonical URL
    pub fn username(&self) -> ParsingResult<&str> {
        try_compute_if_absent(&self.cache.username, ProfileField::Username, || {
            let link = self.document.find(&self.rules.canonical_link).ok_or_else(|| {
                ParsingError::structure_missing(ProfileField::Username, "canonical link")
            })?;
            let href = link.value().attr("href").ok_or_else(|| {
                ParsingError::structure_missing(ProfileField::Username, "canonical link href")
            })?;
            sanitize::after_marker(href, &self.rules.username_marker)
                .map(ToString::to_string)
                .ok_or_else(|| {
                    ParsingError::malformed_input(
                        ProfileField::Username,
                        &format!("canonical URL '{}' has no '{}' segment", href, self.rules.username_marker),
                    )
                })
        })
        .map(String::as_str)
    }

    pub fn location(&self) -> Option<&str> {
        compute_if_absent(&self.cache.location, ProfileField::Location, || {
            self.document
                .find(&self.rules.location)
                .and_then(direct_text)
                .map(ToString::to_string)
        })
        .as_deref()
    }

    /// Current employer.
    ///
    /// Tried in order: the explicit current position section, the first
    /// company of the experience section, the profile headline.
    pub fn current_company(&self) -> Option<&str> {
        compute_if_absent(&self.cache.current_company, ProfileField::CurrentCompany, || {
            if let Some(section) = self.document.find(&self.rules.current_position) {
                let org = self
                    .document
                    .find_in(section, &self.rules.current_position_org)
                    .and_then(direct_text);
                if let Some(org) = org {
                    return Some(org.to_string());
                }
                debug!("Current position section has no organization text");
            }

            if let Some(first) = self.all_companies().first() {
                return Some(first.clone());
            }

            self.document
                .find(&self.rules.headline)
                .and_then(direct_text)
                .map(ToString::to_string)
        })
        .as_deref()
    }

    /// Companies listed in the experience section, in document order
    pub fn all_companies(&self) -> &[String] {
        compute_if_absent::<Vec<String>>(&self.cache.all_companies, ProfileField::AllCompanies, || {
            let Some(experience) = self.document.find(&self.rules.experience) else {
                return Vec::new();
            };
            self.document
                .find_all_in(experience, &self.rules.company_subtitle)
                .into_iter()
                .filter_map(direct_text)
                .map(ToString::to_string)
                .collect()
        })
        .as_slice()
    }

    /// Number of connections; `500+` counts as 500.
    ///
    /// `None` when the connections block is missing, 0 when it carries no count.
    pub fn connection_count(&self) -> Option<u64> {
        *compute_if_absent(&self.cache.connection_count, ProfileField::ConnectionCount, || {
            let container = self.document.find(&self.rules.connections)?;
            Some(
                text_fragments(container)
                    .filter_map(sanitize::connection_value)
                    .last()
                    .unwrap_or(0),
            )
        })
    }

    /// Summary text up to the "See more" toggle, without newlines
    pub fn bio(&self) -> String {
        self.document
            .find(&self.rules.bio)
            .map_or_else(String::new, |summary| {
                let text = sanitize::concat_until(text_fragments(summary), &self.rules.bio_stop_fragment);
                sanitize::strip_newlines(&text)
            })
    }

    /// Digits of the media carousel subheadline read as one number
    pub fn media_number(&self) -> MediaCount {
        self.document
            .find(&self.rules.media_subheadline)
            .and_then(direct_text)
            .map_or(MediaCount::Empty, |text| MediaCount::Count(sanitize::fold_digits(text)))
    }

    pub fn languages(&self) -> ParsingResult<Vec<String>> {
        self.accomplishments(AccomplishmentKind::Languages)
    }

    pub fn courses(&self) -> ParsingResult<Vec<String>> {
        self.accomplishments(AccomplishmentKind::Courses)
    }

    pub fn awards(&self) -> ParsingResult<Vec<String>> {
        self.accomplishments(AccomplishmentKind::Awards)
    }

    pub fn organizations(&self) -> ParsingResult<Vec<String>> {
        self.accomplishments(AccomplishmentKind::Organizations)
    }

    pub fn projects(&self) -> ParsingResult<Vec<String>> {
        self.accomplishments(AccomplishmentKind::Projects)
    }

    /// Certification lookup is disabled; always the sentinel
    pub const fn certification(&self) -> u32 {
        CERTIFICATION_SENTINEL
    }

    /// Items listed under the first title block labeled for `kind`.
    ///
    /// Fails with [`ParsingError::StructureMissing`] when the page has no
    /// accomplishments section at all.
    pub fn accomplishments(&self, kind: AccomplishmentKind) -> ParsingResult<Vec<String>> {
        let container = self.document.find(&self.rules.accomplishments).ok_or_else(|| {
            ParsingError::structure_missing(kind.field(), "accomplishments section")
        })?;

        let titles = self
            .document
            .find_all_in(container, &self.rules.accomplishment_title);
        for title in titles {
            if !direct_text(title).is_some_and(|text| kind.matches_title(text)) {
                continue;
            }
            let Some(block) = parent_element(title) else {
                break;
            };
            return Ok(self
                .document
                .find_all_in(block, &self.rules.accomplishment_item)
                .into_iter()
                .filter_map(direct_text)
                .map(ToString::to_string)
                .collect());
        }

        debug!("No '{}' block in accomplishments section", kind.field());
        Ok(Vec::new())
    }

    /// Every field gathered into one value.
    ///
    /// A missing name fails the summary. A missing canonical link or
    /// accomplishments section only blanks the affected fields.
    pub fn summary(&self) -> ParsingResult<ProfileSummary> {
        Ok(ProfileSummary {
            name: self.name()?.to_string(),
            username: soften(self.username().map(ToString::to_string))?,
            location: self.location().map(ToString::to_string),
            current_company: self.current_company().map(ToString::to_string),
            all_companies: self.all_companies().to_vec(),
            skills: self.skills().to_vec(),
            connection_count: self.connection_count(),
            bio: self.bio(),
            media_number: self.media_number(),
            languages: soften(self.languages())?,
            courses: soften(self.courses())?,
            awards: soften(self.awards())?,
            organizations: soften(self.organizations())?,
            projects: soften(self.projects())?,
            certification: self.certification(),
        })
    }

    /// "See more" / "See less" toggles rendered with the skill classes
    fn is_skill_control(&self, candidate: scraper::ElementRef<'_>) -> bool {
        has_any_class(candidate, &self.rules.skill_skip_classes)
            || self
                .document
                .find_in(candidate, &self.rules.skill_see_more)
                .is_some()
    }
}

/// Turn a structural failure into an absent value
fn soften<T>(result: ParsingResult<T>) -> ParsingResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.tier() == ErrorTier::Structural => {
            debug!("Field left empty in summary: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
