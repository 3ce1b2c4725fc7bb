//! Compiled field rules
//!
//! `ProfileRules` is the compiled form of [`ProfileSelectors`]: one ordered
//! list of patterns per lookup, evaluated by the `Document` helpers until one
//! of them matches.
//!
//! A pattern written as an exact composite class match, `[class="a b"]` or
//! `tag[class="a b"]`, compares the element's class tokens with `a b` in
//! order. Extra whitespace inside the attribute does not matter; an extra or
//! missing token does.

#![allow(clippy::uninlined_format_args)]

use scraper::{ElementRef, Selector};
use tracing::warn;

use super::config::ProfileSelectors;
use super::{ParsingError, ParsingResult};

/// One compiled lookup pattern
#[derive(Debug)]
pub struct FieldPattern {
    selector: Selector,
    class_list: Option<Vec<String>>,
}

impl FieldPattern {
    pub fn parse(pattern: &str) -> Result<Self, String> {
        if let Some((prefix, tokens)) = split_class_list(pattern) {
            let candidates = format!(r#"{}[class~="{}"]"#, prefix, tokens[0]);
            let selector = Selector::parse(&candidates).map_err(|e| e.to_string())?;
            return Ok(Self {
                selector,
                class_list: Some(tokens),
            });
        }

        let selector = Selector::parse(pattern).map_err(|e| e.to_string())?;
        Ok(Self {
            selector,
            class_list: None,
        })
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Whether a selector match also satisfies the class token list
    pub fn accepts(&self, element: ElementRef<'_>) -> bool {
        let Some(expected) = &self.class_list else {
            return true;
        };
        let actual = element.value().attr("class").unwrap_or_default();
        actual.split_whitespace().eq(expected.iter().map(String::as_str))
    }
}

/// `prefix[class="a b ..."]` with at least two tokens, split into its parts
fn split_class_list(pattern: &str) -> Option<(&str, Vec<String>)> {
    let body = pattern.trim().strip_suffix("\"]")?;
    let (prefix, value) = body.rsplit_once("[class=\"")?;
    if prefix.contains(['[', ']', ',', ' ']) || value.contains('"') {
        return None;
    }
    let tokens: Vec<String> = value.split_whitespace().map(ToString::to_string).collect();
    (tokens.len() > 1).then_some((prefix, tokens))
}

/// Compiled selector table shared by every extractor built from it
#[derive(Debug)]
pub struct ProfileRules {
    pub(crate) name: Vec<FieldPattern>,
    pub(crate) skills: Vec<FieldPattern>,
    pub(crate) skill_see_more: Vec<FieldPattern>,
    pub(crate) skill_skip_classes: Vec<String>,
    pub(crate) canonical_link: Vec<FieldPattern>,
    pub(crate) username_marker: String,
    pub(crate) location: Vec<FieldPattern>,
    pub(crate) current_position: Vec<FieldPattern>,
    pub(crate) current_position_org: Vec<FieldPattern>,
    pub(crate) headline: Vec<FieldPattern>,
    pub(crate) experience: Vec<FieldPattern>,
    pub(crate) company_subtitle: Vec<FieldPattern>,
    pub(crate) connections: Vec<FieldPattern>,
    pub(crate) bio: Vec<FieldPattern>,
    pub(crate) bio_stop_fragment: String,
    pub(crate) media_subheadline: Vec<FieldPattern>,
    pub(crate) accomplishments: Vec<FieldPattern>,
    pub(crate) accomplishment_title: Vec<FieldPattern>,
    pub(crate) accomplishment_item: Vec<FieldPattern>,
}

impl ProfileRules {
    /// Compile the default selector table
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&ProfileSelectors::default())
    }

    /// Compile a custom selector table
    pub fn with_config(selectors: &ProfileSelectors) -> ParsingResult<Self> {
        if selectors.username_marker.is_empty() {
            return Err(ParsingError::configuration_error(
                "username_marker",
                "username marker must not be empty",
            ));
        }

        Ok(Self {
            name: Self::compile_selectors("name", &selectors.name)?,
            skills: Self::compile_selectors("skills", &selectors.skills)?,
            skill_see_more: Self::compile_selectors("skill_see_more", &selectors.skill_see_more)?,
            skill_skip_classes: selectors.skill_skip_classes.clone(),
            canonical_link: Self::compile_selectors("canonical_link", &selectors.canonical_link)?,
            username_marker: selectors.username_marker.clone(),
            location: Self::compile_selectors("location", &selectors.location)?,
            current_position: Self::compile_selectors(
                "current_position",
                &selectors.current_position,
            )?,
            current_position_org: Self::compile_selectors(
                "current_position_org",
                &selectors.current_position_org,
            )?,
            headline: Self::compile_selectors("headline", &selectors.headline)?,
            experience: Self::compile_selectors("experience", &selectors.experience)?,
            company_subtitle: Self::compile_selectors(
                "company_subtitle",
                &selectors.company_subtitle,
            )?,
            connections: Self::compile_selectors("connections", &selectors.connections)?,
            bio: Self::compile_selectors("bio", &selectors.bio)?,
            bio_stop_fragment: selectors.bio_stop_fragment.clone(),
            media_subheadline: Self::compile_selectors(
                "media_subheadline",
                &selectors.media_subheadline,
            )?,
            accomplishments: Self::compile_selectors(
                "accomplishments",
                &selectors.accomplishments,
            )?,
            accomplishment_title: Self::compile_selectors(
                "accomplishment_title",
                &selectors.accomplishment_title,
            )?,
            accomplishment_item: Self::compile_selectors(
                "accomplishment_item",
                &selectors.accomplishment_item,
            )?,
        })
    }

    /// Compile selector strings into patterns.
    ///
    /// Entries that fail to parse are skipped with a warning; the list is
    /// rejected when it is empty or none of its entries compile.
    fn compile_selectors(field: &str, selector_strings: &[String]) -> ParsingResult<Vec<FieldPattern>> {
        if selector_strings.is_empty() {
            return Err(ParsingError::configuration_error(field, "selector list is empty"));
        }

        let mut selectors = Vec::new();
        let mut errors = Vec::new();

        for selector_str in selector_strings {
            match FieldPattern::parse(selector_str) {
                Ok(selector) => selectors.push(selector),
                Err(e) => {
                    warn!("Failed to compile {} selector '{}': {}", field, selector_str, e);
                    errors.push(format!("'{}': {}", selector_str, e));
                }
            }
        }

        if selectors.is_empty() {
            return Err(ParsingError::invalid_selector(
                field,
                &format!(
                    "No valid selectors compiled from {} attempts. Errors: {}",
                    selector_strings.len(),
                    errors.join(", ")
                ),
                selector_strings.to_vec(),
            ));
        }

        Ok(selectors)
    }
}
