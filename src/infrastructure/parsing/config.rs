//! Selector tables for profile extraction
//!
//! Every field owns an ordered list of CSS selectors. The first entry is the
//! primary markup layout; later entries are fallbacks tried only when the
//! earlier ones match nothing.

use serde::{Deserialize, Serialize};

/// CSS selectors for every profile field, in fallback order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSelectors {
    /// Full name: composite top-card class, then the `name` id
    pub name: Vec<String>,

    /// Skill entries: skill-entity class, then the plain `skill` class
    pub skills: Vec<String>,
    /// Nested element marking a skill candidate as an expand button
    pub skill_see_more: Vec<String>,
    /// Class tokens that disqualify a skill candidate
    pub skill_skip_classes: Vec<String>,

    /// Canonical link carrying the profile URL
    pub canonical_link: Vec<String>,
    /// Path segment preceding the username in the canonical URL
    pub username_marker: String,

    pub location: Vec<String>,

    /// Explicit current position section and the organization inside it
    pub current_position: Vec<String>,
    pub current_position_org: Vec<String>,
    /// Generic headline used when no position is listed
    pub headline: Vec<String>,

    /// Experience container and the company subtitles within it
    pub experience: Vec<String>,
    pub company_subtitle: Vec<String>,

    pub connections: Vec<String>,

    pub bio: Vec<String>,
    /// Fragment at which bio concatenation stops
    pub bio_stop_fragment: String,

    pub media_subheadline: Vec<String>,

    /// Accomplishments container, title blocks and list items
    pub accomplishments: Vec<String>,
    pub accomplishment_title: Vec<String>,
    pub accomplishment_item: Vec<String>,
}

impl Default for ProfileSelectors {
    fn default() -> Self {
        Self {
            name: vec![
                r#"[class="pv-top-card-section__name Sans-26px-black-85%"]"#.to_string(),
                "#name".to_string(),
            ],
            skills: vec![
                ".pv-skill-entity__skill-name".to_string(),
                ".skill".to_string(),
            ],
            skill_see_more: vec![r#"[class="skill see-more"]"#.to_string()],
            skill_skip_classes: vec!["see-more".to_string(), "see-less".to_string()],
            canonical_link: vec![r#"link[rel~="canonical"][href]"#.to_string()],
            username_marker: "/in/".to_string(),
            location: vec![".locality".to_string()],
            current_position: vec![r#"[data-section="currentPositionsDetails"]"#.to_string()],
            current_position_org: vec![".org".to_string()],
            headline: vec![r#"[class="headline title"]"#.to_string()],
            experience: vec![".positions".to_string()],
            company_subtitle: vec![".item-subtitle".to_string()],
            connections: vec![".member-connections".to_string()],
            bio: vec![
                r#"[class="pv-top-card-section__summary Sans-15px-black-70% mt5 pt5 ember-view"]"#
                    .to_string(),
            ],
            bio_stop_fragment: "See more".to_string(),
            media_subheadline: vec![".pv-treasury-carousel__subheadline".to_string()],
            accomplishments: vec![
                r#"[class="pv-profile-section artdeco-container-card pv-accomplishments-section ember-view"]"#
                    .to_string(),
                r#"[class="pv-profile-section pv-accomplishments-section artdeco-container-card ember-view"]"#
                    .to_string(),
            ],
            accomplishment_title: vec![".pv-accomplishments-block__title".to_string()],
            accomplishment_item: vec![".pv-accomplishments-block__summary-list-item".to_string()],
        }
    }
}

impl ProfileSelectors {
    /// Every selector list with the name it is configured under
    pub fn selector_lists(&self) -> [(&'static str, &[String]); 16] {
        [
            ("name", self.name.as_slice()),
            ("skills", self.skills.as_slice()),
            ("skill_see_more", self.skill_see_more.as_slice()),
            ("canonical_link", self.canonical_link.as_slice()),
            ("location", self.location.as_slice()),
            ("current_position", self.current_position.as_slice()),
            ("current_position_org", self.current_position_org.as_slice()),
            ("headline", self.headline.as_slice()),
            ("experience", self.experience.as_slice()),
            ("company_subtitle", self.company_subtitle.as_slice()),
            ("connections", self.connections.as_slice()),
            ("bio", self.bio.as_slice()),
            ("media_subheadline", self.media_subheadline.as_slice()),
            ("accomplishments", self.accomplishments.as_slice()),
            ("accomplishment_title", self.accomplishment_title.as_slice()),
            ("accomplishment_item", self.accomplishment_item.as_slice()),
        ]
    }
}
