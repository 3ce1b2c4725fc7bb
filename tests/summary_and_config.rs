//! Whole-profile summaries and configurable selector tables
use std::sync::Arc;

use profile_parser::infrastructure::{AppConfig, ProfileSelectors};
use profile_parser::{MediaCount, ParsingError, ProfileExtractor, ProfileRules};
use proptest::prelude::*;

const FULL_PROFILE: &str = r#"<html><head>
<link rel="canonical" href="https://www.linkedin.com/in/jane-doe/">
</head><body>
<h1 class="pv-top-card-section__name Sans-26px-black-85%">Jane Doe</h1>
<h2 class="headline title">Staff Engineer</h2>
<span class="locality">Trondheim</span>
<div class="member-connections"><span>500+</span></div>
<p class="pv-top-card-section__summary Sans-15px-black-70% mt5 pt5 ember-view">Builds compilers.</p>
<h3 class="pv-treasury-carousel__subheadline">4 media</h3>
<ul class="positions">
  <li><h4 class="item-subtitle">Acme</h4></li>
  <li><h4 class="item-subtitle">Globex</h4></li>
</ul>
<ul><li class="pv-skill-entity__skill-name">Rust</li></ul>
</body></html>"#;

#[test]
fn summary_collects_every_field() {
    let profile = ProfileExtractor::new(FULL_PROFILE).unwrap();
    let summary = profile.summary().unwrap();

    assert_eq!(summary.name, "Jane Doe");
    assert_eq!(summary.username.as_deref(), Some("jane-doe/"));
    assert_eq!(summary.location.as_deref(), Some("Trondheim"));
    assert_eq!(summary.current_company.as_deref(), Some("Acme"));
    assert_eq!(summary.all_companies, vec!["Acme", "Globex"]);
    assert_eq!(summary.skills, vec!["rust"]);
    assert_eq!(summary.connection_count, Some(500));
    assert_eq!(summary.bio, "Builds compilers.");
    assert_eq!(summary.media_number, MediaCount::Count(4));
    // no accomplishments section on this page
    assert_eq!(summary.languages, None);
    assert_eq!(summary.projects, None);
    assert_eq!(summary.certification, 0);
}

#[test]
fn summary_serializes_to_json() {
    let profile = ProfileExtractor::new(FULL_PROFILE).unwrap();
    let json = serde_json::to_value(profile.summary().unwrap()).unwrap();
    assert_eq!(json["name"], "Jane Doe");
    assert_eq!(json["connection_count"], 500);
    assert_eq!(json["languages"], serde_json::Value::Null);
}

#[test]
fn summary_requires_a_name() {
    let profile = ProfileExtractor::new("<html><body><span class=\"locality\">Oslo</span></body></html>").unwrap();
    assert!(matches!(
        profile.summary(),
        Err(ParsingError::RequiredFieldMissing { .. })
    ));
}

#[test]
fn custom_selectors_replace_defaults() {
    let selectors = ProfileSelectors {
        location: vec![".geo".to_string(), ".locality".to_string()],
        ..ProfileSelectors::default()
    };
    let rules = Arc::new(ProfileRules::with_config(&selectors).unwrap());

    let profile = ProfileExtractor::with_rules(
        r#"<span class="locality">Fallback</span><span class="geo">Bergen</span>"#,
        Arc::clone(&rules),
    );
    assert_eq!(profile.location(), Some("Bergen"));

    let profile = ProfileExtractor::with_rules(r#"<span class="locality">Fallback</span>"#, rules);
    assert_eq!(profile.location(), Some("Fallback"));
}

#[test]
fn invalid_selector_table_is_rejected() {
    let selectors = ProfileSelectors {
        name: vec!["h1[".to_string()],
        ..ProfileSelectors::default()
    };
    assert!(matches!(
        ProfileRules::with_config(&selectors),
        Err(ParsingError::InvalidSelector { .. })
    ));
}

#[test]
fn selector_tables_round_trip_through_config() {
    let mut config = AppConfig::default();
    config.selectors.skills = vec![".endorsed-skill".to_string()];

    let json = serde_json::to_string(&config).unwrap();
    let restored: AppConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, config);
    assert!(restored.validate().is_ok());
}

proptest! {
    #[test]
    fn media_number_reads_digits_in_order(text in "[a-z ,.]{0,4}[0-9]{1,6}[a-z ,.]{0,4}[0-9]{0,6}") {
        let html = format!(r#"<h3 class="pv-treasury-carousel__subheadline">{text}</h3>"#);
        let profile = ProfileExtractor::new(&html).unwrap();

        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let expected: u64 = digits.parse().unwrap();
        prop_assert_eq!(profile.media_number(), MediaCount::Count(expected));
    }
}
