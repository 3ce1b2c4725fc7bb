//! Accomplishments section extraction
use profile_parser::{AccomplishmentKind, ParsingError, ProfileExtractor, ProfileField};
use rstest::rstest;

const ACCOMPLISHMENTS: &str = r#"<html><body>
<section class="pv-profile-section artdeco-container-card pv-accomplishments-section ember-view">
  <div class="pv-accomplishments-block">
    <h3 class="pv-accomplishments-block__title">Languages</h3>
    <ul>
      <li class="pv-accomplishments-block__summary-list-item">English</li>
      <li class="pv-accomplishments-block__summary-list-item">Norwegian</li>
    </ul>
  </div>
  <div class="pv-accomplishments-block">
    <h3 class="pv-accomplishments-block__title">Projects</h3>
    <ul>
      <li class="pv-accomplishments-block__summary-list-item">Compiler</li>
      <li class="pv-accomplishments-block__summary-list-item">Web crawler</li>
    </ul>
  </div>
  <div class="pv-accomplishments-block">
    <h3 class="pv-accomplishments-block__title">Language</h3>
    <ul>
      <li class="pv-accomplishments-block__summary-list-item">Latin</li>
    </ul>
  </div>
  <div class="pv-accomplishments-block">
    <h3 class="pv-accomplishments-block__title">Honors &amp; Awards</h3>
    <ul>
      <li class="pv-accomplishments-block__summary-list-item">Best Paper</li>
    </ul>
  </div>
</section>
</body></html>"#;

#[test]
fn languages_come_from_first_matching_block_only() {
    let profile = ProfileExtractor::new(ACCOMPLISHMENTS).unwrap();
    assert_eq!(profile.languages().unwrap(), vec!["English", "Norwegian"]);
}

#[test]
fn projects_do_not_leak_other_blocks() {
    let profile = ProfileExtractor::new(ACCOMPLISHMENTS).unwrap();
    assert_eq!(profile.projects().unwrap(), vec!["Compiler", "Web crawler"]);
}

#[test]
fn awards_match_the_decoded_label() {
    let profile = ProfileExtractor::new(ACCOMPLISHMENTS).unwrap();
    assert_eq!(profile.awards().unwrap(), vec!["Best Paper"]);
}

#[test]
fn unlisted_kind_yields_empty_list() {
    let profile = ProfileExtractor::new(ACCOMPLISHMENTS).unwrap();
    assert!(profile.courses().unwrap().is_empty());
    assert!(profile.organizations().unwrap().is_empty());
}

#[test]
fn alternate_container_spelling_is_recognized() {
    let html = r#"<section class="pv-profile-section pv-accomplishments-section artdeco-container-card ember-view">
        <div><h3 class="pv-accomplishments-block__title">Course</h3>
        <ul><li class="pv-accomplishments-block__summary-list-item">Algorithms</li></ul></div>
    </section>"#;
    let profile = ProfileExtractor::new(html).unwrap();
    assert_eq!(profile.courses().unwrap(), vec!["Algorithms"]);
}

#[test]
fn padded_container_class_is_recognized() {
    let html = r#"<section class="pv-profile-section  artdeco-container-card pv-accomplishments-section ember-view ">
        <div><h3 class="pv-accomplishments-block__title">Organization</h3>
        <ul><li class="pv-accomplishments-block__summary-list-item">IEEE</li></ul></div>
    </section>"#;
    let profile = ProfileExtractor::new(html).unwrap();
    assert_eq!(profile.organizations().unwrap(), vec!["IEEE"]);
}

#[rstest]
#[case(AccomplishmentKind::Languages, ProfileField::Languages)]
#[case(AccomplishmentKind::Courses, ProfileField::Courses)]
#[case(AccomplishmentKind::Awards, ProfileField::Awards)]
#[case(AccomplishmentKind::Organizations, ProfileField::Organizations)]
#[case(AccomplishmentKind::Projects, ProfileField::Projects)]
fn missing_container_propagates_structural_error(
    #[case] kind: AccomplishmentKind,
    #[case] field: ProfileField,
) {
    let profile = ProfileExtractor::new("<html><body><p>no accomplishments</p></body></html>").unwrap();
    match profile.accomplishments(kind) {
        Err(ParsingError::StructureMissing { field: reported, .. }) => assert_eq!(reported, field),
        other => panic!("expected StructureMissing, got {other:?}"),
    }
}

#[test]
fn accomplishment_lists_are_not_memoized() {
    let profile = ProfileExtractor::new(ACCOMPLISHMENTS).unwrap();
    let first = profile.languages().unwrap();
    let walks = profile.document().walk_count();
    let second = profile.languages().unwrap();
    assert_eq!(first, second);
    assert!(profile.document().walk_count() > walks);
}
