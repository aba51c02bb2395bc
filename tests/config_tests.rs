use purge_config::{ExtractionRule, Extractor, PruneConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn load_and_dispatch_elm_project_config() {
    let temp_dir = tempdir().unwrap();

    let config_path = temp_dir.path().join("purge.json");
    fs::write(
        &config_path,
        r##"{
  "content": ["src/**/*.elm"],
  "css": ["public/dist/style.css"],
  "extractors": [
    { "extensions": ["elm"] }
  ]
}"##,
    )
    .unwrap();

    let config = PruneConfig::from_file(&config_path).unwrap();
    config.validate().unwrap();
    assert_eq!(config, PruneConfig::default());

    // Scan a source file the way the pruning engine would
    let source = r##"
view : Model -> Html Msg
view model =
    div [ class "container mx-auto hover:bg-gray-100" ]
        [ span [ class "text-sm w-1/2" ] [ text model.name ] ]
"##;

    let extractor = config.extractor_for(Path::new("src/View.elm")).unwrap();
    let found = extractor.extract(source);
    for class in ["container", "mx-auto", "hover:bg-gray-100", "text-sm", "w-1/2"] {
        assert!(found.contains(&class), "missing {:?}", class);
    }
}

#[test]
fn yaml_and_json_configs_agree() {
    let temp_dir = tempdir().unwrap();

    let yaml_path = temp_dir.path().join("purge.yml");
    fs::write(
        &yaml_path,
        r##"
content: ["web/**/*.elm", "web/**/*.html"]
css: ["dist/site.css"]
extractors:
  - extensions: ["elm"]
  - pattern: "[A-Za-z-]+"
    extensions: ["html"]
"##,
    )
    .unwrap();

    let json_path = temp_dir.path().join("purge.json");
    fs::write(
        &json_path,
        r##"{
  "content": ["web/**/*.elm", "web/**/*.html"],
  "css": ["dist/site.css"],
  "extractors": [
    { "extensions": ["elm"] },
    { "pattern": "[A-Za-z-]+", "extensions": ["html"] }
  ]
}"##,
    )
    .unwrap();

    let from_yaml = PruneConfig::from_file(&yaml_path).unwrap();
    let from_json = PruneConfig::from_file(&json_path).unwrap();
    assert_eq!(from_yaml, from_json);
}

#[test]
fn missing_config_file_reports_path() {
    let err = PruneConfig::from_file(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn merge_prefers_incoming_extractors() {
    let temp_dir = tempdir().unwrap();

    let override_path = temp_dir.path().join("override.yaml");
    fs::write(
        &override_path,
        r##"
content: ["review/**/*.elm"]
css: []
extractors:
  - pattern: "[a-z-]+"
    extensions: ["elm"]
"##,
    )
    .unwrap();

    let overrides = PruneConfig::from_file(&override_path).unwrap();
    let merged = PruneConfig::default().merge(overrides);

    assert_eq!(
        merged.content,
        vec!["src/**/*.elm".to_string(), "review/**/*.elm".to_string()]
    );
    assert_eq!(merged.css, vec![PathBuf::from("public/dist/style.css")]);
    assert_eq!(merged.extractors.len(), 1);
    assert_eq!(merged.extractors[0].rule.pattern(), "[a-z-]+");
    merged.validate().unwrap();
}

#[test]
fn unmatched_extension_gets_broad_rule() {
    let config = PruneConfig::default();

    // No extractor claims .html; the permissive default scan applies
    let rule = config.rule_for(Path::new("static/index.html"));
    assert_eq!(rule, &ExtractionRule::Broad);
    assert_eq!(
        rule.apply("<a href=\"/about\">about</a>"),
        vec!["a", "href", "/about", "about", "/a"]
    );
}

#[test]
fn config_is_stable_under_round_trip() {
    let config = PruneConfig {
        content: vec!["src/**/*.elm".to_string()],
        css: vec![PathBuf::from("public/dist/style.css")],
        extractors: vec![
            Extractor::new(["elm"]),
            Extractor::with_pattern("[a-z]+", ["vue"]).unwrap(),
        ],
    };

    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: PruneConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}
