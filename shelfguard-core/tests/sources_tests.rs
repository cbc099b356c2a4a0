use std::collections::BTreeSet;
use std::fs;
use std::time::Duration;

use screening::{Rule, RuleKind};
use shelfguard_core::sources::{JsonCatalog, ProfileRules, TomlDictionary};
use shelfguard_core::{CoreConfig, ProductSource, RuleSource, SynonymSource};

fn write(dir: &std::path::Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).expect("write fixture");
    path
}

#[test]
fn profiles_load_and_keep_rule_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write(
        dir.path(),
        "profiles.toml",
        r#"
[[profile]]
user = "ada"

  [[profile.rule]]
  type = "allergy"
  value = "peanuts"

  [[profile.rule]]
  type = "ethics"
  value = "palm oil"

[[profile]]
user = "grace"
"#,
    );
    let profiles = ProfileRules::load(&path).expect("load profiles");

    let ada = profiles.rules_for_user("ada").expect("ada");
    assert_eq!(
        ada,
        vec![
            Rule::new(RuleKind::Allergy, "peanuts"),
            Rule::new(RuleKind::Ethics, "palm oil"),
        ]
    );

    // Profile present but without rules, and profile absent entirely: both
    // are empty sets, not errors.
    assert!(profiles.rules_for_user("grace").expect("grace").is_empty());
    assert!(profiles.rules_for_user("nobody").expect("nobody").is_empty());
}

#[test]
fn dictionary_batches_case_insensitively() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write(
        dir.path(),
        "synonyms.toml",
        r#"
[[entry]]
value = "Palm Oil"
synonyms = ["palm kernel oil", "sodium palmate"]

[[entry]]
value = "milk"
synonyms = ["whey", "casein"]
"#,
    );
    let dictionary = TomlDictionary::load(&path).expect("load dictionary");
    assert!(!dictionary.is_empty());

    let wanted: BTreeSet<String> = ["palm oil", "peanuts"]
        .into_iter()
        .map(str::to_string)
        .collect();
    let out = dictionary.synonyms_for(&wanted).expect("batch lookup");

    // Requested-but-unknown keys are simply absent from the response.
    assert_eq!(out.len(), 1);
    assert_eq!(
        out["palm oil"],
        vec!["palm kernel oil".to_string(), "sodium palmate".to_string()]
    );
}

#[test]
fn catalog_lookup_and_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write(
        dir.path(),
        "catalog.json",
        r#"{
  "5000159484695": { "name": "Tea biscuits", "ingredients": "Wheat flour, sugar" },
  "4000417025005": { "name": "Mystery snack", "ingredients": null }
}"#,
    );
    let catalog = JsonCatalog::load(&path).expect("load catalog");
    assert_eq!(catalog.len(), 2);

    let biscuit = catalog
        .product_by_barcode("5000159484695")
        .expect("lookup")
        .expect("present");
    assert_eq!(biscuit.name, "Tea biscuits");
    assert_eq!(biscuit.ingredients.as_deref(), Some("Wheat flour, sugar"));

    let mystery = catalog
        .product_by_barcode("4000417025005")
        .expect("lookup")
        .expect("present");
    assert!(mystery.ingredients.is_none());

    assert!(catalog
        .product_by_barcode("0000000000000")
        .expect("lookup")
        .is_none());
}

#[test]
fn config_defaults_when_file_is_absent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = CoreConfig::load(dir.path()).expect("load config");
    assert_eq!(cfg.policies.fetch_timeout(), Duration::from_millis(1500));
    assert_eq!(cfg.sources.profile_path, dir.path().join("profiles.toml"));
    assert_eq!(
        cfg.logbook.scan_log,
        dir.path().join("logbook/scans.jsonl")
    );
}

#[test]
fn config_file_overrides_and_resolves_paths() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "config.toml",
        r#"
[policies]
fetch_timeout_ms = 250

[sources]
catalog_path = "fixtures/products.json"
"#,
    );
    let cfg = CoreConfig::load(dir.path()).expect("load config");
    assert_eq!(cfg.policies.fetch_timeout(), Duration::from_millis(250));
    assert_eq!(
        cfg.sources.catalog_path,
        dir.path().join("fixtures/products.json")
    );
    // Unset sections keep their defaults.
    assert_eq!(cfg.sources.profile_path, dir.path().join("profiles.toml"));
}
