use domain_registry::{InMemoryStore, Reconciler, RegistryConfig};
use tempfile::TempDir;

#[test]
fn toml_file_to_persisted_store_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("domains.toml");
    std::fs::write(
        &config_path,
        r#"
        [[domains]]
        name = "example1.com"
        languages = ["cs", "en"]

        [[domains]]
        name = "example2.com"
        languages = ["en"]
        "#,
    )
    .unwrap();

    let config = RegistryConfig::from_file(&config_path).unwrap();
    let registry = config.build_registry().unwrap();

    let store = InMemoryStore::with_iso_catalog();
    let mut reconciler = Reconciler::new(store.clone(), store.clone(), store.clone());
    let report = reconciler.reconcile(&registry).unwrap();

    assert_eq!(report.domains_created, 2);
    assert_eq!(report.languages_linked, 3);
    assert_eq!(store.commit_count(), 1);

    let domains = store.domains();
    assert_eq!(domains.len(), 2);
    let example1 = domains
        .iter()
        .find(|domain| domain.name == "example1.com")
        .unwrap();
    let codes: Vec<&str> = example1
        .languages
        .iter()
        .map(|language| language.iso_code.as_str())
        .collect();
    assert_eq!(codes, ["cs", "en"]);
}

#[test]
fn missing_config_file_surfaces_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");

    let err = RegistryConfig::from_file(&missing).unwrap_err();
    assert!(matches!(err, domain_registry::RegistryError::Io(_)));
}
