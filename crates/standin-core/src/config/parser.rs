//! Fixture file parsing and loading (YAML/JSON).

use crate::config::error::ConfigError;
use crate::mocks::registry::MockRegistry;
use crate::types::entry::MockEntry;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fixture file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    Yaml,
    Json,
    Unknown,
}

/// Get fixture file type from path extension
pub fn get_file_type(path: &str) -> ConfigFileType {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => ConfigFileType::Yaml,
        "json" => ConfigFileType::Json,
        _ => ConfigFileType::Unknown,
    }
}

/// Parse JSON content
pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_json::from_str(content).map_err(ConfigError::from)
}

/// Parse YAML content
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_yaml::from_str(content).map_err(ConfigError::from)
}

/// Parse fixture content based on file type
pub fn parse_config<T: DeserializeOwned>(content: &str, path: &str) -> Result<T, ConfigError> {
    match get_file_type(path) {
        ConfigFileType::Yaml => parse_yaml(content),
        ConfigFileType::Json => parse_json(content),
        ConfigFileType::Unknown => Err(ConfigError::UnknownFileType(path.to_string())),
    }
}

/// Load mock entries from all fixture files matching a glob pattern.
///
/// Each file holds a list of entries. Files are read in the order the glob
/// expands them (alphabetical), and a pattern matching no files yields an
/// empty list.
pub async fn load_entries(pattern: &str) -> Result<Vec<MockEntry>, ConfigError> {
    let mut entries = Vec::new();

    for path in glob::glob(pattern)? {
        let path = match path {
            Ok(path) => path,
            Err(e) => {
                return Err(ConfigError::Io {
                    path: e.path().display().to_string(),
                    source: e.into(),
                })
            }
        };

        let display = path.display().to_string();
        let content =
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| ConfigError::Io {
                    path: display.clone(),
                    source,
                })?;

        let mut file_entries: Vec<MockEntry> = parse_config(&content, &display)?;
        entries.append(&mut file_entries);
    }

    Ok(entries)
}

/// Load mock entries matching a glob pattern into a registry.
///
/// Where two files register the same request, the later file wins through
/// the registry's replace-on-equal rule.
pub async fn load_registry(pattern: &str) -> Result<MockRegistry, ConfigError> {
    let mut registry = MockRegistry::new();
    registry.add_entries(load_entries(pattern).await?);
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::entry::Outcome;
    use crate::types::request::Request;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("mocks.yaml", ConfigFileType::Yaml)]
    #[case("mocks.YAML", ConfigFileType::Yaml)]
    #[case("mocks.yml", ConfigFileType::Yaml)]
    #[case("mocks.YML", ConfigFileType::Yaml)]
    #[case("mocks.json", ConfigFileType::Json)]
    #[case("mocks.JSON", ConfigFileType::Json)]
    #[case("mocks.txt", ConfigFileType::Unknown)]
    #[case("mocks", ConfigFileType::Unknown)]
    #[case("", ConfigFileType::Unknown)]
    fn test_get_file_type(#[case] path: &str, #[case] expected: ConfigFileType) {
        assert_eq!(get_file_type(path), expected);
    }

    #[rstest]
    fn test_parse_json_valid() {
        let content = r#"[
            {
                "request": {"query_id": "USER_PROFILE", "variables": {"id": "bob"}},
                "failure": "No bob found"
            }
        ]"#;
        let entries: Vec<MockEntry> = parse_json(content).expect("Should parse");
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].outcome,
            Outcome::Failure("No bob found".to_string())
        );
    }

    #[rstest]
    fn test_parse_json_invalid() {
        let content = "invalid json";
        let result: Result<Vec<MockEntry>, _> = parse_json(content);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::Json(_)));
    }

    #[rstest]
    fn test_parse_yaml_valid() {
        let content = r#"
- request:
    query_id: USER_PROFILE
    variables:
      id: douglas
  success:
    first_name: Douglas
    last_name: Smith
    email: douglas@smith.com
"#;
        let entries: Vec<MockEntry> = parse_yaml(content).expect("Should parse");
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].request,
            Request::new("USER_PROFILE").with_variable("id", "douglas")
        );
        assert_eq!(
            entries[0].outcome,
            Outcome::Success(json!({
                "first_name": "Douglas",
                "last_name": "Smith",
                "email": "douglas@smith.com"
            }))
        );
    }

    #[rstest]
    fn test_parse_yaml_invalid() {
        let content = "invalid: yaml: [";
        let result: Result<Vec<MockEntry>, _> = parse_yaml(content);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::Yaml(_)));
    }

    #[rstest]
    fn test_parse_config_yaml() {
        let content = "- request:\n    query_id: PING\n  success: {}";
        let result: Result<Vec<MockEntry>, _> = parse_config(content, "mocks.yaml");
        assert!(result.is_ok());
    }

    #[rstest]
    fn test_parse_config_json() {
        let content = r#"[{"request": {"query_id": "PING"}, "success": {}}]"#;
        let result: Result<Vec<MockEntry>, _> = parse_config(content, "mocks.json");
        assert!(result.is_ok());
    }

    #[rstest]
    #[case("mocks.txt")]
    #[case("mocks.unknown")]
    #[case("")]
    fn test_parse_config_unknown_file_type(#[case] path: &str) {
        let content = r#"[{"request": {"query_id": "PING"}, "success": {}}]"#;
        let result: Result<Vec<MockEntry>, _> = parse_config(content, path);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnknownFileType(_)
        ));
    }

    #[tokio::test]
    async fn test_load_entries_from_yaml_files() {
        let dir = tempfile::tempdir().expect("Should create temp dir");

        std::fs::write(
            dir.path().join("a_profiles.yaml"),
            "- request:\n    query_id: USER_PROFILE\n    variables:\n      id: douglas\n  success:\n    first_name: Douglas\n",
        )
        .expect("Should write fixture");
        std::fs::write(
            dir.path().join("b_failures.yaml"),
            "- request:\n    query_id: USER_PROFILE\n    variables:\n      id: bob\n  failure: No bob found\n",
        )
        .expect("Should write fixture");

        let pattern = format!("{}/*.yaml", dir.path().display());
        let entries = load_entries(&pattern).await.expect("Should load");

        // Files are read in alphabetical order
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].request.variables["id"], "douglas");
        assert_eq!(entries[1].request.variables["id"], "bob");
    }

    #[tokio::test]
    async fn test_load_entries_mixed_formats() {
        let dir = tempfile::tempdir().expect("Should create temp dir");

        std::fs::write(
            dir.path().join("profiles.json"),
            r#"[{"request": {"query_id": "USER_PROFILE", "variables": {"id": "douglas"}}, "success": {}}]"#,
        )
        .expect("Should write fixture");
        std::fs::write(
            dir.path().join("failures.yml"),
            "- request:\n    query_id: USER_PROFILE\n    variables:\n      id: bob\n  failure: No bob found\n",
        )
        .expect("Should write fixture");

        let pattern = format!("{}/*", dir.path().display());
        let entries = load_entries(&pattern).await.expect("Should load");
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn test_load_entries_no_matches() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let pattern = format!("{}/*.yaml", dir.path().display());
        let entries = load_entries(&pattern).await.expect("Should load");
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_load_entries_invalid_pattern() {
        let result = load_entries("mocks/a[").await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::Pattern(_)));
    }

    #[tokio::test]
    async fn test_load_entries_unknown_extension() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        std::fs::write(dir.path().join("mocks.txt"), "not a fixture")
            .expect("Should write fixture");

        let pattern = format!("{}/*.txt", dir.path().display());
        let result = load_entries(&pattern).await;
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnknownFileType(_)
        ));
    }

    #[tokio::test]
    async fn test_load_registry_later_file_wins() {
        let dir = tempfile::tempdir().expect("Should create temp dir");

        std::fs::write(
            dir.path().join("a_base.yaml"),
            "- request:\n    query_id: USER_PROFILE\n    variables:\n      id: douglas\n  success:\n    first_name: Douglas\n",
        )
        .expect("Should write fixture");
        std::fs::write(
            dir.path().join("b_override.yaml"),
            "- request:\n    query_id: USER_PROFILE\n    variables:\n      id: douglas\n  failure: Douglas is away\n",
        )
        .expect("Should write fixture");

        let pattern = format!("{}/*.yaml", dir.path().display());
        let registry = load_registry(&pattern).await.expect("Should load");

        assert_eq!(registry.len(), 1);
        let request = Request::new("USER_PROFILE").with_variable("id", "douglas");
        let entry = registry.find(&request).expect("Should find entry");
        assert_eq!(
            entry.outcome,
            Outcome::Failure("Douglas is away".to_string())
        );
    }
}
