use super::model::GlobalConfig;

/// Load a [`GlobalConfig`] tree from a YAML or JSON file.
///
/// File extension selects the parser: `.json` is parsed as JSON, everything
/// else as YAML. Unknown keys are ignored; missing keys take their serde
/// defaults so a minimal file is valid.
pub fn load_config(file_path: &str) -> anyhow::Result<GlobalConfig> {
    let content = std::fs::read_to_string(file_path)?;
    let config: GlobalConfig = if file_path.ends_with(".json") {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(config)
}
