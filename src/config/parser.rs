use std::path::Path;

use super::types::PatrolConfig;
use crate::errors::PatrolError;

pub async fn parse_config(path: &Path) -> Result<PatrolConfig, PatrolError> {
    if !path.exists() {
        return Err(PatrolError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(PatrolError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    // An empty file deserializes as YAML null, not as an empty mapping.
    if content.trim().is_empty() {
        return Ok(PatrolConfig::default());
    }
    let config: PatrolConfig = serde_yaml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

/// Reject values that could never produce a runnable monitor.
fn validate(config: &PatrolConfig) -> Result<(), PatrolError> {
    if let Some(schedule) = &config.schedule {
        if schedule.iterations == Some(0) {
            return Err(PatrolError::Config(
                "schedule.iterations must be at least 1".into(),
            ));
        }
    }

    if let Some(target) = &config.target {
        if target.as_os_str().is_empty() {
            return Err(PatrolError::Config("target must not be empty".into()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScheduleConfig;

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let config = PatrolConfig {
            schedule: Some(ScheduleConfig {
                iterations: Some(0),
                interval_secs: None,
            }),
            ..Default::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_target() {
        let config = PatrolConfig {
            target: Some(std::path::PathBuf::new()),
            ..Default::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_accepts_empty_config() {
        assert!(validate(&PatrolConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_accepts_single_iteration() {
        let config = PatrolConfig {
            schedule: Some(ScheduleConfig {
                iterations: Some(1),
                interval_secs: Some(0),
            }),
            ..Default::default()
        };
        assert!(validate(&config).is_ok());
    }
}
