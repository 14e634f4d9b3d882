use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::email::Email;
use crate::model::settings::AccountSettings;

/// Read account settings from a JSON file. The settings are not validated
/// here; call [`AccountSettings::validate`] before using them.
pub fn load_settings(path: &Path) -> Result<AccountSettings> {
    let data = fs::read_to_string(path)?;
    let settings: AccountSettings = serde_json::from_str(&data)?;
    tracing::debug!(
        path = %path.display(),
        rule_files = settings.rule_files.len(),
        "loaded settings"
    );
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &AccountSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}

pub fn load_email(path: &Path) -> Result<Email> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::action::Action;
    use crate::model::filter::Filter;
    use crate::model::rule::{Rule, RuleFile};

    #[test]
    fn test_settings_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AccountSettings {
            folders: vec!["work".into()],
            tags: vec!["urgent".into()],
            rule_files: vec![RuleFile::new(
                "main.sieve",
                vec![Rule::new(
                    Filter::subject_contains("urgent", false),
                    vec![Action::add_tag("urgent"), Action::move_to_folder("work")],
                )
                .with_comment("Urgent work mail")],
            )],
        };
        save_settings(&path, &settings).unwrap();
        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[test]
    fn test_load_settings_from_hand_written_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{
                "folders": ["receipts"],
                "rule_files": [{
                    "file_name": "shopping.sieve",
                    "rules": [{
                        "filter": {"type": "text", "field": "from", "comparison": "contains", "text": "shop"},
                        "actions": [{"type": "move_to_folder", "folder": "receipts"}, {"type": "mark_as_read"}]
                    }]
                }]
            }"#,
        )
        .unwrap();
        let settings = load_settings(&path).unwrap();
        assert!(settings.tags.is_empty());
        assert_eq!(settings.rule_files[0].rules[0].actions.len(), 2);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_settings_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_settings(&path), Err(crate::Error::Json(_))));
    }

    #[test]
    fn test_load_email() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("email.json");
        fs::write(
            &path,
            r#"{"from": "a@example.com", "to": ["b@example.com"], "subject": "Hi"}"#,
        )
        .unwrap();
        let email = load_email(&path).unwrap();
        assert_eq!(email.subject, "Hi");
        assert_eq!(email.to, vec!["b@example.com".to_string()]);
    }
}
