use std::{fs, path::Path};

use chrono::Local;

use crate::{
    configuration::ResultsSettings,
    domain::{EvaluationRequest, PersistedRecord},
    errors::AppError,
};

/// Keep ascii alphanumerics and spaces, trim, spaces to underscores,
/// lowercase. "Acme Corp! 2024" becomes "acme_corp_2024".
pub fn sanitize_company_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();

    kept.trim().replace(' ', "_").to_lowercase()
}

/// Writes the submitted form plus the generated prompt as pretty-printed
/// json. File names are unique only to the second; two submissions for the
/// same company within one second collide.
pub fn persist_submission(
    settings: &ResultsSettings,
    request: &EvaluationRequest,
    generated_prompt: &str,
) -> Result<String, AppError> {
    fs::create_dir_all(&settings.output_dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let safe_company_name = sanitize_company_name(&request.company.name);
    let file_path = Path::new(&settings.output_dir).join(format!(
        "chatbot_spec_{}_{}.json",
        safe_company_name, timestamp
    ));

    let record = PersistedRecord {
        request,
        generated_prompt,
    };
    let json = serde_json::to_string_pretty(&record)?;
    fs::write(&file_path, json)?;

    Ok(file_path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::{persist_submission, sanitize_company_name};
    use crate::{configuration::ResultsSettings, domain::EvaluationRequest};

    #[test]
    fn sanitize_keeps_ascii_alphanumerics_and_lowercases() {
        assert_eq!(sanitize_company_name("Acme Inc. 2024"), "acme_inc_2024");
        assert_eq!(sanitize_company_name("  Acme  "), "acme");
    }

    #[test]
    fn sanitize_drops_non_ascii_characters() {
        assert_eq!(sanitize_company_name("Ωmega Corp! 2024"), "mega_corp_2024");
        assert_eq!(sanitize_company_name("Café & Bar"), "caf__bar");
    }

    #[test]
    fn sanitize_of_fully_symbolic_name_is_empty() {
        assert_eq!(sanitize_company_name("!!!"), "");
    }

    #[test]
    fn persist_writes_record_with_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ResultsSettings {
            output_dir: dir.path().to_string_lossy().into_owned(),
        };
        let request: EvaluationRequest =
            serde_json::from_str(r#"{"company": {"name": "Acme"}}"#).unwrap();

        let file = persist_submission(&settings, &request, "You are a feedback chatbot.").unwrap();

        let file_name = std::path::Path::new(&file)
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert!(file_name.starts_with("chatbot_spec_acme_"));
        assert!(file_name.ends_with(".json"));

        let written = std::fs::read_to_string(&file).unwrap();
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json["company"]["name"], "Acme");
        assert_eq!(json["generated_prompt"], "You are a feedback chatbot.");
    }

    #[test]
    fn persist_creates_missing_results_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("results");
        let settings = ResultsSettings {
            output_dir: nested.to_string_lossy().into_owned(),
        };
        let request: EvaluationRequest =
            serde_json::from_str(r#"{"company": {"name": "Acme"}}"#).unwrap();

        persist_submission(&settings, &request, "prompt").unwrap();

        assert!(nested.read_dir().unwrap().count() == 1);
    }
}
