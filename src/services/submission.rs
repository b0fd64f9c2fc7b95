use async_trait::async_trait;

use crate::{
    configuration::ResultsSettings,
    domain::{EvaluationRequest, ScrapeStatus, ScrapedContent},
    errors::AppError,
};

use super::{compile_chatbot_prompt, persist_submission};

pub const NO_WEBSITE_PLACEHOLDER: &str = "No website provided.";

#[async_trait]
pub trait WebsiteFetcher {
    async fn fetch(&self, url: &str) -> ScrapedContent;
}

#[async_trait]
pub trait PromptGenerator {
    async fn create_system_prompt(&self, compiled_prompt: &str) -> Result<String, AppError>;
}

pub struct SubmissionOutcome {
    pub file: String,
    pub generated_prompt: String,
}

/// Runs one submission end-to-end: validate, fetch (optional), compile,
/// generate, persist. A degraded fetch is never fatal; generation and
/// persistence failures propagate.
pub async fn process_submission(
    fetcher: &dyn WebsiteFetcher,
    generator: &dyn PromptGenerator,
    results: &ResultsSettings,
    request: EvaluationRequest,
) -> Result<SubmissionOutcome, AppError> {
    if request.company.name.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Company name is required.".to_string(),
        ));
    }

    let website_content = match request.company.website.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => {
            let scraped = fetcher.fetch(url).await;
            if scraped.status == ScrapeStatus::Unreachable {
                log::warn!(
                    "Continuing with fallback content for {}",
                    scraped.source_url
                );
            }
            scraped.text
        }
        _ => NO_WEBSITE_PLACEHOLDER.to_string(),
    };

    let compiled_prompt = compile_chatbot_prompt(&request, &website_content);
    let generated_prompt = generator.create_system_prompt(&compiled_prompt).await?;
    let file = persist_submission(results, &request, &generated_prompt)?;

    Ok(SubmissionOutcome {
        file,
        generated_prompt,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    };

    use super::*;

    struct FakeFetcher {
        called: AtomicBool,
        content: ScrapedContent,
    }

    impl FakeFetcher {
        fn returning(content: ScrapedContent) -> Self {
            FakeFetcher {
                called: AtomicBool::new(false),
                content,
            }
        }
    }

    #[async_trait]
    impl WebsiteFetcher for FakeFetcher {
        async fn fetch(&self, _url: &str) -> ScrapedContent {
            self.called.store(true, Ordering::SeqCst);
            self.content.clone()
        }
    }

    struct FakeGenerator {
        called: AtomicBool,
        seen_prompt: Mutex<Option<String>>,
        result: Result<String, String>,
    }

    impl FakeGenerator {
        fn succeeding(text: &str) -> Self {
            FakeGenerator {
                called: AtomicBool::new(false),
                seen_prompt: Mutex::new(None),
                result: Ok(text.to_string()),
            }
        }

        fn failing(message: &str) -> Self {
            FakeGenerator {
                called: AtomicBool::new(false),
                seen_prompt: Mutex::new(None),
                result: Err(message.to_string()),
            }
        }
    }

    #[async_trait]
    impl PromptGenerator for FakeGenerator {
        async fn create_system_prompt(&self, compiled_prompt: &str) -> Result<String, AppError> {
            self.called.store(true, Ordering::SeqCst);
            *self.seen_prompt.lock().unwrap() = Some(compiled_prompt.to_string());
            self.result
                .clone()
                .map_err(AppError::UpstreamError)
        }
    }

    fn results_in(dir: &tempfile::TempDir) -> ResultsSettings {
        ResultsSettings {
            output_dir: dir.path().to_string_lossy().into_owned(),
        }
    }

    fn request_json(json: &str) -> EvaluationRequest {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn missing_company_name_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FakeFetcher::returning(ScrapedContent::fetched("https://acme.com", "About".into()));
        let generator = FakeGenerator::succeeding("prompt");
        let request = request_json(r#"{"company": {"website": "https://acme.com"}}"#);

        let result = process_submission(&fetcher, &generator, &results_in(&dir), request).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(!fetcher.called.load(Ordering::SeqCst));
        assert!(!generator.called.load(Ordering::SeqCst));
        assert_eq!(dir.path().read_dir().unwrap().count(), 0);
    }

    #[tokio::test]
    async fn no_website_uses_placeholder_and_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FakeFetcher::returning(ScrapedContent::fetched("https://acme.com", "About".into()));
        let generator = FakeGenerator::succeeding("You are a feedback chatbot.");
        let request = request_json(
            r#"{"company": {"name": "Acme"}, "evaluation": {"rating_scale": "1-10"}, "chatbot_style": {"language": "English"}}"#,
        );

        let outcome = process_submission(&fetcher, &generator, &results_in(&dir), request)
            .await
            .unwrap();

        assert!(!fetcher.called.load(Ordering::SeqCst));
        assert_eq!(outcome.generated_prompt, "You are a feedback chatbot.");

        let seen = seen_prompt_of(&generator);
        assert!(seen.contains(NO_WEBSITE_PLACEHOLDER));

        let file_name = std::path::Path::new(&outcome.file)
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert!(file_name.starts_with("chatbot_spec_acme_"));
        assert_eq!(dir.path().read_dir().unwrap().count(), 1);
    }

    #[tokio::test]
    async fn unreachable_website_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FakeFetcher::returning(ScrapedContent::unreachable(
            "https://acme.com",
            "Could not reach the website.".into(),
        ));
        let generator = FakeGenerator::succeeding("prompt");
        let request =
            request_json(r#"{"company": {"name": "Acme", "website": "https://acme.com"}}"#);

        let outcome = process_submission(&fetcher, &generator, &results_in(&dir), request)
            .await
            .unwrap();

        assert!(fetcher.called.load(Ordering::SeqCst));
        assert!(seen_prompt_of(&generator).contains("Could not reach the website."));
        assert_eq!(outcome.generated_prompt, "prompt");
    }

    #[tokio::test]
    async fn blank_website_field_skips_the_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FakeFetcher::returning(ScrapedContent::fetched("https://acme.com", "About".into()));
        let generator = FakeGenerator::succeeding("prompt");
        let request = request_json(r#"{"company": {"name": "Acme", "website": "   "}}"#);

        process_submission(&fetcher, &generator, &results_in(&dir), request)
            .await
            .unwrap();

        assert!(!fetcher.called.load(Ordering::SeqCst));
        assert!(seen_prompt_of(&generator).contains(NO_WEBSITE_PLACEHOLDER));
    }

    #[tokio::test]
    async fn upstream_failure_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FakeFetcher::returning(ScrapedContent::fetched("https://acme.com", "About".into()));
        let generator = FakeGenerator::failing("model unavailable");
        let request = request_json(r#"{"company": {"name": "Acme"}}"#);

        let result = process_submission(&fetcher, &generator, &results_in(&dir), request).await;

        match result {
            Err(AppError::UpstreamError(message)) => assert!(!message.is_empty()),
            other => panic!("Expected upstream error, got ok={}", other.is_ok()),
        }
        assert_eq!(dir.path().read_dir().unwrap().count(), 0);
    }

    fn seen_prompt_of(generator: &FakeGenerator) -> String {
        generator.seen_prompt.lock().unwrap().clone().unwrap()
    }
}
