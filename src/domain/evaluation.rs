use serde::{Deserialize, Serialize};

/// Form payload submitted by the frontend. Everything except
/// `company.name` is optional; any subset of the body must deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default)]
    pub company: CompanyDetails,
    #[serde(default)]
    pub evaluation: EvaluationDetails,
    #[serde(default)]
    pub chatbot_style: ChatbotStyle,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_object: Option<String>,
    #[serde(default)]
    pub key_topics: Vec<String>,
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_scale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_comments_focus: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatbotStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<String>,
}

/// What gets written to disk: the submitted form plus the generated prompt.
/// Scraped website content is deliberately left out of stored records.
#[derive(Debug, Serialize)]
pub struct PersistedRecord<'a> {
    #[serde(flatten)]
    pub request: &'a EvaluationRequest,
    pub generated_prompt: &'a str,
}
