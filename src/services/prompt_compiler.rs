use crate::domain::EvaluationRequest;

/// The downstream chatbot collects answers to a fixed number of questions,
/// whatever the number of supplied topics.
pub const TARGET_QUESTION_COUNT: u8 = 10;

/// Renders the instruction document sent to the generation api. Pure and
/// deterministic; missing form fields render as empty values, never as
/// omitted sections.
pub fn compile_chatbot_prompt(request: &EvaluationRequest, website_content: &str) -> String {
    let company = &request.company;
    let evaluation = &request.evaluation;
    let style = &request.chatbot_style;

    format!(
        r#"
You are an expert in creating prompts for evaluation chatbots. Your job is to produce a COMPLETE system prompt for a chatbot (Chatbot B) that will be used to collect feedback from users. The prompt must be based on the following data from a form and website content.

BEFORE YOU START:
- Create evaluation questions, based on the 'Key Topics' and 'Questions' from the data. If there are not enough, supplement logically with questions related to the industry, the object, and the company description. Each question must ask for a rating on the scale {rating_scale} (e.g. 1-10) and an optional comment.
- The chatbot must ask one question at a time, wait for a response, and proceed to the next ONLY after receiving a response.
- Reactions:
  - For high rating (>80% of max, e.g. 8-10/10): Show enthusiasm (e.g. 'Great! We are excited!').
  - For medium (40-80%): Show pleasure or moderation (e.g. 'Thank you! It's good, but we can do better.').
  - For low (<40%): Show disappointment but positively (e.g. 'We are sorry you were not satisfied. Let's see how to improve.').
- Follow-up: After each response, make 1-2 follow-up questions depending on the rating:
  - High: Ask 'What did you like the most?' or 'Why this high rating?'.
  - Medium: Ask 'What could we improve slightly?' or 'Is there something specific you missed?'.
  - Low: Ask 'What was the main problem?' or 'How can we make it better next time?'.
- Goal: Collect responses from ALL {target_count} questions before finishing. At the end, provide a summary and export the data in JSON format.
- Use the language {language}, the tone {tone} and the personality {personality}.
- Start with a greeting customized to the company.
- End: After all questions, say 'Thank you!' and export JSON with: {{ "responses": [{{ "question": "...", "rating": ..., "comment": "...", "follow_up": "..." }} for each], "summary": "..." }}.

Data to base on:

---
### Company Details:
- Company Name: {company_name}
- Industry: {industry}
- Size: {size}
- Website: {website}
- Email: {email}
- Description: {description}

---
### Evaluation Details:
- Evaluation Type: {evaluation_type}
- Evaluation Object: {specific_object}
- Key Topics: {key_topics}
- Questions: {questions}
- Rating Scale: {rating_scale}
- Comments: {additional_comments_focus}

---
### Chatbot Style:
- Language: {language}
- Tone: {tone}
- Personality: {personality}

---
### Website Content for Additional Information:
{website_content}

Based on ALL this, produce ONLY the final system prompt for Chatbot B. Do not add explanations - only the prompt in quoted format.
### YOU WILL WRITE THE PROMPT IN ENGLISH
"#,
        target_count = TARGET_QUESTION_COUNT,
        company_name = company.name,
        industry = company.industry.as_deref().unwrap_or(""),
        size = company.size.as_deref().unwrap_or(""),
        website = company.website.as_deref().unwrap_or(""),
        email = company.email.as_deref().unwrap_or(""),
        description = company.description.as_deref().unwrap_or(""),
        evaluation_type = evaluation.r#type.as_deref().unwrap_or(""),
        specific_object = evaluation.specific_object.as_deref().unwrap_or(""),
        key_topics = evaluation.key_topics.join(", "),
        questions = evaluation.questions.join(", "),
        rating_scale = evaluation.rating_scale.as_deref().unwrap_or(""),
        additional_comments_focus = evaluation.additional_comments_focus.as_deref().unwrap_or(""),
        language = style.language.as_deref().unwrap_or(""),
        tone = style.tone.as_deref().unwrap_or(""),
        personality = style.personality.as_deref().unwrap_or(""),
        website_content = website_content,
    )
}
