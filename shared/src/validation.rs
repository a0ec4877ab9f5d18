use serde_json::Value;
use crate::models::CreatePollRequest;

pub const MIN_OPTIONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Request body must be a JSON object")]
    MalformedBody,
    #[error("Request body too large")]
    BodyTooLarge,
    #[error("Missing 'question' or 'options' in request body")]
    MissingField,
    #[error("'question' must be a non-empty string")]
    InvalidQuestion,
    #[error("'options' must be a list with at least two choices")]
    InsufficientOptions,
    #[error("Every entry in 'options' must be a string")]
    InvalidOptionText,
}

/// Checks a decoded creation payload, stopping at the first failure in
/// body, presence, question, option-count, option-type order.
pub fn validate_poll_request(body: Option<&Value>) -> Result<CreatePollRequest, ValidationError> {
    let fields = body.and_then(Value::as_object).ok_or(ValidationError::MalformedBody)?;

    let (question, options) = match (fields.get("question"), fields.get("options")) {
        (Some(question), Some(options)) => (question, options),
        _ => return Err(ValidationError::MissingField),
    };

    let question = question
        .as_str()
        .filter(|q| !q.trim().is_empty())
        .ok_or(ValidationError::InvalidQuestion)?;

    let options = options
        .as_array()
        .filter(|opts| opts.len() >= MIN_OPTIONS)
        .ok_or(ValidationError::InsufficientOptions)?;

    let options = options
        .iter()
        .map(|opt| opt.as_str().map(str::to_owned))
        .collect::<Option<Vec<_>>>()
        .ok_or(ValidationError::InvalidOptionText)?;

    Ok(CreatePollRequest {
        question: question.to_owned(),
        options,
    })
}
