use std::fmt;

/// Errors that can occur when resolving inputs, fetching from OpenAQ,
/// or extracting a response payload.
#[derive(Debug, Clone, PartialEq)]
pub enum OpenAqError {
    /// No API key from the override input or the X-API-Key environment value.
    MissingCredential,
    /// A required input (start date, end date) was absent.
    MissingInput(&'static str),
    /// The response body could not be parsed as JSON.
    MalformedResponse,
    /// Non-200 HTTP response from the OpenAQ API.
    ApiError { code: u16, message: String },
    /// Anything else: transport failures, bad numeric inputs.
    Unexpected(String),
}

impl fmt::Display for OpenAqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenAqError::MissingCredential => {
                write!(f, "Missing API key. Set X-API-Key in .env or enter it in the app.")
            }
            OpenAqError::MissingInput(field) => write!(f, "{} is required.", field),
            OpenAqError::MalformedResponse => write!(f, "API response was not valid JSON."),
            OpenAqError::ApiError { code, message } => {
                write!(f, "API error {}: {}", code, message)
            }
            OpenAqError::Unexpected(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for OpenAqError {}
