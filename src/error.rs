use std::fmt::{Debug, Display};
use std::io::Error as IoError;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derivative::Derivative;
use serde::{Serialize, Serializer};
use serde_json::Error as JsonError;

#[derive(Debug, Serialize, Derivative)]
#[derivative(PartialEq)]
#[serde(untagged)]
pub enum Error {
    // 400
    #[serde(serialize_with = "display")]
    InvalidJson(#[derivative(PartialEq = "ignore")] JsonPayloadError),
    #[serde(serialize_with = "display")]
    InvalidPath(#[derivative(PartialEq = "ignore")] PathError),
    #[serde(serialize_with = "display")]
    InvalidQuery(#[derivative(PartialEq = "ignore")] QueryPayloadError),
    AdFailedValidation {
        errors: Vec<String>,
    },

    // 404
    PathDoesNotExist,
    AdDoesNotExist {
        ad_id: String,
    },
    CollectionDoesNotExist {
        collection: String,
    },
    RecordDoesNotExistInCollection {
        collection: String,
        record_id: String,
    },

    // 500
    ExistentialState(String),
    #[serde(serialize_with = "display")]
    FailedToParseDocument(#[derivative(PartialEq = "ignore")] JsonError),
    #[serde(serialize_with = "display")]
    FailedToSerializeDocument(#[derivative(PartialEq = "ignore")] JsonError),
    #[serde(serialize_with = "display")]
    FailedToResetDocument(#[derivative(PartialEq = "ignore")] IoError),
    #[serde(serialize_with = "display")]
    IoError(#[derivative(PartialEq = "ignore")] IoError),
}

/// The coarse category of an error, reported to clients as `type` so they
/// can pick their copy without inspecting the message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    InvalidRequest,
    NotFound,
    Internal,
}

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "E4001000",
            Error::InvalidPath(_) => "E4001001",
            Error::InvalidQuery(_) => "E4001002",
            Error::AdFailedValidation { .. } => "E4001003",
            Error::PathDoesNotExist => "E4041000",
            Error::AdDoesNotExist { .. } => "E4041001",
            Error::CollectionDoesNotExist { .. } => "E4041002",
            Error::RecordDoesNotExistInCollection { .. } => "E4041003",
            Error::ExistentialState(_) => "E5001000",
            Error::FailedToParseDocument(_) => "E5001001",
            Error::FailedToSerializeDocument(_) => "E5001002",
            Error::FailedToResetDocument(_) => "E5001003",
            Error::IoError(_) => "E5001004",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "The given json could not be parsed",
            Error::InvalidPath(_) => "The given path could not be parsed",
            Error::InvalidQuery(_) => "The given query could not be parsed",
            Error::AdFailedValidation { .. } => "The given ad failed validation",
            Error::PathDoesNotExist => "The requested path was not found",
            Error::AdDoesNotExist { .. } => "Ad not found",
            Error::CollectionDoesNotExist { .. } => "The requested collection was not found",
            Error::RecordDoesNotExistInCollection { .. } => {
                "The requested record was not found in the collection"
            }
            Error::ExistentialState(_) => "The server detected an invalid state",
            Error::FailedToParseDocument(_) => "The database document could not be parsed",
            Error::FailedToSerializeDocument(_) => {
                "The database document could not be serialized"
            }
            Error::FailedToResetDocument(_) => "Failed to reset database",
            Error::IoError(_) => "An error occurred during an I/O operation",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidJson(_) | Error::InvalidPath(_) | Error::InvalidQuery(_) => {
                ErrorKind::InvalidRequest
            }
            Error::AdFailedValidation { .. } => ErrorKind::Validation,
            Error::PathDoesNotExist
            | Error::AdDoesNotExist { .. }
            | Error::CollectionDoesNotExist { .. }
            | Error::RecordDoesNotExistInCollection { .. } => ErrorKind::NotFound,
            Error::ExistentialState(_)
            | Error::FailedToParseDocument(_)
            | Error::FailedToSerializeDocument(_)
            | Error::FailedToResetDocument(_)
            | Error::IoError(_) => ErrorKind::Internal,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct Dummy<'a> {
            success: bool,
            #[serde(rename = "type")]
            kind: ErrorKind,
            error_code: &'static str,
            error: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            errors: Option<&'a [String]>,
            #[serde(skip_serializing_if = "Option::is_none")]
            error_meta: Option<&'a Error>,
        }

        // validation messages are surfaced at the top level instead
        let (errors, error_meta) = match self {
            Error::AdFailedValidation { errors } => (Some(errors.as_slice()), None),
            _ => (None, Some(self)),
        };

        HttpResponse::build(self.status_code()).json(&Dummy {
            success: false,
            kind: self.kind(),
            error_code: self.error_code(),
            error: self.error_message(),
            errors,
            error_meta,
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::IoError(error)
    }
}

impl From<JsonError> for Error {
    fn from(error: JsonError) -> Error {
        Error::FailedToParseDocument(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidJson(err) => Some(err),
            Error::InvalidPath(err) => Some(err),
            Error::InvalidQuery(err) => Some(err),
            Error::FailedToParseDocument(err) => Some(err),
            Error::FailedToSerializeDocument(err) => Some(err),
            Error::FailedToResetDocument(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

fn display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    fn body_json(error: &Error) -> serde_json::Value {
        let body = error.error_response().into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn validation_error_lists_messages_at_top_level() {
        let error = Error::AdFailedValidation {
            errors: vec!["first".to_string(), "second".to_string()],
        };

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        let body = body_json(&error);
        assert_eq!(body["success"], false);
        assert_eq!(body["type"], "validation");
        assert_eq!(body["errors"], serde_json::json!(["first", "second"]));
        assert!(body.get("error_meta").is_none());
    }

    #[test]
    fn missing_ad_reports_not_found() {
        let error = Error::AdDoesNotExist {
            ad_id: "ad_1_abc".to_string(),
        };

        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        let body = body_json(&error);
        assert_eq!(body["type"], "not_found");
        assert_eq!(body["error"], "Ad not found");
        assert_eq!(body["error_meta"]["ad_id"], "ad_1_abc");
    }

    #[test]
    fn failed_reset_is_internal() {
        let error = Error::FailedToResetDocument(IoError::new(
            std::io::ErrorKind::NotFound,
            "db.initial.json",
        ));

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(&error);
        assert_eq!(body["type"], "internal");
        assert_eq!(body["error"], "Failed to reset database");
    }
}
