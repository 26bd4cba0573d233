//! src/routes/contact.rs
use crate::domain::{ContactSubmission, ValidatedContact, ValidationError};
use crate::email::{DispatchOutcome, MailError, SmtpMailer};
use crate::routes::error_chain_fmt;
use actix_web::http::StatusCode;
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse, ResponseError};
use uuid::Uuid;

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error("Failed to relay the contact message")]
    DispatchError(#[source] MailError),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::DispatchError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Transport details stay in the logs.
        let error = match self {
            ContactError::ValidationError(e) => e.to_string(),
            ContactError::DispatchError(_) => "Internal server error".to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorBody { error })
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(serde::Serialize)]
struct SentBody {
    message: &'static str,
}

#[tracing::instrument(
    name = "Relaying a contact message",
    skip(req, body, mailer),
    fields(request_id = %Uuid::new_v4())
)]
pub async fn contact(
    req: HttpRequest,
    body: web::Bytes,
    mailer: web::Data<SmtpMailer>,
) -> Result<HttpResponse, ContactError> {
    // Only JSON bodies are read; anything else is an empty form.
    let submission = if is_json(&req) {
        ContactSubmission::from_json(&body)
    } else {
        ContactSubmission::default()
    };

    let contact = ValidatedContact::try_from(submission).map_err(|e| {
        tracing::info!(reason = %e, "Rejected contact submission");
        e
    })?;

    match mailer.dispatch(&contact).await {
        DispatchOutcome::Sent => Ok(HttpResponse::Ok().json(SentBody {
            message: "Message sent successfully!",
        })),
        DispatchOutcome::Failed(e) => Err(ContactError::DispatchError(e)),
    }
}

fn is_json(req: &HttpRequest) -> bool {
    req.content_type().eq_ignore_ascii_case("application/json")
}
