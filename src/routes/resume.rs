//! src/routes/resume.rs
use crate::configuration::AssetSettings;
use crate::routes::error_chain_fmt;
use actix_files::NamedFile;
use actix_web::http::header::{ContentDisposition, ContentType, DispositionParam, DispositionType};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

#[derive(thiserror::Error)]
pub enum ResumeError {
    #[error("Failed to download resume")]
    Unavailable(#[source] std::io::Error),
}

impl std::fmt::Debug for ResumeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ResumeError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

#[tracing::instrument(name = "Sending the resume", skip(assets))]
pub async fn resume(assets: web::Data<AssetSettings>) -> Result<NamedFile, ResumeError> {
    let path = assets.resume_path();

    let file = NamedFile::open_async(&path).await.map_err(|e| {
        tracing::error!(
            error.cause_chain = ?e,
            path = %path.display(),
            "Failed to open the resume"
        );
        ResumeError::Unavailable(e)
    })?;

    Ok(file.set_content_disposition(ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(
            assets.resume_download_name.clone(),
        )],
    }))
}
