//! JSON body extractor that reports every payload problem as a 400
//!
//! The body is parsed regardless of `Content-Type`, so clients that omit the
//! header still get their payload read. Unreadable JSON maps to `BAD_REQUEST`,
//! well-formed JSON of the wrong shape maps to `VALIDATION_ERROR`.

use crate::ApiError;

use std::future::Future;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

            parse(&bytes).map(JsonBody)
        }
    }
}

pub(crate) fn parse<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|e| match e.classify() {
        Category::Data => ApiError::validation(e.to_string(), None),
        Category::Syntax | Category::Eof | Category::Io => {
            ApiError::bad_request(format!("Malformed JSON body: {}", e))
        }
    })
}
