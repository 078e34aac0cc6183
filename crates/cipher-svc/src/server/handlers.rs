//! Axum request handlers for all service endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use classic_cipher::{CipherKind, Key, KeyKind, PlayfairMatrix};
use common::protocol::{
    CipherInfo, CipherListResponse, DecryptRequest, DecryptResponse, EncryptRequest,
    EncryptResponse, ErrorResponse, HealthResponse, MatrixRequest, MatrixResponse,
};
use common::ServiceError;
use serde::Serialize;
use tracing::{debug, warn};

const MISSING_PLAIN_TEXT: &str = "Missing plain_text or key";
const MISSING_CIPHER_TEXT: &str = "Missing cipher_text or key";
const MISSING_KEY: &str = "Missing key";

/// `POST /{cipher}/encrypt` — encrypt `plain_text` with the named cipher.
///
/// Caesar answers with `encrypted_message`, every other cipher with
/// `encrypted_text`.
pub async fn encrypt(
    Path(cipher): Path<String>,
    body: Result<Json<EncryptRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection),
    };
    respond(run_encrypt(&cipher, req))
}

/// `POST /{cipher}/decrypt` — decrypt `cipher_text` with the named cipher.
pub async fn decrypt(
    Path(cipher): Path<String>,
    body: Result<Json<DecryptRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection),
    };
    respond(run_decrypt(&cipher, req))
}

/// `POST /playfair/creatematrix` — return the 5×5 key square for `key`.
pub async fn playfair_matrix(body: Result<Json<MatrixRequest>, JsonRejection>) -> Response {
    let Json(req) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection),
    };
    respond(run_playfair_matrix(req))
}

/// `GET /ciphers` — list the available ciphers and the key each expects.
pub async fn list_ciphers() -> Json<CipherListResponse> {
    Json(CipherListResponse {
        ciphers: CipherKind::ALL.into_iter().map(CipherInfo::from).collect(),
    })
}

/// `GET /health` — liveness check.
///
/// The engine holds no state that could become unready, so this always
/// returns `200 OK` while the process is serving.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        ciphers: CipherKind::ALL.len(),
    })
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}

// ---------------------------------------------------------------------------
// Request validation and dispatch
// ---------------------------------------------------------------------------

fn run_encrypt(cipher: &str, req: EncryptRequest) -> Result<EncryptResponse, ServiceError> {
    let kind: CipherKind = cipher.parse()?;
    let (text, key) = require_inputs(kind, req.plain_text, req.key, MISSING_PLAIN_TEXT)?;
    debug!(cipher = %kind, chars = text.chars().count(), "encrypt");
    let ciphertext = kind.cipher().encrypt(&text, &key)?;
    Ok(EncryptResponse::for_cipher(kind, ciphertext))
}

fn run_decrypt(cipher: &str, req: DecryptRequest) -> Result<DecryptResponse, ServiceError> {
    let kind: CipherKind = cipher.parse()?;
    let (text, key) = require_inputs(kind, req.cipher_text, req.key, MISSING_CIPHER_TEXT)?;
    debug!(cipher = %kind, chars = text.chars().count(), "decrypt");
    let plaintext = kind.cipher().decrypt(&text, &key)?;
    Ok(DecryptResponse::for_cipher(kind, plaintext))
}

fn run_playfair_matrix(req: MatrixRequest) -> Result<MatrixResponse, ServiceError> {
    let key = match req.key {
        Some(k) if !k.is_empty() => k,
        _ => return Err(ServiceError::BadRequest(MISSING_KEY.into())),
    };
    let key = match &key {
        Key::Text(s) => s.as_str(),
        // Non-text keys can never be a keyword; let the builder word the error.
        Key::Integer(_) | Key::Unsupported => "",
    };
    let matrix = PlayfairMatrix::build(key)?;
    Ok(MatrixResponse::from(&matrix))
}

/// Check that both text and key were supplied.
///
/// Empty text counts as missing. An empty key counts as missing for
/// keyword ciphers; for integer ciphers it is left to fail key parsing.
fn require_inputs(
    kind: CipherKind,
    text: Option<String>,
    key: Option<Key>,
    message: &str,
) -> Result<(String, Key), ServiceError> {
    match (text, key) {
        (Some(text), Some(key))
            if !text.is_empty() && !(kind.key_kind() == KeyKind::Alphabetic && key.is_empty()) =>
        {
            Ok((text, key))
        }
        _ => Err(ServiceError::BadRequest(message.into())),
    }
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn respond<T: Serialize>(result: Result<T, ServiceError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => error_response(&e),
    }
}

fn error_response(e: &ServiceError) -> Response {
    warn!(code = e.code(), status = e.http_status(), "request rejected");
    let status = StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(e))).into_response()
}

/// Turn a JSON extractor rejection into an `{code, message}` body, keeping
/// the rejection's own status (400, 413, 415 or 422).
fn rejection_response(rejection: JsonRejection) -> Response {
    let status = rejection.status();
    warn!(status = status.as_u16(), "malformed request body");
    let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
        "payload_too_large"
    } else {
        "bad_request"
    };
    (status, Json(ErrorResponse::new(code, rejection.body_text()))).into_response()
}
