//! Request and response types for the public HTTP API.
//!
//! Field names follow the JSON bodies the web front-end already sends and
//! expects: `plain_text` / `cipher_text` in, `encrypted_*` / `decrypted_*` out.

use classic_cipher::{CipherKind, Key, KeyKind, PlayfairMatrix};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Encrypt / decrypt endpoints
// ---------------------------------------------------------------------------

/// Request body for `POST /{cipher}/encrypt`.
///
/// Both fields are optional at the JSON level so that a missing value is
/// reported as a 400 with a readable message rather than a parse rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncryptRequest {
    /// Text to encrypt.
    #[serde(default)]
    pub plain_text: Option<String>,
    /// Cipher key: a JSON number or string.
    #[serde(default)]
    pub key: Option<Key>,
}

/// Request body for `POST /{cipher}/decrypt`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecryptRequest {
    /// Text to decrypt.
    #[serde(default)]
    pub cipher_text: Option<String>,
    /// Cipher key: a JSON number or string.
    #[serde(default)]
    pub key: Option<Key>,
}

/// Successful response body for `POST /{cipher}/encrypt`.
///
/// Caesar answers with `encrypted_message`; every other cipher with
/// `encrypted_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EncryptResponse {
    Message { encrypted_message: String },
    Text { encrypted_text: String },
}

impl EncryptResponse {
    /// Wrap `ciphertext` in the field name `kind` uses.
    pub fn for_cipher(kind: CipherKind, ciphertext: String) -> Self {
        match kind {
            CipherKind::Caesar => EncryptResponse::Message {
                encrypted_message: ciphertext,
            },
            _ => EncryptResponse::Text {
                encrypted_text: ciphertext,
            },
        }
    }

    /// The ciphertext, whichever field carries it.
    pub fn ciphertext(&self) -> &str {
        match self {
            EncryptResponse::Message { encrypted_message } => encrypted_message,
            EncryptResponse::Text { encrypted_text } => encrypted_text,
        }
    }
}

/// Successful response body for `POST /{cipher}/decrypt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DecryptResponse {
    Message { decrypted_message: String },
    Text { decrypted_text: String },
}

impl DecryptResponse {
    /// Wrap `plaintext` in the field name `kind` uses.
    pub fn for_cipher(kind: CipherKind, plaintext: String) -> Self {
        match kind {
            CipherKind::Caesar => DecryptResponse::Message {
                decrypted_message: plaintext,
            },
            _ => DecryptResponse::Text {
                decrypted_text: plaintext,
            },
        }
    }

    /// The plaintext, whichever field carries it.
    pub fn plaintext(&self) -> &str {
        match self {
            DecryptResponse::Message { decrypted_message } => decrypted_message,
            DecryptResponse::Text { decrypted_text } => decrypted_text,
        }
    }
}

// ---------------------------------------------------------------------------
// Playfair matrix endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /playfair/creatematrix`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatrixRequest {
    #[serde(default)]
    pub key: Option<Key>,
}

/// Response body for `POST /playfair/creatematrix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixResponse {
    /// Five rows of five single-letter strings.
    pub playfair_matrix: Vec<Vec<char>>,
}

impl From<&PlayfairMatrix> for MatrixResponse {
    fn from(matrix: &PlayfairMatrix) -> Self {
        Self {
            playfair_matrix: matrix.rows().iter().map(|row| row.to_vec()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

/// One entry of `GET /ciphers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherInfo {
    /// Human-readable name, e.g. `"Rail Fence"`.
    pub name: String,
    /// Path segment used in routes, e.g. `"railfence"`.
    pub slug: CipherKind,
    /// Whether the key is an integer or a keyword.
    pub key_kind: KeyKind,
}

impl From<CipherKind> for CipherInfo {
    fn from(kind: CipherKind) -> Self {
        Self {
            name: kind.display_name().to_owned(),
            slug: kind,
            key_kind: kind.key_kind(),
        }
    }
}

/// Response body for `GET /ciphers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CipherListResponse {
    pub ciphers: Vec<CipherInfo>,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"bad_request"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&crate::ServiceError> for ErrorResponse {
    fn from(e: &crate::ServiceError) -> Self {
        Self::new(e.code(), e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status. Always `"ok"` while the process is serving.
    pub status: String,
    /// Number of ciphers the service exposes.
    pub ciphers: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encrypt_request_accepts_number_or_string_key() {
        let req: EncryptRequest =
            serde_json::from_value(json!({"plain_text": "HELLO", "key": 3})).unwrap();
        assert_eq!(req.key, Some(Key::Integer(3)));

        let req: EncryptRequest =
            serde_json::from_value(json!({"plain_text": "HELLO", "key": "LEMON"})).unwrap();
        assert_eq!(req.key, Some(Key::Text("LEMON".into())));
    }

    #[test]
    fn missing_fields_deserialise_as_none() {
        let req: DecryptRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.cipher_text.is_none());
        assert!(req.key.is_none());
    }

    #[test]
    fn caesar_uses_message_field_names() {
        let enc = EncryptResponse::for_cipher(CipherKind::Caesar, "BCD".into());
        assert_eq!(serde_json::to_value(&enc).unwrap(), json!({"encrypted_message": "BCD"}));
        let dec = DecryptResponse::for_cipher(CipherKind::Caesar, "ABC".into());
        assert_eq!(serde_json::to_value(&dec).unwrap(), json!({"decrypted_message": "ABC"}));
    }

    #[test]
    fn other_ciphers_use_text_field_names() {
        let enc = EncryptResponse::for_cipher(CipherKind::Vigenere, "LXF".into());
        assert_eq!(serde_json::to_value(&enc).unwrap(), json!({"encrypted_text": "LXF"}));
        let dec: DecryptResponse =
            serde_json::from_value(json!({"decrypted_text": "ATT"})).unwrap();
        assert_eq!(dec.plaintext(), "ATT");
    }

    #[test]
    fn matrix_response_shape() {
        let m = PlayfairMatrix::build("MONARCHY").unwrap();
        let body = serde_json::to_value(MatrixResponse::from(&m)).unwrap();
        assert_eq!(body["playfair_matrix"][0], json!(["M", "O", "N", "A", "R"]));
        assert_eq!(body["playfair_matrix"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn cipher_info_from_kind() {
        let info = CipherInfo::from(CipherKind::RailFence);
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({"name": "Rail Fence", "slug": "railfence", "key_kind": "integer"})
        );
    }

    #[test]
    fn error_response_from_service_error() {
        let e = crate::ServiceError::BadRequest("Missing plain_text or key".into());
        let body = ErrorResponse::from(&e);
        assert_eq!(body.code, "bad_request");
        assert_eq!(body.message, "Missing plain_text or key");
    }
}
