//! Service-account token exchange (OAuth 2.0 JWT bearer grant).

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use super::credentials::ServiceAccountKey;
use super::error::SubmitError;

/// Scopes requested for the access token.
pub const SCOPES: &str =
    "https://www.googleapis.com/auth/spreadsheets https://www.googleapis.com/auth/drive";

const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime of a signed assertion, in seconds. Google caps this at one hour.
const ASSERTION_LIFETIME: i64 = 3600;

/// Claims of the signed assertion sent to the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Claims for `key`, issued at `now` (Unix seconds).
    pub fn new(key: &ServiceAccountKey, now: i64) -> Self {
        Self {
            iss: key.client_email.clone(),
            scope: SCOPES.to_string(),
            aud: key.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Signs `claims` with the key's RSA private key (RS256).
pub fn sign_assertion(key: &ServiceAccountKey, claims: &Claims) -> Result<String, SubmitError> {
    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| SubmitError::InvalidCredentials(format!("private key: {e}")))?;
    jsonwebtoken::encode(&Header::new(Algorithm::RS256), claims, &encoding_key)
        .map_err(|e| SubmitError::InvalidCredentials(format!("signing assertion: {e}")))
}

/// Exchanges a signed assertion for an access token at the key's token endpoint.
pub async fn fetch_access_token(
    http: &reqwest::Client,
    key: &ServiceAccountKey,
    now: i64,
) -> Result<String, SubmitError> {
    let assertion = sign_assertion(key, &Claims::new(key, now))?;
    let params = [("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())];

    tracing::debug!(token_uri = %key.token_uri, "requesting access token");

    let response = http
        .post(&key.token_uri)
        .form(&params)
        .send()
        .await
        .map_err(|e| SubmitError::Auth(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SubmitError::Auth(format!("{} {}", status.as_u16(), body.trim())));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| SubmitError::Auth(e.to_string()))?;
    Ok(token.access_token)
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{DecodingKey, Validation};

    use super::*;

    const TEST_KEY: &str = include_str!("testdata/test_key.pem");
    const TEST_PUBLIC_KEY: &str = include_str!("testdata/test_key.pub.pem");

    fn key() -> ServiceAccountKey {
        ServiceAccountKey {
            client_email: "svc@proj.iam.gserviceaccount.com".into(),
            private_key: TEST_KEY.into(),
            token_uri: "https://oauth2.googleapis.com/token".into(),
        }
    }

    #[test]
    fn claims_cover_one_hour() {
        let claims = Claims::new(&key(), 1_700_000_000);
        assert_eq!(claims.iss, "svc@proj.iam.gserviceaccount.com");
        assert_eq!(claims.aud, "https://oauth2.googleapis.com/token");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(claims.scope.contains("auth/spreadsheets"));
        assert!(claims.scope.contains("auth/drive"));
    }

    #[test]
    fn assertion_is_rs256_jwt() {
        let claims = Claims::new(&key(), 1_700_000_000);
        let jwt = sign_assertion(&key(), &claims).unwrap();
        assert_eq!(jwt.split('.').count(), 3);

        let header = jsonwebtoken::decode_header(&jwt).unwrap();
        assert_eq!(header.alg, Algorithm::RS256);

        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = false;
        validation.set_audience(&["https://oauth2.googleapis.com/token"]);
        let public_key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap();
        let decoded = jsonwebtoken::decode::<Claims>(&jwt, &public_key, &validation).unwrap();
        assert_eq!(decoded.claims, claims);
    }

    #[test]
    fn bad_private_key_is_invalid_credentials() {
        let mut key = key();
        key.private_key = "not a pem".into();
        let claims = Claims::new(&key, 0);
        let err = sign_assertion(&key, &claims).unwrap_err();
        assert!(matches!(err, SubmitError::InvalidCredentials(_)));
    }
}
