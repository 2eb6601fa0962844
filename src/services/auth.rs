use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Token decode glue for the external auth boundary. Issuance (login,
/// registration) lives in the auth service that fronts this one; here we
/// only verify the HS256 signature and pull the subject id out.
#[derive(Clone)]
pub struct AuthService {
    jwt_secret: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: usize,
    exp: usize,
}

impl AuthService {
    pub fn new(jwt_secret: String) -> Self {
        Self { jwt_secret }
    }

    pub fn decode_token<T: Into<String>>(&self, token: T) -> Result<Uuid> {
        let decoded = decode::<Claims>(
            &token.into(),
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| Error::Unauthorized)?;

        Uuid::parse_str(&decoded.claims.sub).map_err(|_| Error::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    #[test]
    fn decodes_the_subject_it_issued() {
        let service = AuthService::new("secret".to_string());
        let user_id = Uuid::now_v7();

        let now = chrono::Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("secret".as_bytes()),
        )
        .unwrap();

        assert_eq!(service.decode_token(token).unwrap(), user_id);
    }

    #[test]
    fn rejects_garbage_tokens() {
        let service = AuthService::new("secret".to_string());
        assert!(matches!(
            service.decode_token("not-a-jwt"),
            Err(Error::Unauthorized)
        ));
    }
}
