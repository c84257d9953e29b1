//! Authentication service: registration, login and identity resolution

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{LoginRequest, RegisterRequest, User, UserClaims},
    repository::Repository,
};

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate by email and password, returning a JWT token
    ///
    /// The same message covers an unknown email, a wrong password and an
    /// inactive account, so callers cannot probe which emails exist.
    pub fn authenticate(&self, request: &LoginRequest) -> AppResult<(String, User)> {
        let user = {
            let db = self.repository.read();
            db.users
                .get_by_email(&request.email)
                .cloned()
                .ok_or_else(|| {
                    AppError::Authentication("Invalid email or password".to_string())
                })?
        };

        if !verify_password(&user.password_hash, &request.password)? {
            return Err(AppError::Authentication(
                "Invalid email or password".to_string(),
            ));
        }

        if !user.is_active {
            return Err(AppError::Authentication(
                "Invalid email or password".to_string(),
            ));
        }

        let token = self.create_token(&user)?;
        Ok((token, user))
    }

    /// Register a new user and log them in
    pub fn register(&self, request: &RegisterRequest) -> AppResult<(String, User)> {
        if request.password.len() < self.config.min_password_length {
            return Err(AppError::Validation(format!(
                "Password must be at least {} characters",
                self.config.min_password_length
            )));
        }

        let password_hash = hash_password(&request.password)?;

        // Duplicate check and insert share one guard, so two concurrent
        // registrations of the same email cannot both pass the check.
        let user = {
            let mut db = self.repository.write();
            if db.users.get_by_email(&request.email).is_some() {
                return Err(AppError::Conflict(
                    "User with this email already exists".to_string(),
                ));
            }

            let user = User {
                id: Uuid::new_v4(),
                email: request.email.clone(),
                password_hash,
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                created_at: Utc::now(),
                is_active: true,
            };
            db.users.insert(user.clone());
            user
        };

        let token = self.create_token(&user)?;
        Ok((token, user))
    }

    /// Resolve a bearer token to its user
    ///
    /// The token alone is not enough: the user must still exist and still
    /// be active at request time.
    pub fn resolve_identity(&self, token: &str) -> AppResult<User> {
        let claims = UserClaims::from_token(token, &self.config.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        let db = self.repository.read();
        let user = db
            .users
            .get(&claims.user_id)
            .ok_or_else(|| AppError::Authentication("Invalid or inactive user".to_string()))?;
        if !user.is_active {
            return Err(AppError::Authentication(
                "Invalid or inactive user".to_string(),
            ));
        }
        Ok(user.clone())
    }

    /// Create a JWT token for a user
    fn create_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: user.email.clone(),
            user_id: user.id,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Database;

    fn service() -> AuthService {
        AuthService::new(Repository::new(Database::default()), AuthConfig::default())
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "correct-horse".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
        }
    }

    #[test]
    fn register_then_login_roundtrip() {
        let service = service();
        let (_, registered) = service.register(&register_request("a@example.com")).unwrap();

        let (token, user) = service
            .authenticate(&LoginRequest {
                email: "a@example.com".to_string(),
                password: "correct-horse".to_string(),
            })
            .unwrap();

        assert_eq!(user.id, registered.id);
        let resolved = service.resolve_identity(&token).unwrap();
        assert_eq!(resolved.id, registered.id);
    }

    #[test]
    fn wrong_password_and_unknown_email_fail_alike() {
        let service = service();
        service.register(&register_request("a@example.com")).unwrap();

        let wrong = service.authenticate(&LoginRequest {
            email: "a@example.com".to_string(),
            password: "wrong".to_string(),
        });
        let unknown = service.authenticate(&LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "correct-horse".to_string(),
        });

        for result in [wrong, unknown] {
            match result {
                Err(AppError::Authentication(msg)) => {
                    assert_eq!(msg, "Invalid email or password")
                }
                other => panic!("expected authentication error, got {:?}", other.map(|_| ())),
            }
        }
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let service = service();
        service.register(&register_request("a@example.com")).unwrap();

        let second = service.register(&register_request("a@example.com"));
        assert!(matches!(second, Err(AppError::Conflict(_))));
    }

    #[test]
    fn short_password_is_rejected() {
        let service = service();
        let mut request = register_request("a@example.com");
        request.password = "short".to_string();

        assert!(matches!(
            service.register(&request),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn garbage_token_does_not_resolve() {
        let service = service();
        assert!(matches!(
            service.resolve_identity("not-a-token"),
            Err(AppError::Authentication(_))
        ));
    }
}
