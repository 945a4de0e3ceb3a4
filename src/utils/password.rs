use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Hashes `password` into an argon2 PHC string.
pub fn hash(password: impl Into<String>) -> Result<String, argon2::password_hash::Error> {
    let password = password.into();
    if password.is_empty() {
        return Err(argon2::password_hash::Error::Password);
    }

    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hashed| hashed.to_string())
}

/// Checks `password` against a stored PHC string. A malformed hash is an
/// error, a wrong password is `Ok(false)`.
pub fn compare(password: &str, hashed_password: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hashed_password)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_salted_and_verifiable() {
        let first = hash("password123").unwrap();
        let second = hash("password123").unwrap();

        assert_ne!(first, second);
        assert!(first.starts_with("$argon2"));
        assert!(compare("password123", &first).unwrap());
        assert!(!compare("password124", &first).unwrap());
    }

    #[test]
    fn empty_password_is_rejected() {
        assert!(hash("").is_err());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(compare("password123", "not-a-phc-string").is_err());
    }
}
