//! Authentication utilities

mod codes;
mod jwt;
mod password;

pub use codes::{
    generate_verification_code, generate_verification_token, CODE_TTL_MINUTES,
};
pub use jwt::{Claims, JwtService, DEFAULT_TOKEN_EXPIRY};
pub use password::{hash_password, verify_password, PasswordService, MIN_PASSWORD_LENGTH};
