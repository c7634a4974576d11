//! Account lifecycle service
//!
//! Signup, verification, sign-in, lockout, and password recovery in one
//! place. Failure messages never reveal whether an identifier exists, except
//! for the signup conflict response, which names the colliding field on
//! purpose.

use std::sync::LazyLock;

use chrono::{Duration, NaiveDate, Utc};
use regex::Regex;
use tracing::{debug, info, instrument, warn};

use roam_common::auth::{
    generate_verification_code, generate_verification_token, hash_password, verify_password,
    CODE_TTL_MINUTES, MIN_PASSWORD_LENGTH,
};
use roam_common::AppError;
use roam_core::{
    age_between, AccountStatus, DomainError, Gender, Id, IssuedVerification, Role, User,
    VerificationChannel,
};

use crate::dto::{
    AvailabilityResponse, CheckAvailabilityRequest, ForgotPasswordRequest, FullProfileResponse,
    MessageResponse, NewAccountResponse, ResendCodeRequest, ResendEmailRequest,
    ResendPhoneRequest, ResetPasswordRequest, SigninRequest, SigninResponse, SignupRequest,
    SignupResponse, VerificationResultResponse, VerifiedAccountResponse, VerifyCodeRequest,
    VerifyPhoneRequest, VerifyResetCodeRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Minimum age to register, in years
const MIN_SIGNUP_AGE: i32 = 18;

/// Anti-enumeration reply for password recovery
const RESET_GENERIC_MESSAGE: &str =
    "If an account exists with this email, a password reset code will be sent";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));
static NICKNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{3,20}$").expect("nickname regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone regex"));

/// Validated and normalized signup input
#[derive(Debug, Clone, PartialEq)]
struct ValidSignup {
    fullname: String,
    nickname: String,
    email: String,
    password: String,
    phone_number: String,
    date_of_birth: Option<NaiveDate>,
    gender: Option<Gender>,
    method: VerificationChannel,
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

/// Apply the signup checks in their fixed order and normalize the input
///
/// Each rejectable condition gets its own `DomainError` so the response
/// names the offending field.
fn validate_signup(request: &SignupRequest, today: NaiveDate) -> Result<ValidSignup, DomainError> {
    let (Some(fullname), Some(nickname), Some(email), Some(password), Some(phone_number)) = (
        present(request.fullname.as_ref()),
        present(request.nickname.as_ref()),
        present(request.email.as_ref()),
        present(request.password.as_ref()),
        present(request.phone_number.as_ref()),
    ) else {
        return Err(DomainError::MissingRequiredFields);
    };

    let method = request
        .verification_method
        .as_deref()
        .and_then(VerificationChannel::parse)
        .ok_or(DomainError::InvalidVerificationMethod)?;

    if !EMAIL_RE.is_match(email) {
        return Err(DomainError::InvalidEmail);
    }

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    if !NICKNAME_RE.is_match(nickname) {
        return Err(DomainError::InvalidNickname);
    }

    // Punctuation is tolerated in the input but stripped before the check
    let bare_phone: String = phone_number
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '-'))
        .collect();
    if !PHONE_RE.is_match(&bare_phone) {
        return Err(DomainError::InvalidPhoneNumber);
    }

    if let Some(dob) = request.date_of_birth {
        if age_between(dob, today) < MIN_SIGNUP_AGE {
            return Err(DomainError::UnderMinimumAge);
        }
    }

    Ok(ValidSignup {
        fullname: fullname.to_string(),
        nickname: nickname.to_lowercase(),
        email: email.to_lowercase(),
        password: password.to_string(),
        phone_number: phone_number.to_string(),
        date_of_birth: request.date_of_birth,
        gender: request.gender,
        method,
    })
}

/// Pick the conflicting field of an existing account, in priority order:
/// email first, then nickname, then phone number
fn conflict_error(existing: &User, input: &ValidSignup) -> DomainError {
    if existing.email == input.email {
        DomainError::EmailAlreadyRegistered
    } else if existing.nickname == input.nickname {
        DomainError::NicknameAlreadyTaken
    } else {
        DomainError::PhoneAlreadyRegistered
    }
}

/// Require the account's role set to intersect the required set
pub fn authorize(user: &User, required: &[Role]) -> Result<(), AppError> {
    if required.iter().any(|role| user.has_role(*role)) {
        Ok(())
    } else {
        let names: Vec<&str> = required.iter().map(|r| r.as_str()).collect();
        Err(AppError::forbidden(format!(
            "User role is not authorized to access this route. Required roles: {}",
            names.join(", ")
        )))
    }
}

/// Account lifecycle service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // ========================================================================
    // Signup and verification
    // ========================================================================

    /// Probe whether a nickname, email, or phone number is still free
    #[instrument(skip(self, request))]
    pub async fn check_availability(
        &self,
        request: CheckAvailabilityRequest,
    ) -> ServiceResult<AvailabilityResponse> {
        let value = if request.field.is_lowercased() {
            request.value.to_lowercase()
        } else {
            request.value.clone()
        };

        let taken = self.ctx.user_repo().identity_taken(request.field, &value).await?;
        let field = request.field.as_str();

        Ok(AvailabilityResponse {
            available: !taken,
            message: if taken {
                format!("This {field} is already taken")
            } else {
                format!("This {field} is available")
            },
        })
    }

    /// Create a pending account and dispatch its first verification secret
    ///
    /// Dispatch failure is logged but does not fail the signup; the session
    /// token is issued regardless.
    #[instrument(skip(self, request))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<SignupResponse> {
        let today = Utc::now().date_naive();
        let input = validate_signup(&request, today)?;

        if let Some(existing) = self
            .ctx
            .user_repo()
            .find_conflicting(&input.email, &input.nickname, &input.phone_number)
            .await?
        {
            return Err(conflict_error(&existing, &input).into());
        }

        let password_hash =
            hash_password(&input.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let mut user = User::new(
            Id::generate(),
            input.fullname,
            input.nickname,
            input.email,
            input.phone_number,
        );
        user.date_of_birth = input.date_of_birth;
        user.gender = input.gender;
        user.verification.pending_method = Some(input.method);

        let code = match input.method {
            VerificationChannel::Email => generate_verification_token(),
            VerificationChannel::Phone => generate_verification_code(),
        };
        let verification = IssuedVerification {
            code,
            expires_at: Utc::now() + Duration::minutes(CODE_TTL_MINUTES),
            method: input.method,
        };

        self.ctx
            .user_repo()
            .create(&user, &password_hash, &verification)
            .await?;

        info!(user_id = %user.id, method = input.method.as_str(), "account created");

        let dispatch = match input.method {
            VerificationChannel::Email => {
                self.ctx
                    .notifier()
                    .send_verification_email(&user.email, &verification.code, &user.fullname)
                    .await
            }
            VerificationChannel::Phone => {
                self.ctx
                    .notifier()
                    .send_verification_sms(&user.phone_number, &verification.code)
                    .await
            }
        };
        if let Err(e) = dispatch {
            warn!(user_id = %user.id, error = %e, "verification dispatch failed at signup");
        }

        let token = self
            .ctx
            .jwt_service()
            .issue(user.id)
            .map_err(ServiceError::from)?;

        let message = match input.method {
            VerificationChannel::Email => {
                "Account created successfully. Please check your email for verification."
            }
            VerificationChannel::Phone => {
                "Account created successfully. Please check your phone for verification code."
            }
        };

        Ok(SignupResponse {
            message: message.to_string(),
            user: NewAccountResponse::from_user(&user, input.method),
            token,
        })
    }

    /// Verify with an identifier (email or phone) and the delivered code
    #[instrument(skip(self, request))]
    pub async fn verify_code(
        &self,
        request: VerifyCodeRequest,
    ) -> ServiceResult<VerificationResultResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_verification_code(request.identifier.trim(), &request.code)
            .await?
            .ok_or(DomainError::VerificationCodeInvalid)?;

        // The account's own pending method decides which flag flips
        let channel = user
            .verification
            .pending_method
            .ok_or(DomainError::VerificationCodeInvalid)?;

        self.finish_verification(user, channel, "Verification successful! Welcome to our platform!")
            .await
    }

    /// Verify via the token embedded in the email link
    #[instrument(skip(self, token))]
    pub async fn verify_email_token(
        &self,
        token: &str,
    ) -> ServiceResult<VerificationResultResponse> {
        if token.trim().is_empty() {
            return Err(ServiceError::validation("Verification token is required"));
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_email_token(token)
            .await?
            .ok_or(DomainError::VerificationCodeInvalid)?;

        self.finish_verification(
            user,
            VerificationChannel::Email,
            "Email verified successfully! Welcome to our platform.",
        )
        .await
    }

    /// Verify a phone number with its SMS code
    #[instrument(skip(self, request))]
    pub async fn verify_phone(
        &self,
        request: VerifyPhoneRequest,
    ) -> ServiceResult<VerificationResultResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_phone_code(request.phone_number.trim(), &request.code)
            .await?
            .ok_or(DomainError::VerificationCodeInvalid)?;

        self.finish_verification(
            user,
            VerificationChannel::Phone,
            "Phone verified successfully! Welcome to our platform.",
        )
        .await
    }

    /// Shared verification transition: flip the channel flag, promote the
    /// account, clear the secret, and send the welcome mail best-effort
    async fn finish_verification(
        &self,
        mut user: User,
        channel: VerificationChannel,
        message: &str,
    ) -> ServiceResult<VerificationResultResponse> {
        user.complete_verification(channel, Utc::now());
        self.ctx.user_repo().apply_verification(&user).await?;

        info!(user_id = %user.id, channel = channel.as_str(), "verification completed");

        if let Err(e) = self
            .ctx
            .notifier()
            .send_welcome_email(&user.email, &user.fullname)
            .await
        {
            warn!(user_id = %user.id, error = %e, "welcome email failed");
        }

        Ok(VerificationResultResponse {
            message: message.to_string(),
            user: VerifiedAccountResponse::from(&user),
        })
    }

    // ========================================================================
    // Resends
    // ========================================================================

    /// Resend a verification code to whichever channel the identifier names
    ///
    /// Unlike at signup, a dispatch failure here is surfaced to the caller.
    #[instrument(skip(self, request))]
    pub async fn resend_code(&self, request: ResendCodeRequest) -> ServiceResult<MessageResponse> {
        let identifier = request.identifier.trim();
        let is_email = identifier.contains('@');

        let user = if is_email {
            self.ctx.user_repo().find_by_email(identifier).await?
        } else {
            self.ctx.user_repo().find_by_phone(identifier).await?
        }
        .ok_or_else(|| ServiceError::not_found("User", identifier))?;

        if user.is_fully_verified() {
            return Err(DomainError::AlreadyVerified("Account").into());
        }

        let method = user.verification.pending_method.unwrap_or(if is_email {
            VerificationChannel::Email
        } else {
            VerificationChannel::Phone
        });

        self.issue_and_dispatch_code(&user, method).await?;
        Ok(MessageResponse::new("Verification code sent successfully"))
    }

    /// Resend the email verification code
    #[instrument(skip(self, request))]
    pub async fn resend_email(&self, request: ResendEmailRequest) -> ServiceResult<MessageResponse> {
        let email = request.email.trim();
        let user = self
            .ctx
            .user_repo()
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", email))?;

        if user.verification.email {
            return Err(DomainError::AlreadyVerified("Email").into());
        }

        self.issue_and_dispatch_code(&user, VerificationChannel::Email)
            .await?;
        Ok(MessageResponse::new("Verification code sent successfully"))
    }

    /// Resend the phone verification code
    #[instrument(skip(self, request))]
    pub async fn resend_phone(&self, request: ResendPhoneRequest) -> ServiceResult<MessageResponse> {
        let phone = request.phone_number.trim();
        let user = self
            .ctx
            .user_repo()
            .find_by_phone(phone)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", phone))?;

        if user.verification.phone {
            return Err(DomainError::AlreadyVerified("Phone").into());
        }

        self.issue_and_dispatch_code(&user, VerificationChannel::Phone)
            .await?;
        Ok(MessageResponse::new("Verification code sent successfully"))
    }

    /// Overwrite the outstanding secret with a fresh code and dispatch it,
    /// surfacing dispatch failure as an error
    async fn issue_and_dispatch_code(
        &self,
        user: &User,
        method: VerificationChannel,
    ) -> ServiceResult<()> {
        let verification = IssuedVerification {
            code: generate_verification_code(),
            expires_at: Utc::now() + Duration::minutes(CODE_TTL_MINUTES),
            method,
        };
        self.ctx
            .user_repo()
            .store_verification(user.id, &verification)
            .await?;

        let dispatch = match method {
            VerificationChannel::Email => {
                self.ctx
                    .notifier()
                    .send_verification_email(&user.email, &verification.code, &user.fullname)
                    .await
            }
            VerificationChannel::Phone => {
                self.ctx
                    .notifier()
                    .send_verification_sms(&user.phone_number, &verification.code)
                    .await
            }
        };

        dispatch.map_err(|e| {
            warn!(user_id = %user.id, error = %e, "verification resend dispatch failed");
            ServiceError::from(AppError::dispatch("Failed to send verification code"))
        })
    }

    // ========================================================================
    // Sign-in
    // ========================================================================

    /// Authenticate an identifier/password pair and issue a session token
    ///
    /// Check order is contractual: lock, then moderation status, then the
    /// credential, then pending verification. Unknown identifier and wrong
    /// password share one generic message.
    #[instrument(skip(self, request), fields(identifier = %request.identifier))]
    pub async fn signin(&self, request: SigninRequest) -> ServiceResult<SigninResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_identifier(request.identifier.trim())
            .await?
            .ok_or_else(|| {
                debug!("sign-in failed: unknown identifier");
                ServiceError::from(AppError::InvalidCredentials)
            })?;

        let now = Utc::now();
        if user.is_locked(now) {
            return Err(AppError::Locked {
                locked_until: user.locked_until,
            }
            .into());
        }

        match user.account_status {
            AccountStatus::Suspended => {
                return Err(AppError::forbidden(
                    "Your account has been suspended. Please contact support",
                )
                .into());
            }
            AccountStatus::Banned => {
                return Err(AppError::forbidden(
                    "Your account has been banned. Please contact support.",
                )
                .into());
            }
            AccountStatus::Deactivated => {
                return Err(AppError::forbidden(
                    "Your account has been deactivated. Please contact support to reactivate",
                )
                .into());
            }
            AccountStatus::Pending | AccountStatus::Active => {}
        }

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "sign-in failed: no credential on record");
                ServiceError::from(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            let attempt = self.ctx.user_repo().record_failed_login(user.id).await?;
            warn!(
                user_id = %user.id,
                attempts = attempt.attempts,
                locked = attempt.locked_until.is_some(),
                "sign-in failed: invalid password"
            );
            return Err(AppError::InvalidCredentials.into());
        }

        if user.account_status == AccountStatus::Pending {
            return Err(AppError::PendingVerification {
                method: user.verification.pending_method,
            }
            .into());
        }

        self.ctx.user_repo().record_login(user.id).await?;

        let token = self
            .ctx
            .jwt_service()
            .issue(user.id)
            .map_err(ServiceError::from)?;

        info!(user_id = %user.id, "sign-in successful");

        Ok(SigninResponse {
            message: "Sign in successful".to_string(),
            user: (&user).into(),
            token,
        })
    }

    // ========================================================================
    // Password recovery
    // ========================================================================

    /// Start password recovery
    ///
    /// The reply is identical whether or not the account exists. A dispatch
    /// failure, however, is a hard error - the caller must know the code
    /// never left the building.
    #[instrument(skip(self, request))]
    pub async fn forgot_password(
        &self,
        request: ForgotPasswordRequest,
    ) -> ServiceResult<MessageResponse> {
        let Some(user) = self.ctx.user_repo().find_by_email(request.email.trim()).await? else {
            return Ok(MessageResponse::new(RESET_GENERIC_MESSAGE));
        };

        let code = generate_verification_code();
        let expires_at = Utc::now() + Duration::minutes(CODE_TTL_MINUTES);
        self.ctx
            .user_repo()
            .store_password_reset(user.id, &code, expires_at)
            .await?;

        self.ctx
            .notifier()
            .send_password_reset_email(&user.email, &code, &user.fullname)
            .await
            .map_err(|e| {
                warn!(user_id = %user.id, error = %e, "password reset dispatch failed");
                ServiceError::from(AppError::dispatch("Failed to send password reset email"))
            })?;

        Ok(MessageResponse::new(RESET_GENERIC_MESSAGE))
    }

    /// Check a reset code without consuming it
    #[instrument(skip(self, request))]
    pub async fn verify_reset_code(
        &self,
        request: VerifyResetCodeRequest,
    ) -> ServiceResult<MessageResponse> {
        self.ctx
            .user_repo()
            .find_by_reset_code(request.email.trim(), &request.code)
            .await?
            .ok_or(DomainError::ResetCodeInvalid)?;

        Ok(MessageResponse::new("Reset code verified successfully"))
    }

    /// Replace the credential, clearing the reset secret and any lock
    #[instrument(skip(self, request))]
    pub async fn reset_password(
        &self,
        request: ResetPasswordRequest,
    ) -> ServiceResult<MessageResponse> {
        if request.new_password.len() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            }
            .into());
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_reset_code(request.email.trim(), &request.code)
            .await?
            .ok_or(DomainError::ResetCodeInvalid)?;

        let password_hash = hash_password(&request.new_password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        self.ctx
            .user_repo()
            .replace_password(user.id, &password_hash)
            .await?;

        info!(user_id = %user.id, "password reset completed");

        Ok(MessageResponse::new(
            "Password reset successfully. You can now sign in with your new password.",
        ))
    }

    // ========================================================================
    // Session resolution (access guard)
    // ========================================================================

    /// Resolve the current account from a session token
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Id) -> ServiceResult<FullProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(FullProfileResponse::from(&user))
    }

    /// Authenticate a bearer token and resolve its account
    ///
    /// Expired and malformed tokens fail distinctly; a resolved account must
    /// be live and active.
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<User> {
        let claims = self.ctx.jwt_service().verify(token)?;
        let user_id = claims.user_id()?;

        let user = self
            .ctx
            .user_repo()
            .find_any_by_id(user_id)
            .await?
            .ok_or(AppError::UnknownAccount)?;

        if user.is_deleted() {
            return Err(AppError::forbidden("Account has been deleted").into());
        }

        if user.account_status != AccountStatus::Active {
            return Err(
                AppError::forbidden(format!("Account is {}", user.account_status)).into(),
            );
        }

        Ok(user)
    }

    /// Like [`authenticate`](Self::authenticate) but never fails: any
    /// resolution problem degrades to an anonymous request
    #[instrument(skip(self, token))]
    pub async fn authenticate_optional(&self, token: &str) -> Option<User> {
        match self.authenticate(token).await {
            Ok(user) => Some(user),
            Err(e) => {
                debug!(error = %e, "optional auth: proceeding unauthenticated");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SignupRequest {
        SignupRequest {
            fullname: Some("Ana Lee".to_string()),
            nickname: Some("Ana_99".to_string()),
            email: Some("Ana@x.com".to_string()),
            password: Some("secret1".to_string()),
            phone_number: Some("+15551234567".to_string()),
            date_of_birth: None,
            gender: None,
            verification_method: Some("email".to_string()),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_valid_signup_normalizes() {
        let input = validate_signup(&request(), today()).unwrap();
        assert_eq!(input.nickname, "ana_99");
        assert_eq!(input.email, "ana@x.com");
        assert_eq!(input.method, VerificationChannel::Email);
    }

    #[test]
    fn test_missing_fields_rejected_first() {
        // Both the fullname and the verification method are bad; the
        // missing field must win.
        let mut r = request();
        r.fullname = None;
        r.verification_method = Some("carrier-pigeon".to_string());
        assert!(matches!(
            validate_signup(&r, today()),
            Err(DomainError::MissingRequiredFields)
        ));

        let mut r = request();
        r.password = Some("   ".to_string());
        assert!(matches!(
            validate_signup(&r, today()),
            Err(DomainError::MissingRequiredFields)
        ));
    }

    #[test]
    fn test_method_checked_before_email_format() {
        let mut r = request();
        r.email = Some("not-an-email".to_string());
        r.verification_method = None;
        assert!(matches!(
            validate_signup(&r, today()),
            Err(DomainError::InvalidVerificationMethod)
        ));
    }

    #[test]
    fn test_email_format() {
        let mut r = request();
        r.email = Some("ana@x".to_string());
        assert!(matches!(
            validate_signup(&r, today()),
            Err(DomainError::InvalidEmail)
        ));

        let mut r = request();
        r.email = Some("a na@x.com".to_string());
        assert!(matches!(
            validate_signup(&r, today()),
            Err(DomainError::InvalidEmail)
        ));
    }

    #[test]
    fn test_short_password() {
        let mut r = request();
        r.password = Some("five5".to_string());
        assert!(matches!(
            validate_signup(&r, today()),
            Err(DomainError::PasswordTooShort { min: 6 })
        ));
    }

    #[test]
    fn test_nickname_pattern() {
        for bad in ["ab", "a".repeat(21).as_str(), "ana lee", "ana-99"] {
            let mut r = request();
            r.nickname = Some(bad.to_string());
            assert!(
                matches!(validate_signup(&r, today()), Err(DomainError::InvalidNickname)),
                "nickname {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_phone_punctuation_is_stripped() {
        let mut r = request();
        r.phone_number = Some("+1 (555) 123-4567".to_string());
        let input = validate_signup(&r, today()).unwrap();
        // Stored as supplied, validated bare
        assert_eq!(input.phone_number, "+1 (555) 123-4567");
    }

    #[test]
    fn test_phone_rejected() {
        for bad in ["0155512345", "+0155512345", "phone", "+1555123456789012345"] {
            let mut r = request();
            r.phone_number = Some(bad.to_string());
            assert!(
                matches!(
                    validate_signup(&r, today()),
                    Err(DomainError::InvalidPhoneNumber)
                ),
                "phone {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_age_boundary() {
        // 18th birthday is tomorrow: rejected
        let mut r = request();
        r.date_of_birth = NaiveDate::from_ymd_opt(2007, 6, 16);
        assert!(matches!(
            validate_signup(&r, today()),
            Err(DomainError::UnderMinimumAge)
        ));

        // 18th birthday is today: accepted
        let mut r = request();
        r.date_of_birth = NaiveDate::from_ymd_opt(2007, 6, 15);
        assert!(validate_signup(&r, today()).is_ok());
    }

    #[test]
    fn test_conflict_priority() {
        let input = validate_signup(&request(), today()).unwrap();

        let mut existing = User::new(
            Id::generate(),
            "Other".to_string(),
            "ana_99".to_string(),
            "ana@x.com".to_string(),
            "+15551234567".to_string(),
        );

        // Everything collides: email wins
        assert!(matches!(
            conflict_error(&existing, &input),
            DomainError::EmailAlreadyRegistered
        ));

        // Nickname and phone collide: nickname wins
        existing.email = "other@x.com".to_string();
        assert!(matches!(
            conflict_error(&existing, &input),
            DomainError::NicknameAlreadyTaken
        ));

        // Only the phone collides
        existing.nickname = "other_1".to_string();
        assert!(matches!(
            conflict_error(&existing, &input),
            DomainError::PhoneAlreadyRegistered
        ));
    }

    #[test]
    fn test_authorize_requires_intersection() {
        let mut user = User::new(
            Id::generate(),
            "Ana Lee".to_string(),
            "ana_99".to_string(),
            "ana@x.com".to_string(),
            "+15551234567".to_string(),
        );
        user.roles = vec![Role::Passenger];

        assert!(authorize(&user, &[Role::Passenger]).is_ok());
        assert!(authorize(&user, &[Role::Driver, Role::Passenger]).is_ok());

        let denied = authorize(&user, &[Role::Driver, Role::Host]).unwrap_err();
        assert_eq!(denied.status_code(), 403);
        assert!(denied.to_string().contains("driver, host"));
    }
}
