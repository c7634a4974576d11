//! User row <-> entity mapper

use roam_core::{
    AccountStatus, DomainError, Gender, Id, Role, User, VerificationChannel, VerificationState,
};

use crate::models::UserModel;

/// Error for a stored string that no longer parses as its domain enum
pub(crate) fn bad_enum(column: &str, value: &str) -> DomainError {
    DomainError::DatabaseError(format!("invalid {column} value in row: {value}"))
}

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let account_status = AccountStatus::parse(&model.account_status)
            .ok_or_else(|| bad_enum("account_status", &model.account_status))?;

        let gender = model
            .gender
            .as_deref()
            .map(|g| Gender::parse(g).ok_or_else(|| bad_enum("gender", g)))
            .transpose()?;

        let pending_method = model
            .verification_method
            .as_deref()
            .map(|m| VerificationChannel::parse(m).ok_or_else(|| bad_enum("verification_method", m)))
            .transpose()?;

        let roles = model
            .roles
            .iter()
            .map(|r| Role::parse(r).ok_or_else(|| bad_enum("roles", r)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(User {
            id: Id::from_uuid(model.id),
            fullname: model.fullname,
            nickname: model.nickname,
            email: model.email,
            phone_number: model.phone_number,
            date_of_birth: model.date_of_birth,
            gender,
            bio: model.bio,
            profile_pic: model.profile_pic,
            cover_photo: model.cover_photo,
            current_location: model.current_location.map(|l| l.0),
            roles,
            preferences: model.preferences.0,
            privacy: model.privacy.0,
            wallet: model.wallet.0,
            driver_profile: model.driver_profile.0,
            passenger_profile: model.passenger_profile.0,
            host_profile: model.host_profile.0,
            stats: model.stats.0,
            verification: VerificationState {
                email: model.verification_email,
                phone: model.verification_phone,
                identity: model.verification_identity,
                verified_at: model.verified_at,
                pending_method,
            },
            trust_score: model.trust_score,
            account_status,
            is_onboarded: model.is_onboarded,
            onboarding_step: model.onboarding_step,
            failed_login_attempts: model.failed_login_attempts,
            locked_until: model.locked_until,
            blocked_users: model.blocked_users.into_iter().map(Id::from_uuid).collect(),
            last_login: model.last_login,
            last_active: model.last_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn test_model() -> UserModel {
        UserModel {
            id: Uuid::new_v4(),
            fullname: "Ana Lee".to_string(),
            nickname: "ana_99".to_string(),
            email: "ana@x.com".to_string(),
            phone_number: "+15551234567".to_string(),
            date_of_birth: None,
            gender: Some("female".to_string()),
            bio: String::new(),
            profile_pic: String::new(),
            cover_photo: String::new(),
            current_location: None,
            roles: vec!["driver".to_string(), "traveler".to_string()],
            preferences: Json(roam_core::Preferences::default()),
            privacy: Json(roam_core::PrivacySettings::default()),
            wallet: Json(roam_core::Wallet::default()),
            driver_profile: Json(roam_core::DriverProfile::default()),
            passenger_profile: Json(roam_core::PassengerProfile::default()),
            host_profile: Json(roam_core::HostProfile::default()),
            stats: Json(roam_core::TravelStats::default()),
            verification_email: true,
            verification_phone: false,
            verification_identity: false,
            verified_at: Some(Utc::now()),
            verification_method: None,
            trust_score: 20,
            account_status: "active".to_string(),
            is_onboarded: false,
            onboarding_step: 0,
            failed_login_attempts: 0,
            locked_until: None,
            blocked_users: Vec::new(),
            last_login: None,
            last_active: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn test_maps_enums() {
        let user = User::try_from(test_model()).unwrap();
        assert_eq!(user.account_status, AccountStatus::Active);
        assert_eq!(user.gender, Some(Gender::Female));
        assert_eq!(user.roles, vec![Role::Driver, Role::Traveler]);
        assert!(user.verification.email);
        assert!(!user.verification.phone);
    }

    #[test]
    fn test_rejects_unknown_status() {
        let mut model = test_model();
        model.account_status = "frozen".to_string();
        assert!(User::try_from(model).is_err());
    }

    #[test]
    fn test_rejects_unknown_role() {
        let mut model = test_model();
        model.roles = vec!["pilot".to_string()];
        assert!(User::try_from(model).is_err());
    }
}
