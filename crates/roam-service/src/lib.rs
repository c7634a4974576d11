//! # roam-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    ApiResponse, AvailabilityResponse, BookingResponse, CheckAvailabilityRequest,
    CompleteProfileResponse,
    FullProfileResponse, HealthResponse, MessageResponse, ProfileStatsResponse, ProfileView,
    ReadinessResponse, RedactedProfileResponse, ResendCodeRequest, ResendEmailRequest,
    ResendPhoneRequest, ResetPasswordRequest, ReviewResponse, SessionUserResponse,
    SigninRequest, SigninResponse, SignupRequest, SignupResponse, TripResponse,
    VehicleResponse, VerificationResultResponse, VerifyCodeRequest, VerifyPhoneRequest,
    VerifyResetCodeRequest, ForgotPasswordRequest,
};
pub use services::{
    authorize, filter_profile, AccountService, ProfileService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
