//! Data transfer objects
//!
//! Request DTOs deserialize the camelCase wire format; response DTOs
//! serialize back to it. Mappers convert domain entities into responses.

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CheckAvailabilityRequest, ForgotPasswordRequest, ResendCodeRequest, ResendEmailRequest,
    ResendPhoneRequest, ResetPasswordRequest, SigninRequest, SignupRequest, VerifyCodeRequest,
    VerifyPhoneRequest, VerifyResetCodeRequest,
};
pub use responses::{
    ApiResponse, AvailabilityResponse, BookingResponse, ChannelFlags, CompleteProfileResponse,
    FullProfileResponse, HealthResponse, MessageResponse, NewAccountResponse,
    PrivateProfileResponse, ProfileStatsResponse, ProfileView, ReadinessResponse,
    RedactedProfileResponse, ReviewResponse, SessionUserResponse, SigninResponse, SignupResponse,
    TripResponse, VehicleResponse, VerificationResultResponse, VerifiedAccountResponse,
};
