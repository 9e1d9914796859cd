//! One-time password generation for mobile login.

use chrono::Duration;
use rand::Rng;

/// How long an issued OTP stays valid.
pub const OTP_TTL: Duration = Duration::minutes(5);

/// Generates a random 6-digit OTP, zero-padded.
pub fn generate_otp() -> String {
    let value: u32 = rand::rng().random_range(0..1_000_000);
    format!("{:06}", value)
}
