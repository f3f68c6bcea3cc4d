// src/infrastructure/otp.rs
use crate::application::ports::otp::OtpCodeGenerator;
use crate::domain::otp::OtpCode;
use rand::Rng;

const DEV_OTP_CODE: &str = "123456";

/// Draws random six-digit codes. Development environments pin the code so
/// the verification flow works without a mail sink.
pub struct RandomOtpGenerator {
    development: bool,
}

impl RandomOtpGenerator {
    pub fn new(development: bool) -> Self {
        Self { development }
    }
}

impl OtpCodeGenerator for RandomOtpGenerator {
    fn generate(&self) -> OtpCode {
        let code = if self.development {
            DEV_OTP_CODE.to_string()
        } else {
            rand::rng().random_range(100_000..=999_999).to_string()
        };
        OtpCode::new(code).expect("generated code is six digits")
    }

    fn dev_hint(&self) -> Option<String> {
        self.development
            .then(|| format!(" (Dev: Use OTP {DEV_OTP_CODE})"))
    }
}
