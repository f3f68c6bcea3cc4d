pub mod article;
pub mod author;
pub mod errors;
pub mod otp;
pub mod shared;
pub mod user;
