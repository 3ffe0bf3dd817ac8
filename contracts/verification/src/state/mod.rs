pub use self::request::{Status, VerificationRequest};

mod request;
