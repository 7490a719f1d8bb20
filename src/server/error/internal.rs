use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Booking code generation kept colliding with existing codes.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to generate a unique booking code after {attempts} attempts")]
    BookingCodeExhausted { attempts: u32 },

    /// Password hashing or hash parsing failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Token signing failed.
    #[error("Failed to sign token: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),
}
