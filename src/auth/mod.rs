// PRDatabase — Auth Module
//
// Sign-up, sign-in, session restore, and sign-out against the locally
// registered users. Credentials are compared in plaintext.

mod error;
mod manager;

pub use error::AuthError;
pub use manager::AuthManager;
