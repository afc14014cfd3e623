// PRDatabase — Data models
//
// Registered users and client records are stored with plaintext passwords.
// Debug output redacts them so they never reach log lines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An account created by sign-up. Never mutated or deleted afterwards.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    pub email: String,
    /// Absent in reduced session profiles.
    #[serde(default)]
    pub password: String,
    pub username: String,
}

impl fmt::Debug for RegisteredUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredUser")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("username", &self.username)
            .finish()
    }
}

impl fmt::Display for RegisteredUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.username, self.email)
    }
}

/// Input for creating an account.
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A single client entry owned by exactly one user.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    /// Free-form, usually DD/MM/YY.
    pub dob: String,
}

impl fmt::Debug for ClientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("dob", &self.dob)
            .finish()
    }
}

impl fmt::Display for ClientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} <{}> ({})", self.id, self.name, self.email, self.dob)
    }
}

/// Input struct for creating a client record.
#[derive(Clone)]
pub struct NewClientRecord {
    pub name: String,
    pub email: String,
    pub password: String,
    pub dob: String,
}

impl NewClientRecord {
    pub(crate) fn into_record(self, id: String) -> ClientRecord {
        ClientRecord {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
            dob: self.dob,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
