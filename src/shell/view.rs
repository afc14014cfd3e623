// PRDatabase — View state
//
// Everything here is presentation state: it never touches the store.

use std::collections::HashSet;

/// Shown in place of a hidden password.
pub const MASKED_PASSWORD: &str = "••••••••";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Splash,
    Auth,
    Unlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Table,
    /// Python viewer source preview.
    Engine,
}

/// Per-record password visibility. Records default to hidden.
#[derive(Debug, Default)]
pub struct RevealState {
    shown: HashSet<String>,
}

impl RevealState {
    /// Flip visibility for `id` and return the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.shown.remove(id) {
            false
        } else {
            self.shown.insert(id.to_string());
            true
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.shown.contains(id)
    }

    pub fn forget(&mut self, id: &str) {
        self.shown.remove(id);
    }

    pub fn clear(&mut self) {
        self.shown.clear();
    }

    /// The password as it should be displayed.
    pub fn display<'p>(&self, id: &str, password: &'p str) -> &'p str {
        if self.is_revealed(id) {
            password
        } else {
            MASKED_PASSWORD
        }
    }
}
