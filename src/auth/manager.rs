// PRDatabase — Auth Manager
//
// Holds the in-memory session and mirrors it to the persisted session
// marker. Loading the signed-in user's records is the caller's job.

use crate::store::{NewUser, RegisteredUser, SessionRepository, UserRepository};

use super::AuthError;

pub struct AuthManager<'a> {
    users: &'a dyn UserRepository,
    sessions: &'a dyn SessionRepository,
    current: Option<RegisteredUser>,
}

impl<'a> AuthManager<'a> {
    pub fn new(users: &'a dyn UserRepository, sessions: &'a dyn SessionRepository) -> Self {
        Self {
            users,
            sessions,
            current: None,
        }
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&RegisteredUser> {
        self.current.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    /// Register a new account. Does not sign it in.
    pub fn sign_up(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisteredUser, AuthError> {
        let user = self.users.add_user(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })?;
        Ok(user)
    }

    /// Establish a session for the first user matching `email` and
    /// `password`. On failure the existing session, if any, is untouched.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<&RegisteredUser, AuthError> {
        let user = self.authenticate(email, password)?;
        self.establish(user)
    }

    /// First user matching `email` and `password`. Changes nothing.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<RegisteredUser, AuthError> {
        match self.users.find_by_credentials(email, password)? {
            Some(user) => Ok(user),
            None => {
                tracing::info!("Sign-in rejected: invalid credentials");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Persist the session marker for `user`, then make it current.
    pub fn establish(&mut self, user: RegisteredUser) -> Result<&RegisteredUser, AuthError> {
        self.sessions.save_session(&user)?;
        tracing::info!(user_id = %user.id, "Signed in");
        Ok(self.current.insert(user))
    }

    /// Adopt the persisted session marker, if one exists.
    pub fn restore_session(&mut self) -> Result<Option<&RegisteredUser>, AuthError> {
        let saved = self.saved_session()?;
        Ok(self.adopt(saved))
    }

    /// The persisted session marker, without adopting it.
    pub fn saved_session(&self) -> Result<Option<RegisteredUser>, AuthError> {
        Ok(self.sessions.load_session()?)
    }

    /// Make `user` current without touching the persisted marker.
    pub fn adopt(&mut self, user: Option<RegisteredUser>) -> Option<&RegisteredUser> {
        match user {
            Some(user) => {
                tracing::info!(user_id = %user.id, "Session restored");
                Some(self.current.insert(user))
            }
            None => {
                tracing::debug!("No persisted session");
                self.current = None;
                None
            }
        }
    }

    /// Remove the persisted marker, then forget the in-memory user.
    pub fn sign_out(&mut self) -> Result<(), AuthError> {
        self.sessions.clear_session()?;
        if let Some(user) = self.current.take() {
            tracing::info!(user_id = %user.id, "Signed out");
        }
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KeyValueStore, LocalRepository, MemoryKeyValueStore, SESSION_KEY};

    #[test]
    fn test_sign_up_then_sign_in_succeeds() {
        let kv = MemoryKeyValueStore::new();
        let repo = LocalRepository::new(&kv);
        let mut auth = AuthManager::new(&repo, &repo);

        let registered = auth.sign_up("alice", "a@x.com", "p1").unwrap();
        assert!(!auth.is_signed_in(), "Sign-up must not establish a session");

        let user = auth.sign_in("a@x.com", "p1").unwrap();
        assert_eq!(user.id, registered.id);
        assert_eq!(auth.current_user().map(|u| u.username.as_str()), Some("alice"));
        assert!(kv.get(SESSION_KEY).unwrap().is_some(), "Marker must be persisted");
    }

    #[test]
    fn test_sign_in_with_empty_user_list_fails() {
        let kv = MemoryKeyValueStore::new();
        let repo = LocalRepository::new(&kv);
        let mut auth = AuthManager::new(&repo, &repo);

        let err = auth.sign_in("a@x.com", "p1").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(!auth.is_signed_in());
    }

    #[test]
    fn test_wrong_password_keeps_existing_session() {
        let kv = MemoryKeyValueStore::new();
        let repo = LocalRepository::new(&kv);
        let mut auth = AuthManager::new(&repo, &repo);

        let alice = auth.sign_up("alice", "a@x.com", "p1").unwrap();
        auth.sign_in("a@x.com", "p1").unwrap();
        let marker_before = kv.get(SESSION_KEY).unwrap();

        let err = auth.sign_in("a@x.com", "wrong").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(auth.current_user().map(|u| u.id.clone()), Some(alice.id));
        assert_eq!(kv.get(SESSION_KEY).unwrap(), marker_before);
    }

    #[test]
    fn test_restore_session_across_managers() {
        let kv = MemoryKeyValueStore::new();
        let repo = LocalRepository::new(&kv);

        let alice = {
            let mut auth = AuthManager::new(&repo, &repo);
            auth.sign_up("alice", "a@x.com", "p1").unwrap();
            auth.sign_in("a@x.com", "p1").unwrap().clone()
        };

        let mut restarted = AuthManager::new(&repo, &repo);
        let restored = restarted.restore_session().unwrap().cloned();
        assert_eq!(restored, Some(alice));
        assert!(restarted.is_signed_in());
    }

    #[test]
    fn test_restore_without_marker_stays_signed_out() {
        let kv = MemoryKeyValueStore::new();
        let repo = LocalRepository::new(&kv);
        let mut auth = AuthManager::new(&repo, &repo);

        assert!(auth.restore_session().unwrap().is_none());
        assert!(!auth.is_signed_in());
    }

    #[test]
    fn test_sign_out_clears_marker_and_memory() {
        let kv = MemoryKeyValueStore::new();
        let repo = LocalRepository::new(&kv);
        let mut auth = AuthManager::new(&repo, &repo);

        auth.sign_up("alice", "a@x.com", "p1").unwrap();
        auth.sign_in("a@x.com", "p1").unwrap();
        auth.sign_out().unwrap();

        assert!(!auth.is_signed_in());
        assert!(kv.get(SESSION_KEY).unwrap().is_none());

        // A fresh process sees no session either
        let mut restarted = AuthManager::new(&repo, &repo);
        assert!(restarted.restore_session().unwrap().is_none());
    }
}
