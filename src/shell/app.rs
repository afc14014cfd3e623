// PRDatabase — Application context
//
// Owns the auth manager, the record store, and the view state. A new App
// starts in the splash phase; `start` waits out the splash delay and then
// either restores the persisted session or lands on the auth screen.

use std::time::Duration;

use crate::auth::AuthManager;
use crate::export::{engine_export, sql_export, ExportFile};
use crate::records::RecordStore;
use crate::store::{
    ClientRecord, NewClientRecord, RecordRepository, RegisteredUser, SessionRepository,
    UserRepository,
};

use super::validate::validate_required;
use super::view::{AuthMode, Phase, RevealState, View};
use super::ShellError;

pub struct App<'a> {
    auth: AuthManager<'a>,
    records: RecordStore<'a>,
    phase: Phase,
    auth_mode: AuthMode,
    view: View,
    search_query: String,
    reveal: RevealState,
}

impl<'a> App<'a> {
    pub fn new<R>(repo: &'a R) -> Self
    where
        R: UserRepository + SessionRepository + RecordRepository,
    {
        Self {
            auth: AuthManager::new(repo, repo),
            records: RecordStore::new(repo),
            phase: Phase::Splash,
            auth_mode: AuthMode::default(),
            view: View::default(),
            search_query: String::new(),
            reveal: RevealState::default(),
        }
    }

    // ─── Lifecycle ───────────────────────────────────────────────────────────

    /// Wait out the splash delay, then restore the persisted session.
    /// The delay cannot be cancelled once started.
    pub async fn start(&mut self, splash_delay: Duration) -> Result<Phase, ShellError> {
        if !splash_delay.is_zero() {
            tokio::time::sleep(splash_delay).await;
        }
        self.restore()
    }

    /// Records are read before the session is adopted, so a failed read
    /// leaves nobody signed in.
    fn restore(&mut self) -> Result<Phase, ShellError> {
        match self.auth.saved_session()? {
            Some(user) => {
                let entries = self.records.fetch(&user.id)?;
                let id = user.id.clone();
                self.auth.adopt(Some(user));
                self.records.install(&id, entries);
                self.phase = Phase::Unlocked;
            }
            None => {
                self.auth.adopt(None);
                self.records.clear();
                self.phase = Phase::Auth;
            }
        }

        tracing::debug!(phase = ?self.phase, "Startup complete");
        Ok(self.phase)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn require_started(&self) -> Result<(), ShellError> {
        match self.phase {
            Phase::Splash => Err(ShellError::Starting),
            _ => Ok(()),
        }
    }

    /// The signed-in user, or why record operations are unavailable.
    pub fn require_unlocked(&self) -> Result<&RegisteredUser, ShellError> {
        match (self.phase, self.auth.current_user()) {
            (Phase::Unlocked, Some(user)) => Ok(user),
            (Phase::Splash, _) => Err(ShellError::Starting),
            _ => Err(ShellError::Locked),
        }
    }

    // ─── Auth ────────────────────────────────────────────────────────────────

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    pub fn set_auth_mode(&mut self, mode: AuthMode) {
        self.auth_mode = mode;
    }

    pub fn current_user(&self) -> Option<&RegisteredUser> {
        self.auth.current_user()
    }

    /// Register an account and switch the auth screen to sign-in.
    pub fn sign_up(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisteredUser, ShellError> {
        self.require_started()?;
        validate_required(&[
            ("username", username),
            ("email", email),
            ("password", password),
        ])?;

        let user = self.auth.sign_up(username, email, password)?;
        self.auth_mode = AuthMode::SignIn;
        Ok(user)
    }

    /// Sign in and load the user's records. A rejected attempt, or one whose
    /// records cannot be read, leaves the current session, records, and view
    /// state as they were.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<RegisteredUser, ShellError> {
        self.require_started()?;
        validate_required(&[("email", email), ("password", password)])?;

        let user = self.auth.authenticate(email, password)?;
        let entries = self.records.fetch(&user.id)?;
        let user = self.auth.establish(user)?.clone();
        self.records.install(&user.id, entries);

        self.reveal.clear();
        self.search_query.clear();
        self.view = View::Table;
        self.phase = Phase::Unlocked;
        Ok(user)
    }

    /// Clear the session marker and every piece of in-memory user state.
    /// The user's persisted records are kept for the next sign-in.
    pub fn sign_out(&mut self) -> Result<(), ShellError> {
        self.require_started()?;
        self.auth.sign_out()?;

        self.records.clear();
        self.reveal.clear();
        self.search_query.clear();
        self.view = View::Table;
        self.auth_mode = AuthMode::SignIn;
        self.phase = Phase::Auth;
        Ok(())
    }

    // ─── Records ─────────────────────────────────────────────────────────────

    pub fn add_record(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        dob: &str,
    ) -> Result<ClientRecord, ShellError> {
        self.require_unlocked()?;
        validate_required(&[
            ("name", name),
            ("email", email),
            ("password", password),
            ("dob", dob),
        ])?;

        let record = self.records.add(NewClientRecord {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            dob: dob.to_string(),
        })?;
        Ok(record)
    }

    pub fn delete_record(&mut self, id: &str) -> Result<bool, ShellError> {
        self.require_unlocked()?;
        let removed = self.records.delete(id)?;
        self.reveal.forget(id);
        Ok(removed)
    }

    /// The full, unfiltered collection.
    pub fn records(&self) -> &[ClientRecord] {
        self.records.records()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// Records matching the current search query.
    pub fn visible_records(&self) -> Vec<&ClientRecord> {
        self.records.search(&self.search_query)
    }

    // ─── View state ──────────────────────────────────────────────────────────

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn toggle_reveal(&mut self, id: &str) -> Result<bool, ShellError> {
        self.require_unlocked()?;
        Ok(self.reveal.toggle(id))
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.reveal.is_revealed(id)
    }

    /// The record's password, or the mask if it is hidden.
    pub fn password_display<'r>(&self, record: &'r ClientRecord) -> &'r str {
        self.reveal.display(&record.id, &record.password)
    }

    // ─── Exports ─────────────────────────────────────────────────────────────

    /// SQL dump of the whole collection, ignoring the search query.
    pub fn export_sql(&self) -> Result<ExportFile, ShellError> {
        let user = self.require_unlocked()?;
        Ok(sql_export(&user.username, self.records.records()))
    }

    pub fn export_engine(&self) -> Result<ExportFile, ShellError> {
        let user = self.require_unlocked()?;
        Ok(engine_export(&user.username, self.records.len()))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
