// PRDatabase — Typed Repositories
//
// Typed access to the three well-known keys of the key-value store.
// Stored content that fails to parse is treated as absent (empty list or
// no session) and logged; it never surfaces as an error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use super::kv::KeyValueStore;
use super::models::{ClientRecord, NewUser, RegisteredUser};
use super::StoreError;

/// Key holding the JSON array of every registered user.
pub const REGISTERED_USERS_KEY: &str = "pr_registered_users";

/// Key holding the JSON profile of the signed-in user.
pub const SESSION_KEY: &str = "pr_session_active";

/// Key holding the JSON array of a user's client records.
pub fn records_key(user_id: &str) -> String {
    format!("pr_db_{}", user_id)
}

// ─── Traits ──────────────────────────────────────────────────────────────────

pub trait UserRepository {
    /// All registered users, in registration order.
    fn list_users(&self) -> Result<Vec<RegisteredUser>, StoreError>;

    /// Append a new user with a freshly generated id. Emails are not required
    /// to be unique.
    fn add_user(&self, user: NewUser) -> Result<RegisteredUser, StoreError>;

    /// First user whose email and password both match exactly.
    fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<RegisteredUser>, StoreError>;
}

pub trait SessionRepository {
    fn load_session(&self) -> Result<Option<RegisteredUser>, StoreError>;

    fn save_session(&self, user: &RegisteredUser) -> Result<(), StoreError>;

    fn clear_session(&self) -> Result<(), StoreError>;
}

pub trait RecordRepository {
    /// The user's collection, newest first. Empty if none was ever saved.
    fn load_records(&self, user_id: &str) -> Result<Vec<ClientRecord>, StoreError>;

    /// Replace the user's whole collection.
    fn save_records(&self, user_id: &str, records: &[ClientRecord]) -> Result<(), StoreError>;
}

// ─── Key-Value Implementation ───────────────────────────────────────────────

/// Implements every repository over a single key-value store.
pub struct LocalRepository<'a> {
    kv: &'a dyn KeyValueStore,
}

impl<'a> LocalRepository<'a> {
    pub fn new(kv: &'a dyn KeyValueStore) -> Self {
        Self { kv }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let raw = match self.kv.get(key)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(
                    key = %key,
                    error = %e,
                    "Malformed persisted data, treating as absent"
                );
                Ok(None)
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.kv.set(key, &raw)
    }
}

impl<'a> UserRepository for LocalRepository<'a> {
    fn list_users(&self) -> Result<Vec<RegisteredUser>, StoreError> {
        Ok(self
            .read_json::<Vec<RegisteredUser>>(REGISTERED_USERS_KEY)?
            .unwrap_or_default())
    }

    fn add_user(&self, user: NewUser) -> Result<RegisteredUser, StoreError> {
        let mut users = self.list_users()?;

        let registered = RegisteredUser {
            id: Uuid::new_v4().to_string(),
            email: user.email,
            password: user.password,
            username: user.username,
        };
        users.push(registered.clone());
        self.write_json(REGISTERED_USERS_KEY, &users)?;

        tracing::info!(
            user_id = %registered.id,
            username = %registered.username,
            "User registered"
        );

        Ok(registered)
    }

    fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<RegisteredUser>, StoreError> {
        Ok(self
            .list_users()?
            .into_iter()
            .find(|u| u.email == email && u.password == password))
    }
}

impl<'a> SessionRepository for LocalRepository<'a> {
    fn load_session(&self) -> Result<Option<RegisteredUser>, StoreError> {
        self.read_json(SESSION_KEY)
    }

    fn save_session(&self, user: &RegisteredUser) -> Result<(), StoreError> {
        self.write_json(SESSION_KEY, user)
    }

    fn clear_session(&self) -> Result<(), StoreError> {
        self.kv.remove(SESSION_KEY)
    }
}

impl<'a> RecordRepository for LocalRepository<'a> {
    fn load_records(&self, user_id: &str) -> Result<Vec<ClientRecord>, StoreError> {
        Ok(self
            .read_json::<Vec<ClientRecord>>(&records_key(user_id))?
            .unwrap_or_default())
    }

    fn save_records(&self, user_id: &str, records: &[ClientRecord]) -> Result<(), StoreError> {
        self.write_json(&records_key(user_id), records)?;
        tracing::debug!(user_id = %user_id, count = records.len(), "Records persisted");
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Database, MemoryKeyValueStore, SqliteKeyValueStore};

    fn new_user(username: &str, email: &str, password: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn record(id: &str, name: &str) -> ClientRecord {
        ClientRecord {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: "pw".to_string(),
            dob: "01/01/90".to_string(),
        }
    }

    #[test]
    fn test_records_key_format() {
        assert_eq!(records_key("abc"), "pr_db_abc");
    }

    #[test]
    fn test_add_user_generates_uuid_and_persists() {
        let kv = MemoryKeyValueStore::new();
        let repo = LocalRepository::new(&kv);

        let user = repo.add_user(new_user("alice", "a@x.com", "p1")).unwrap();
        assert!(Uuid::parse_str(&user.id).is_ok());

        let users = repo.list_users().unwrap();
        assert_eq!(users, vec![user]);
        assert!(kv.get(REGISTERED_USERS_KEY).unwrap().is_some());
    }

    #[test]
    fn test_duplicate_email_creates_second_account() {
        let kv = MemoryKeyValueStore::new();
        let repo = LocalRepository::new(&kv);

        let first = repo.add_user(new_user("alice", "a@x.com", "p1")).unwrap();
        let second = repo.add_user(new_user("alice2", "a@x.com", "p2")).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.list_users().unwrap().len(), 2);
    }

    #[test]
    fn test_find_by_credentials_is_exact_and_first_match() {
        let kv = MemoryKeyValueStore::new();
        let repo = LocalRepository::new(&kv);

        let first = repo.add_user(new_user("alice", "a@x.com", "p1")).unwrap();
        repo.add_user(new_user("again", "a@x.com", "p1")).unwrap();

        let found = repo.find_by_credentials("a@x.com", "p1").unwrap();
        assert_eq!(found.map(|u| u.id), Some(first.id));

        assert!(repo.find_by_credentials("A@X.COM", "p1").unwrap().is_none());
        assert!(repo.find_by_credentials("a@x.com", "P1").unwrap().is_none());
    }

    #[test]
    fn test_find_by_credentials_with_no_users() {
        let kv = MemoryKeyValueStore::new();
        let repo = LocalRepository::new(&kv);
        assert!(repo.find_by_credentials("a@x.com", "p1").unwrap().is_none());
    }

    #[test]
    fn test_session_save_load_clear() {
        let kv = MemoryKeyValueStore::new();
        let repo = LocalRepository::new(&kv);
        let user = repo.add_user(new_user("alice", "a@x.com", "p1")).unwrap();

        assert!(repo.load_session().unwrap().is_none());
        repo.save_session(&user).unwrap();
        assert_eq!(repo.load_session().unwrap(), Some(user));

        repo.clear_session().unwrap();
        assert!(repo.load_session().unwrap().is_none());
    }

    #[test]
    fn test_malformed_users_treated_as_empty() {
        let kv = MemoryKeyValueStore::new();
        kv.set(REGISTERED_USERS_KEY, "{not json").unwrap();
        let repo = LocalRepository::new(&kv);

        assert!(repo.list_users().unwrap().is_empty());

        // Sign-up over garbage starts a fresh list
        repo.add_user(new_user("alice", "a@x.com", "p1")).unwrap();
        assert_eq!(repo.list_users().unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_session_treated_as_absent() {
        let kv = MemoryKeyValueStore::new();
        kv.set(SESSION_KEY, "[1, 2, 3]").unwrap();
        let repo = LocalRepository::new(&kv);

        assert!(repo.load_session().unwrap().is_none());
    }

    #[test]
    fn test_malformed_records_treated_as_empty() {
        let kv = MemoryKeyValueStore::new();
        kv.set(&records_key("u1"), "undefined").unwrap();
        let repo = LocalRepository::new(&kv);

        assert!(repo.load_records("u1").unwrap().is_empty());
    }

    #[test]
    fn test_record_collections_are_keyed_by_user() {
        let kv = MemoryKeyValueStore::new();
        let repo = LocalRepository::new(&kv);

        repo.save_records("u1", &[record("2", "Bob")]).unwrap();
        repo.save_records("u2", &[record("3", "Carol"), record("1", "Dan")]).unwrap();

        let u1 = repo.load_records("u1").unwrap();
        let u2 = repo.load_records("u2").unwrap();
        assert_eq!(u1.len(), 1);
        assert_eq!(u1[0].name, "Bob");
        assert_eq!(u2.len(), 2);
        assert!(repo.load_records("u3").unwrap().is_empty());
    }

    #[test]
    fn test_records_round_trip_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prdatabase.db");
        let saved = vec![record("3", "Carol"), record("2", "Bob"), record("1", "Alice")];

        {
            let db = Database::open(&path).unwrap();
            let kv = SqliteKeyValueStore::new(&db);
            LocalRepository::new(&kv).save_records("u1", &saved).unwrap();
        }

        let db = Database::open(&path).unwrap();
        let kv = SqliteKeyValueStore::new(&db);
        let restored = LocalRepository::new(&kv).load_records("u1").unwrap();
        assert_eq!(restored, saved);
    }
}
