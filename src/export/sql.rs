// PRDatabase — SQL export

use crate::store::ClientRecord;

use super::ExportFile;

/// `clients_<username>`, or `clients_user` when the username is empty.
/// Characters outside `[A-Za-z0-9_]` become `_` so the name is a valid
/// identifier and file name.
pub fn table_name(username: &str) -> String {
    let base = if username.is_empty() { "user" } else { username };
    let sanitized: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("clients_{}", sanitized)
}

pub fn sql_file_name(username: &str) -> String {
    format!("PRDatabase_{}.sql", table_name(username))
}

fn quote(value: &str) -> String {
    value.replace('\'', "''")
}

/// One CREATE TABLE statement followed by one INSERT per record, in
/// collection order.
pub fn sql_dump(username: &str, records: &[ClientRecord]) -> String {
    let table = table_name(username);

    let mut sql = format!("-- PRDatabase Export System\n-- User: {}\n\n", username);
    sql.push_str(&format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  id SERIAL PRIMARY KEY,\n  name VARCHAR(255),\n  email VARCHAR(255),\n  password VARCHAR(255),\n  dob VARCHAR(20)\n);\n\n",
        table
    ));

    for record in records {
        sql.push_str(&format!(
            "INSERT INTO {} (name, email, password, dob) VALUES ('{}', '{}', '{}', '{}');\n",
            table,
            quote(&record.name),
            quote(&record.email),
            quote(&record.password),
            quote(&record.dob),
        ));
    }

    sql
}

pub fn sql_export(username: &str, records: &[ClientRecord]) -> ExportFile {
    ExportFile {
        file_name: sql_file_name(username),
        contents: sql_dump(username, records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ClientRecord {
        ClientRecord {
            id: "1".to_string(),
            name: name.to_string(),
            email: "bob@y.com".to_string(),
            password: "secret".to_string(),
            dob: "01/01/90".to_string(),
        }
    }

    #[test]
    fn test_table_name_from_username() {
        assert_eq!(table_name("alice"), "clients_alice");
        assert_eq!(table_name(""), "clients_user");
        assert_eq!(table_name("al ice-1"), "clients_al_ice_1");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(sql_file_name("alice"), "PRDatabase_clients_alice.sql");
    }

    #[test]
    fn test_dump_has_one_create_and_one_insert_per_record() {
        let dump = sql_dump("alice", &[record("Bob"), record("Carol")]);

        assert!(dump.starts_with("-- PRDatabase Export System\n-- User: alice\n"));
        assert_eq!(dump.matches("CREATE TABLE IF NOT EXISTS clients_alice (").count(), 1);
        assert_eq!(dump.matches("INSERT INTO clients_alice").count(), 2);

        let bob = dump.find("'Bob'").unwrap();
        let carol = dump.find("'Carol'").unwrap();
        assert!(bob < carol, "Inserts follow collection order");
    }

    #[test]
    fn test_single_quotes_in_name_are_doubled() {
        let dump = sql_dump("alice", &[record("O'Brien")]);
        assert!(dump.contains("VALUES ('O''Brien', 'bob@y.com', 'secret', '01/01/90');"));
    }

    #[test]
    fn test_empty_collection_has_only_schema() {
        let dump = sql_dump("alice", &[]);
        assert!(dump.contains("CREATE TABLE"));
        assert!(!dump.contains("INSERT"));
    }
}
