// PRDatabase — CLI Command Handlers
//
// Each invocation opens the vault database, starts the application shell
// (which restores any persisted session), and runs one command against it.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::PrDatabaseError;
use crate::shell::{App, View};
use crate::store::{ClientRecord, Database, LocalRepository, SqliteKeyValueStore};

use super::{Cli, Commands};

/// Execute the parsed CLI invocation.
pub async fn execute(cli: Cli) -> Result<(), PrDatabaseError> {
    let config = Config::new(cli.data_dir, cli.splash_ms);

    let db = Database::open(&config.db_path())?;
    let kv = SqliteKeyValueStore::new(&db);
    let repo = LocalRepository::new(&kv);

    let mut app = App::new(&repo);
    app.start(config.splash_delay).await?;

    dispatch(&mut app, cli.command)
}

fn dispatch(app: &mut App<'_>, command: Commands) -> Result<(), PrDatabaseError> {
    match command {
        Commands::Signup {
            username,
            email,
            password,
        } => cmd_signup(app, &username, &email, &password),
        Commands::Signin { email, password } => cmd_signin(app, &email, &password),
        Commands::Signout => cmd_signout(app),
        Commands::Whoami => cmd_whoami(app),
        Commands::Add {
            name,
            email,
            password,
            dob,
        } => cmd_add(app, &name, &email, &password, &dob),
        Commands::Delete { id } => cmd_delete(app, &id),
        Commands::List { reveal } => cmd_list(app, "", &reveal),
        Commands::Search { query, reveal } => cmd_list(app, &query, &reveal),
        Commands::ExportSql { out } => cmd_export_sql(app, out),
        Commands::ExportEngine { out } => cmd_export_engine(app, out),
        Commands::Engine => cmd_engine(app),
    }
}

// ─── Auth ────────────────────────────────────────────────────────────────────

fn cmd_signup(
    app: &mut App<'_>,
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), PrDatabaseError> {
    let user = app.sign_up(username, email, password)?;
    println!("✓ Account created for {}", user);
    println!();
    println!("Next: sign in with `prdatabase signin --email <email> --password <password>`");
    Ok(())
}

fn cmd_signin(app: &mut App<'_>, email: &str, password: &str) -> Result<(), PrDatabaseError> {
    let user = app.sign_in(email, password)?;
    println!("✓ Signed in as {}", user);
    println!("  Records: {}", app.records().len());
    Ok(())
}

fn cmd_signout(app: &mut App<'_>) -> Result<(), PrDatabaseError> {
    app.sign_out()?;
    println!("✓ Signed out");
    Ok(())
}

fn cmd_whoami(app: &App<'_>) -> Result<(), PrDatabaseError> {
    match app.current_user() {
        Some(user) => {
            println!("Signed in as {}", user);
            println!("  User ID: {}", user.id);
            println!("  Records: {}", app.records().len());
        }
        None => println!("Not signed in."),
    }
    Ok(())
}

// ─── Records ─────────────────────────────────────────────────────────────────

fn cmd_add(
    app: &mut App<'_>,
    name: &str,
    email: &str,
    password: &str,
    dob: &str,
) -> Result<(), PrDatabaseError> {
    let record = app.add_record(name, email, password, dob)?;
    println!("✓ Record stored");
    println!("  ID:   {}", record.id);
    println!("  Name: {}", record.name);
    Ok(())
}

fn cmd_delete(app: &mut App<'_>, id: &str) -> Result<(), PrDatabaseError> {
    if app.delete_record(id)? {
        println!("✓ Record {} deleted", id);
    } else {
        println!("Record not found: {}", id);
    }
    Ok(())
}

fn cmd_list(app: &mut App<'_>, query: &str, reveal: &[String]) -> Result<(), PrDatabaseError> {
    app.require_unlocked()?;
    app.set_search_query(query);
    for id in reveal {
        if !app.is_revealed(id) {
            app.toggle_reveal(id)?;
        }
    }

    let total = app.records().len();
    if total == 0 {
        println!("No records stored yet.");
        println!("Add one with: prdatabase add --name <name> --email <email> --password <password> --dob <dob>");
        return Ok(());
    }

    let visible = app.visible_records();
    if visible.is_empty() {
        println!("No records match '{}'.", query);
        return Ok(());
    }

    if query.is_empty() {
        println!("Client records ({}):\n", total);
    } else {
        println!("Client records matching '{}' ({} of {}):\n", query, visible.len(), total);
    }
    for record in visible {
        print_row(app, record);
    }

    Ok(())
}

fn print_row(app: &App<'_>, record: &ClientRecord) {
    println!(
        "  {:13} │ {:20} │ {:28} │ {:12} │ {}",
        record.id,
        record.name,
        record.email,
        app.password_display(record),
        record.dob,
    );
}

// ─── Exports ─────────────────────────────────────────────────────────────────

fn out_dir(out: Option<PathBuf>) -> PathBuf {
    out.unwrap_or_else(|| PathBuf::from("."))
}

fn cmd_export_sql(app: &App<'_>, out: Option<PathBuf>) -> Result<(), PrDatabaseError> {
    let export = app.export_sql()?;
    let path = export.write_to(&out_dir(out))?;
    println!("✓ SQL export written");
    println!("  File:    {}", path.display());
    println!("  Records: {}", app.records().len());
    Ok(())
}

fn cmd_export_engine(app: &App<'_>, out: Option<PathBuf>) -> Result<(), PrDatabaseError> {
    let export = app.export_engine()?;
    let path = export.write_to(&out_dir(out))?;
    println!("✓ Engine script written");
    println!("  File: {}", path.display());
    Ok(())
}

fn cmd_engine(app: &mut App<'_>) -> Result<(), PrDatabaseError> {
    let export = app.export_engine()?;
    app.set_view(View::Engine);
    println!("{}", export.contents);
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
