// PRDatabase — Python viewer template export

use super::ExportFile;

pub const ENGINE_FILE_NAME: &str = "PRDatabase_Engine.py";

const TEMPLATE: &str = r#"import sqlite3
import tkinter as tk
from tkinter import ttk

class PRDatabaseLocal:
    def __init__(self, root):
        self.root = root
        self.root.title("PRDatabase Native - {username}")
        self.root.geometry("800x500")

        # SQLITE INIT
        self.conn = sqlite3.connect('pr_clients.db')
        self.cursor = self.conn.cursor()
        self.cursor.execute('CREATE TABLE IF NOT EXISTS clients (id INTEGER PRIMARY KEY, name TEXT, email TEXT, pass TEXT, dob TEXT)')
        self.conn.commit()

        # UI
        self.tree = ttk.Treeview(root, columns=('N','E','D'), show='headings')
        self.tree.heading('N', text='Name'); self.tree.heading('E', text='Email'); self.tree.heading('D', text='DOB')
        self.tree.pack(fill=tk.BOTH, expand=True, padx=20, pady=20)
        self.load()

    def load(self):
        for i in self.tree.get_children(): self.tree.delete(i)
        for row in self.cursor.execute('SELECT name, email, dob FROM clients'): self.tree.insert('', tk.END, values=row)

if __name__ == "__main__":
    root = tk.Tk(); app = PRDatabaseLocal(root); root.mainloop()
"#;

/// The viewer script. Only the username and record count come from the
/// vault; the rest is fixed.
pub fn engine_script(username: &str, record_count: usize) -> String {
    let mut script = format!(
        "# PRDatabase Engine\n# User: {}\n# Records at export: {}\n\n",
        username, record_count
    );
    script.push_str(&TEMPLATE.replace("{username}", username));
    script
}

pub fn engine_export(username: &str, record_count: usize) -> ExportFile {
    ExportFile {
        file_name: ENGINE_FILE_NAME.to_string(),
        contents: engine_script(username, record_count),
    }
}
