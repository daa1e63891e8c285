use rusqlite::Connection;

/// Creates the three tables if they do not exist yet.
///
/// `checklists.template_id` is a plain nullable reference: templates never own their
/// checklists. Tasks reference their checklist without `ON DELETE CASCADE`, the
/// access layer deletes them explicitly.
pub(crate) fn init(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS templates (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT
        );

        CREATE TABLE IF NOT EXISTS checklists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            tipo_equipamento TEXT,
            template_id INTEGER NULL,
            FOREIGN KEY (template_id) REFERENCES templates(id)
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            description TEXT,
            verificado INTEGER DEFAULT 0,
            foto_verificado INTEGER,
            checklist_id INTEGER NOT NULL,
            FOREIGN KEY (checklist_id) REFERENCES checklists(id)
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_checklist ON tasks(checklist_id);
        CREATE INDEX IF NOT EXISTS idx_checklists_template ON checklists(template_id);
        "#,
    )
}
