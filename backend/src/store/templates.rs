use super::{row_exists, Store, StoreResult};
use common::model::checklist::ChecklistSummary;
use common::model::template::Template;
use common::requests::{ChecklistRef, TemplatePayload};
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use std::collections::HashMap;

impl Store {
    /// All templates in id order. Templates without checklists carry `checklists: None`.
    pub fn list_templates(&self) -> StoreResult<Vec<Template>> {
        let conn = self.conn()?;

        let mut members: HashMap<i64, Vec<ChecklistSummary>> = HashMap::new();
        let mut member_stmt = conn.prepare(
            "SELECT template_id, id, name FROM checklists
             WHERE template_id IS NOT NULL ORDER BY id",
        )?;
        let rows = member_stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                ChecklistSummary {
                    id: row.get(1)?,
                    name: row.get(2)?,
                },
            ))
        })?;
        for row in rows {
            let (template_id, summary) = row?;
            members.entry(template_id).or_default().push(summary);
        }

        let mut stmt = conn.prepare("SELECT id, nome FROM templates ORDER BY id")?;
        let templates = stmt
            .query_map([], |row| {
                let id: i64 = row.get(0)?;
                Ok(Template {
                    id,
                    nome: row.get(1)?,
                    checklists: members.remove(&id),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(templates)
    }

    /// One template with its checklists, always as `Some` (possibly empty).
    pub fn get_template(&self, id: i64) -> StoreResult<Option<Template>> {
        let conn = self.conn()?;
        let template = conn
            .query_row("SELECT id, nome FROM templates WHERE id = ?1", [id], |row| {
                Ok(Template {
                    id: row.get(0)?,
                    nome: row.get(1)?,
                    checklists: None,
                })
            })
            .optional()?;

        match template {
            Some(mut template) => {
                template.checklists = Some(members_of(&conn, id)?);
                Ok(Some(template))
            }
            None => Ok(None),
        }
    }

    /// Inserts a template and attaches every referenced checklist that exists.
    ///
    /// Attaching moves a checklist away from whichever template held it before.
    pub fn create_template(&self, payload: &TemplatePayload) -> StoreResult<i64> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        tx.execute("INSERT INTO templates (nome) VALUES (?1)", params![payload.nome])?;
        let template_id = tx.last_insert_rowid();

        for checklist_id in resolve_checklists(&tx, &payload.checklists)? {
            attach(&tx, template_id, checklist_id)?;
        }

        tx.commit()?;
        Ok(template_id)
    }

    /// Renames a template and makes the resolved references its complete checklist set.
    /// Returns `false` when the template does not exist.
    pub fn update_template(&self, id: i64, payload: &TemplatePayload) -> StoreResult<bool> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        if !row_exists(&tx, "templates", id)? {
            return Ok(false);
        }

        tx.execute(
            "UPDATE templates SET nome = ?1 WHERE id = ?2",
            params![payload.nome, id],
        )?;

        let resolved = resolve_checklists(&tx, &payload.checklists)?;
        detach_all(&tx, id)?;
        for checklist_id in resolved {
            attach(&tx, id, checklist_id)?;
        }

        tx.commit()?;
        Ok(true)
    }

    /// Deletes a template. Its checklists survive with their template reference cleared.
    /// Returns `false` when the template does not exist.
    pub fn delete_template(&self, id: i64) -> StoreResult<bool> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        if !row_exists(&tx, "templates", id)? {
            return Ok(false);
        }

        detach_all(&tx, id)?;
        tx.execute("DELETE FROM templates WHERE id = ?1", [id])?;

        tx.commit()?;
        Ok(true)
    }
}

/// Keeps the ids of referenced checklists that exist, in request order.
fn resolve_checklists(tx: &Transaction, refs: &[ChecklistRef]) -> rusqlite::Result<Vec<i64>> {
    let mut resolved = Vec::with_capacity(refs.len());
    for checklist_id in refs.iter().filter_map(|r| r.id) {
        if row_exists(tx, "checklists", checklist_id)? && !resolved.contains(&checklist_id) {
            resolved.push(checklist_id);
        }
    }
    Ok(resolved)
}

fn attach(tx: &Transaction, template_id: i64, checklist_id: i64) -> rusqlite::Result<()> {
    tx.execute(
        "UPDATE checklists SET template_id = ?1 WHERE id = ?2",
        params![template_id, checklist_id],
    )?;
    Ok(())
}

fn detach_all(tx: &Transaction, template_id: i64) -> rusqlite::Result<()> {
    tx.execute(
        "UPDATE checklists SET template_id = NULL WHERE template_id = ?1",
        [template_id],
    )?;
    Ok(())
}

fn members_of(conn: &Connection, template_id: i64) -> rusqlite::Result<Vec<ChecklistSummary>> {
    let mut stmt =
        conn.prepare("SELECT id, name FROM checklists WHERE template_id = ?1 ORDER BY id")?;
    let members = stmt
        .query_map([template_id], |row| {
            Ok(ChecklistSummary {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?
        .collect();
    members
}
