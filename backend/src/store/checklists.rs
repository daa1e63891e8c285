use super::{row_exists, Store, StoreResult};
use common::model::checklist::Checklist;
use common::model::task::Task;
use common::requests::ChecklistPayload;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;

impl Store {
    /// All checklists in id order, each with its full task list.
    pub fn list_checklists(&self) -> StoreResult<Vec<Checklist>> {
        let conn = self.conn()?;

        let mut tasks_by_checklist: HashMap<i64, Vec<Task>> = HashMap::new();
        let mut task_stmt = conn.prepare(
            "SELECT checklist_id, id, description, verificado, foto_verificado
             FROM tasks ORDER BY id",
        )?;
        let rows = task_stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                Task {
                    id: row.get(1)?,
                    description: row.get(2)?,
                    verificado: row.get(3)?,
                    foto_verificado: row.get(4)?,
                },
            ))
        })?;
        for row in rows {
            let (checklist_id, task) = row?;
            tasks_by_checklist.entry(checklist_id).or_default().push(task);
        }

        let mut stmt =
            conn.prepare("SELECT id, name, tipo_equipamento FROM checklists ORDER BY id")?;
        let checklists = stmt
            .query_map([], |row| {
                let id: i64 = row.get(0)?;
                Ok(Checklist {
                    id,
                    name: row.get(1)?,
                    tipo_equipamento: row.get(2)?,
                    tasks: tasks_by_checklist.remove(&id).unwrap_or_default(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(checklists)
    }

    pub fn get_checklist(&self, id: i64) -> StoreResult<Option<Checklist>> {
        let conn = self.conn()?;
        let checklist = conn
            .query_row(
                "SELECT id, name, tipo_equipamento FROM checklists WHERE id = ?1",
                [id],
                |row| {
                    Ok(Checklist {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        tipo_equipamento: row.get(2)?,
                        tasks: Vec::new(),
                    })
                },
            )
            .optional()?;

        match checklist {
            Some(mut checklist) => {
                checklist.tasks = tasks_of(&conn, id)?;
                Ok(Some(checklist))
            }
            None => Ok(None),
        }
    }

    /// Inserts a checklist together with its initial tasks and returns the new id.
    ///
    /// Flags missing from a task are stored as `false`; flags sent as null stay null.
    pub fn create_checklist(&self, payload: &ChecklistPayload) -> StoreResult<i64> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO checklists (name, tipo_equipamento) VALUES (?1, ?2)",
            params![payload.name, payload.tipo_equipamento],
        )?;
        let checklist_id = tx.last_insert_rowid();

        for task in &payload.tasks {
            tx.execute(
                "INSERT INTO tasks (description, verificado, foto_verificado, checklist_id)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    task.description,
                    task.verificado.unwrap_or(Some(false)),
                    task.foto_verificado.unwrap_or(Some(false)),
                    checklist_id
                ],
            )?;
        }

        tx.commit()?;
        Ok(checklist_id)
    }

    /// Overwrites a checklist and makes `payload.tasks` its complete task set.
    ///
    /// Entries with an id overwrite that task, entries without one are inserted.
    /// Owned tasks that were not mentioned are deleted afterwards. Ids that match no
    /// task are ignored. Returns `false` when the checklist does not exist.
    pub fn update_checklist(&self, id: i64, payload: &ChecklistPayload) -> StoreResult<bool> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        if !row_exists(&tx, "checklists", id)? {
            return Ok(false);
        }

        tx.execute(
            "UPDATE checklists SET name = ?1, tipo_equipamento = ?2 WHERE id = ?3",
            params![payload.name, payload.tipo_equipamento, id],
        )?;

        let mut kept: Vec<i64> = Vec::with_capacity(payload.tasks.len());
        for task in &payload.tasks {
            match task.id {
                Some(task_id) => {
                    let owner: Option<i64> = tx
                        .query_row(
                            "SELECT checklist_id FROM tasks WHERE id = ?1",
                            [task_id],
                            |row| row.get(0),
                        )
                        .optional()?;
                    let Some(owner) = owner else {
                        continue;
                    };
                    // Ownership is not enforced: a task of another checklist is still updated.
                    if owner != id {
                        warn!(
                            "Task {} belongs to checklist {} but was updated through checklist {}",
                            task_id, owner, id
                        );
                    }
                    tx.execute(
                        "UPDATE tasks SET description = ?1, verificado = ?2, foto_verificado = ?3
                         WHERE id = ?4",
                        params![
                            task.description,
                            task.verificado.flatten(),
                            task.foto_verificado.flatten(),
                            task_id
                        ],
                    )?;
                    kept.push(task_id);
                }
                None => {
                    tx.execute(
                        "INSERT INTO tasks (description, verificado, foto_verificado, checklist_id)
                         VALUES (?1, ?2, ?3, ?4)",
                        params![
                            task.description,
                            task.verificado.flatten(),
                            task.foto_verificado.flatten(),
                            id
                        ],
                    )?;
                    kept.push(tx.last_insert_rowid());
                }
            }
        }

        // Delete tasks that are no longer present
        let existing_ids: Vec<i64> = tx
            .prepare("SELECT id FROM tasks WHERE checklist_id = ?1")?
            .query_map([id], |row| row.get(0))?
            .collect::<Result<_, _>>()?;
        for old_id in existing_ids {
            if !kept.contains(&old_id) {
                tx.execute("DELETE FROM tasks WHERE id = ?1", [old_id])?;
            }
        }

        tx.commit()?;
        Ok(true)
    }

    /// Deletes a checklist after deleting every task it owns. Its template, if any, is
    /// left untouched. Returns `false` when the checklist does not exist.
    pub fn delete_checklist(&self, id: i64) -> StoreResult<bool> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        if !row_exists(&tx, "checklists", id)? {
            return Ok(false);
        }

        tx.execute("DELETE FROM tasks WHERE checklist_id = ?1", [id])?;
        tx.execute("DELETE FROM checklists WHERE id = ?1", [id])?;

        tx.commit()?;
        Ok(true)
    }
}

fn tasks_of(conn: &Connection, checklist_id: i64) -> rusqlite::Result<Vec<Task>> {
    let mut stmt = conn.prepare(
        "SELECT id, description, verificado, foto_verificado
         FROM tasks WHERE checklist_id = ?1 ORDER BY id",
    )?;
    let tasks = stmt
        .query_map([checklist_id], |row| {
            Ok(Task {
                id: row.get(0)?,
                description: row.get(1)?,
                verificado: row.get(2)?,
                foto_verificado: row.get(3)?,
            })
        })?
        .collect();
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::requests::TaskPayload;

    fn task(id: Option<i64>, description: &str) -> TaskPayload {
        TaskPayload {
            id,
            description: Some(description.to_string()),
            ..Default::default()
        }
    }

    fn forklift(tasks: Vec<TaskPayload>) -> ChecklistPayload {
        ChecklistPayload {
            name: Some("Forklift A".to_string()),
            tipo_equipamento: Some("forklift".to_string()),
            tasks,
        }
    }

    fn task_count(store: &Store) -> i64 {
        let conn = store.conn().unwrap();
        conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_create_and_get_checklist() {
        let store = Store::in_memory().unwrap();
        let id = store
            .create_checklist(&forklift(vec![task(None, "Check brakes"), task(None, "Horn")]))
            .unwrap();

        let checklist = store.get_checklist(id).unwrap().unwrap();
        assert_eq!(checklist.name.as_deref(), Some("Forklift A"));
        assert_eq!(checklist.tasks.len(), 2);
        assert_eq!(checklist.tasks[0].description.as_deref(), Some("Check brakes"));
        assert_eq!(checklist.tasks[0].verificado, Some(false));
        assert_eq!(checklist.tasks[0].foto_verificado, Some(false));
    }

    #[test]
    fn test_create_keeps_explicit_null_flags() {
        let store = Store::in_memory().unwrap();
        let mut unchecked = task(None, "Mirrors");
        unchecked.verificado = Some(None);
        unchecked.foto_verificado = Some(Some(true));
        let id = store.create_checklist(&forklift(vec![unchecked])).unwrap();

        let checklist = store.get_checklist(id).unwrap().unwrap();
        assert_eq!(checklist.tasks[0].verificado, None);
        assert_eq!(checklist.tasks[0].foto_verificado, Some(true));
    }

    #[test]
    fn test_get_missing_checklist() {
        let store = Store::in_memory().unwrap();
        assert!(store.get_checklist(42).unwrap().is_none());
    }

    #[test]
    fn test_list_groups_tasks_per_checklist() {
        let store = Store::in_memory().unwrap();
        store.create_checklist(&forklift(vec![task(None, "a")])).unwrap();
        store.create_checklist(&forklift(Vec::new())).unwrap();
        store
            .create_checklist(&forklift(vec![task(None, "b"), task(None, "c")]))
            .unwrap();

        let all = store.list_checklists().unwrap();
        let counts: Vec<usize> = all.iter().map(|c| c.tasks.len()).collect();
        assert_eq!(counts, vec![1, 0, 2]);
    }

    #[test]
    fn test_update_replaces_task_set() {
        let store = Store::in_memory().unwrap();
        let id = store
            .create_checklist(&forklift(vec![task(None, "a"), task(None, "b"), task(None, "c")]))
            .unwrap();
        let before = store.get_checklist(id).unwrap().unwrap();
        let keep = before.tasks[1].id;

        let mut edited = task(Some(keep), "b, edited");
        edited.verificado = Some(Some(true));
        let updated = store
            .update_checklist(id, &forklift(vec![edited, task(None, "d")]))
            .unwrap();
        assert!(updated);

        let after = store.get_checklist(id).unwrap().unwrap();
        let descriptions: Vec<_> = after
            .tasks
            .iter()
            .map(|t| t.description.clone().unwrap())
            .collect();
        assert_eq!(descriptions, vec!["b, edited", "d"]);
        assert_eq!(after.tasks[0].id, keep);
        assert_eq!(after.tasks[0].verificado, Some(true));
        // Omitted flags are stored as null on update.
        assert_eq!(after.tasks[0].foto_verificado, None);
        assert_eq!(task_count(&store), 2);
    }

    #[test]
    fn test_update_ignores_unknown_task_ids() {
        let store = Store::in_memory().unwrap();
        let id = store.create_checklist(&forklift(vec![task(None, "a")])).unwrap();

        store
            .update_checklist(id, &forklift(vec![task(Some(999), "ghost")]))
            .unwrap();

        let after = store.get_checklist(id).unwrap().unwrap();
        assert!(after.tasks.is_empty());
    }

    #[test]
    fn test_update_touches_task_of_another_checklist() {
        let store = Store::in_memory().unwrap();
        let first = store.create_checklist(&forklift(vec![task(None, "a")])).unwrap();
        let second = store.create_checklist(&forklift(vec![task(None, "b")])).unwrap();
        let foreign = store.get_checklist(second).unwrap().unwrap().tasks[0].id;

        store
            .update_checklist(first, &forklift(vec![task(Some(foreign), "b, renamed")]))
            .unwrap();

        let second = store.get_checklist(second).unwrap().unwrap();
        assert_eq!(second.tasks[0].description.as_deref(), Some("b, renamed"));
        assert!(store.get_checklist(first).unwrap().unwrap().tasks.is_empty());
    }

    #[test]
    fn test_update_missing_checklist() {
        let store = Store::in_memory().unwrap();
        assert!(!store.update_checklist(7, &forklift(Vec::new())).unwrap());
    }

    #[test]
    fn test_delete_removes_tasks() {
        let store = Store::in_memory().unwrap();
        let id = store
            .create_checklist(&forklift(vec![task(None, "a"), task(None, "b")]))
            .unwrap();
        let other = store.create_checklist(&forklift(vec![task(None, "c")])).unwrap();

        assert!(store.delete_checklist(id).unwrap());
        assert!(store.get_checklist(id).unwrap().is_none());
        assert!(store.get_checklist(other).unwrap().is_some());
        assert_eq!(task_count(&store), 1);
        assert!(!store.delete_checklist(id).unwrap());
    }
}
