pub mod checklist;
pub mod task;
pub mod template;
