use serde_json::Value;

use crate::model::{Asset, AssetKind, Project, Task};

// Defaults used when a shape carries no project identity of its own
const RECOVERY_PROJECT_ID: &str = "p-sample";
const RECOVERY_PROJECT_NAME: &str = "Sample";
const WRAPPED_PROJECT_ID: &str = "p-";
const WRAPPED_PROJECT_NAME: &str = "project";
const DEFAULT_ASSET_TITLE: &str = "Untitled asset";

/// Reshape a raw remote document into the canonical project model.
///
/// Accepted shapes, first match wins:
/// 1. a project (`tasks` is an array)
/// 2. a bare task (`assets` is an array) — wrapped as a one-task project
/// 3. a `{ project: { tasks: … } }` wrapper — unwrapped
/// 4. anything else — read best-effort
///
/// If the task list comes out empty, one more reinterpretation treats
/// `raw.task` (or `raw` itself) as a single task, so every document
/// produces at least one renderable task.
pub fn normalize(raw: &Value) -> Project {
    let mut project = if raw.get("tasks").is_some_and(Value::is_array) {
        project_from_value(raw)
    } else if raw.get("assets").is_some_and(Value::is_array) {
        Project {
            id: pick_text(raw, &["projectId", "id"])
                .unwrap_or_else(|| WRAPPED_PROJECT_ID.into()),
            name: pick_text(raw, &["projectName", "name"])
                .unwrap_or_else(|| WRAPPED_PROJECT_NAME.into()),
            tasks: vec![task_from_value(raw)],
        }
    } else if raw.get("project").and_then(|p| p.get("tasks")).is_some() {
        project_from_value(&raw["project"])
    } else {
        log::warn!("unrecognized document shape, reading best-effort");
        project_from_value(raw)
    };

    if project.tasks.is_empty() {
        let single = raw.get("task").unwrap_or(raw);
        project.tasks.push(task_from_value(single));
    }

    project
}

fn project_from_value(value: &Value) -> Project {
    let tasks = value
        .get("tasks")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(task_from_value).collect())
        .unwrap_or_default();

    Project {
        id: pick_text(value, &["projectId", "id"])
            .unwrap_or_else(|| RECOVERY_PROJECT_ID.into()),
        name: pick_text(value, &["projectName", "name"])
            .unwrap_or_else(|| RECOVERY_PROJECT_NAME.into()),
        tasks,
    }
}

fn task_from_value(value: &Value) -> Task {
    let assets = value
        .get("assets")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(asset_from_value).collect())
        .unwrap_or_default();

    Task {
        id: pick_text(value, &["taskId", "id"]).unwrap_or_default(),
        name: pick_text(value, &["taskName", "name"]).unwrap_or_default(),
        meta: pick_text(value, &["taskMeta", "meta"]).unwrap_or_default(),
        assets,
    }
}

fn asset_from_value(value: &Value) -> Asset {
    Asset {
        id: pick_text(value, &["assetId", "id", "assetID"]).unwrap_or_else(generated_asset_id),
        title: pick_text(value, &["title", "name", "assetName"])
            .unwrap_or_else(|| DEFAULT_ASSET_TITLE.into()),
        kind: pick_text(value, &["type", "assetType", "format"])
            .map(|t| AssetKind::parse(&t))
            .unwrap_or_default(),
        description: pick_text(value, &["description", "desc", "summary"]).unwrap_or_default(),
        url: pick(value, &["url", "link", "drive_link"]).and_then(opt_text),
        subtype: pick(value, &["subtype", "mime"]).and_then(opt_text),
    }
}

/// First alias whose key is present on the object. Presence is what
/// counts: `""`, `0`, and `null` are all defined values and win over
/// later aliases; only an absent key is skipped.
fn pick<'a>(value: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    let map = value.as_object()?;
    aliases.iter().find_map(|key| map.get(*key))
}

/// Render a chosen value as text. A defined `null` reads as empty.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn pick_text(value: &Value, aliases: &[&str]) -> Option<String> {
    pick(value, aliases).map(text)
}

/// Optional fields: a defined `null` reads as absent
fn opt_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(text(other)),
    }
}

/// Fresh display-only asset id, not stable across reloads
fn generated_asset_id() -> String {
    let rand = uuid::Uuid::new_v4().simple().to_string();
    format!("asset-{}", &rand[..6])
}
