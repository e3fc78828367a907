use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::lidarr::models::raw::{Hydrate, Raw};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub command_name: Option<String>,
    pub message: Option<String>,
    pub body: CommandBody,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub result: Option<String>,
    pub queued: Option<DateTime<Utc>>,
    pub started: Option<DateTime<Utc>>,
    pub ended: Option<DateTime<Utc>>,
    pub duration: Option<String>,
    pub exception: Option<String>,
    pub trigger: Option<String>,
    pub client_user_agent: Option<String>,
    pub state_change_time: Option<DateTime<Utc>>,
    pub send_updates_to_client: Option<bool>,
    pub update_scheduled_task: Option<bool>,
    pub last_execution_time: Option<DateTime<Utc>>,
}

impl Hydrate for Command {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            id: raw.int("id"),
            name: raw.string("name"),
            command_name: raw.string("commandName"),
            message: raw.string("message"),
            body: raw.record("body"),
            priority: raw.string("priority"),
            status: raw.string("status"),
            result: raw.string("result"),
            queued: raw.datetime("queued"),
            started: raw.datetime("started"),
            ended: raw.datetime("ended"),
            duration: raw.string("duration"),
            exception: raw.string("exception"),
            trigger: raw.string("trigger"),
            client_user_agent: raw.string("clientUserAgent"),
            state_change_time: raw.datetime("stateChangeTime"),
            send_updates_to_client: raw.bool("sendUpdatesToClient"),
            update_scheduled_task: raw.bool("updateScheduledTask"),
            last_execution_time: raw.datetime("lastExecutionTime"),
        }
    }
}

impl Command {
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status.as_deref(),
            Some("completed" | "failed" | "aborted" | "cancelled" | "orphaned")
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandBody {
    pub name: Option<String>,
    pub artist_id: Option<i64>,
    pub artist_ids: Vec<i64>,
    pub album_id: Option<i64>,
    pub album_ids: Vec<i64>,
    pub files: Vec<i64>,
    pub path: Option<String>,
    pub send_updates_to_client: Option<bool>,
    pub update_scheduled_task: Option<bool>,
    pub completion_message: Option<String>,
    pub requires_disk_access: Option<bool>,
    pub is_exclusive: Option<bool>,
    pub is_type_exclusive: Option<bool>,
    pub is_long_running: Option<bool>,
    pub trigger: Option<String>,
    pub suppress_messages: Option<bool>,
    pub last_execution_time: Option<DateTime<Utc>>,
    pub last_start_time: Option<DateTime<Utc>>,
}

impl Hydrate for CommandBody {
    fn from_raw(raw: Raw<'_>) -> Self {
        Self {
            name: raw.string("name"),
            artist_id: raw.int("artistId"),
            artist_ids: raw.ints("artistIds"),
            album_id: raw.int("albumId"),
            album_ids: raw.ints("albumIds"),
            files: raw.ints("files"),
            path: raw.string("path"),
            send_updates_to_client: raw.bool("sendUpdatesToClient"),
            update_scheduled_task: raw.bool("updateScheduledTask"),
            completion_message: raw.string("completionMessage"),
            requires_disk_access: raw.bool("requiresDiskAccess"),
            is_exclusive: raw.bool("isExclusive"),
            is_type_exclusive: raw.bool("isTypeExclusive"),
            is_long_running: raw.bool("isLongRunning"),
            trigger: raw.string("trigger"),
            suppress_messages: raw.bool("suppressMessages"),
            last_execution_time: raw.datetime("lastExecutionTime"),
            last_start_time: raw.datetime("lastStartTime"),
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut str = String::default();

        str += &format!("[{}] ", self.id.unwrap_or_default());
        str += self.name.as_deref().unwrap_or("Unknown");
        str += &format!(" ({})", self.status.as_deref().unwrap_or("unknown"));
        if let Some(message) = &self.message {
            str += &format!(": {message}");
        }

        write!(f, "{str}")
    }
}

#[cfg(test)]
mod command_tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_command_with_body() {
        let command = Command::hydrate(&json!({
            "id": 12,
            "name": "AlbumSearch",
            "commandName": "Album Search",
            "status": "completed",
            "queued": "2024-02-03T04:05:06.7Z",
            "body": {"albumIds": [1, 2], "isExclusive": false, "sendUpdatesToClient": true}
        }));

        assert!(command.is_finished());
        assert_eq!(command.body.album_ids, vec![1, 2]);
        assert_eq!(command.body.send_updates_to_client, Some(true));
        assert!(command.queued.is_some());
        assert_eq!(command.started, None);
    }

    #[test]
    fn test_queued_command_without_body() {
        let command = Command::hydrate(&json!({"id": 13, "status": "queued"}));
        assert!(!command.is_finished());
        assert_eq!(command.body, CommandBody::default());
    }

    #[test]
    fn test_display() {
        let command = Command::hydrate(&json!({
            "id": 4,
            "name": "RssSync",
            "status": "started",
            "message": "Starting RSS Sync"
        }));
        assert_eq!(command.to_string(), "[4] RssSync (started): Starting RSS Sync");
        assert_eq!(Command::default().to_string(), "[0] Unknown (unknown)");
    }
}
