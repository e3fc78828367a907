//! Background commands and server status.

use log::info;

use crate::error::Result;
use crate::lidarr::models::{Command, OneOrMany, SystemStatus};
use crate::lidarr::queries::LidarrCommand;
use crate::lidarr::{one, one_or_many, path_with_id, LidarrClient};

impl LidarrClient {
    /// Queues a command and returns it as the server tracks it.
    pub async fn post_command(&self, command: &LidarrCommand) -> Result<Command> {
        let body = command.to_body()?;
        info!("Queueing command `{}`", command.name());
        let body = self.client.post("command", &[], Some(&body)).await?;
        Ok(one(body))
    }

    /// Every queued or running command, or just the one with `id`.
    pub async fn get_command(&self, id: Option<i64>) -> Result<OneOrMany<Command>> {
        let body = self.client.get(&path_with_id("command", id), &[]).await?;
        Ok(one_or_many(body))
    }

    pub async fn get_system_status(&self) -> Result<SystemStatus> {
        let body = self.client.get("system/status", &[]).await?;
        Ok(one(body))
    }
}

#[cfg(test)]
mod system_tests {
    use super::*;
    use crate::lidarr::offline_client;

    #[tokio::test]
    async fn test_command_payload_checked_before_sending() {
        let client = offline_client();

        let err = client
            .post_command(&LidarrCommand::RefreshAlbum { album_id: 0 })
            .await
            .unwrap_err();
        assert!(err.is_precondition());

        let err = client
            .post_command(&LidarrCommand::RetagFiles {
                artist_id: 1,
                files: vec![],
            })
            .await
            .unwrap_err();
        assert!(err.is_precondition());
    }

    #[tokio::test]
    async fn test_command_without_payload_is_sent() {
        let client = offline_client();
        let err = client
            .post_command(&LidarrCommand::RssSync)
            .await
            .unwrap_err();
        assert!(!err.is_precondition());
    }
}
