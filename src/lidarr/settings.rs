//! Server settings: profiles, root folders, import lists and tags.

use log::info;
use serde_json::json;

use crate::error::{LidarrError, Result};
use crate::lidarr::models::{
    ImportList, MetadataProfile, OneOrMany, QualityProfile, RootFolder, Tag, TagDetails,
};
use crate::lidarr::{
    many, one, one_or_many, path_with_id, require_id, to_body, validation_passed, LidarrClient,
};

fn require_label(label: &str) -> Result<String> {
    let label = label.trim();
    if label.is_empty() {
        return Err(LidarrError::precondition("A tag label cannot be blank"));
    }
    Ok(label.to_string())
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

// PROFILES ###################################################################

impl LidarrClient {
    pub async fn get_metadata_profile(&self, id: Option<i64>) -> Result<OneOrMany<MetadataProfile>> {
        let body = self
            .client
            .get(&path_with_id("metadataprofile", id), &[])
            .await?;
        Ok(one_or_many(body))
    }

    pub async fn upd_metadata_profile(&self, profile: &MetadataProfile) -> Result<MetadataProfile> {
        let id = require_id(profile.id, "A metadata profile")?;
        let body = to_body(profile)?;
        let body = self
            .client
            .put(&format!("metadataprofile/{id}"), &[], Some(&body))
            .await?;
        Ok(one(body))
    }

    pub async fn del_metadata_profile(&self, id: i64) -> Result<()> {
        info!("Deleting metadata profile {id}");
        self.client
            .delete(&format!("metadataprofile/{id}"), &[], None)
            .await?;
        Ok(())
    }

    pub async fn get_quality_profile(&self, id: Option<i64>) -> Result<OneOrMany<QualityProfile>> {
        let body = self
            .client
            .get(&path_with_id("qualityprofile", id), &[])
            .await?;
        Ok(one_or_many(body))
    }

    pub async fn del_quality_profile(&self, id: i64) -> Result<()> {
        info!("Deleting quality profile {id}");
        self.client
            .delete(&format!("qualityprofile/{id}"), &[], None)
            .await?;
        Ok(())
    }
}

// ROOT FOLDERS ###############################################################

impl LidarrClient {
    pub async fn get_root_folder(&self, id: Option<i64>) -> Result<OneOrMany<RootFolder>> {
        let body = self
            .client
            .get(&path_with_id("rootfolder", id), &[])
            .await?;
        Ok(one_or_many(body))
    }

    pub async fn add_root_folder(&self, folder: &RootFolder) -> Result<RootFolder> {
        if is_blank(&folder.name) || is_blank(&folder.path) {
            return Err(LidarrError::precondition(
                "A root folder needs both a `name` and a `path`",
            ));
        }

        let body = to_body(folder)?;
        let body = self.client.post("rootfolder", &[], Some(&body)).await?;
        Ok(one(body))
    }

    pub async fn del_root_folder(&self, id: i64) -> Result<()> {
        info!("Deleting root folder {id}");
        self.client
            .delete(&format!("rootfolder/{id}"), &[], None)
            .await?;
        Ok(())
    }
}

// IMPORT LISTS ###############################################################

impl LidarrClient {
    pub async fn get_import_list(&self, id: Option<i64>) -> Result<OneOrMany<ImportList>> {
        let body = self
            .client
            .get(&path_with_id("importlist", id), &[])
            .await?;
        Ok(one_or_many(body))
    }

    /// Blank import lists, one per implementation, with their fields and presets.
    pub async fn get_import_list_schema(&self) -> Result<Vec<ImportList>> {
        let body = self.client.get("importlist/schema", &[]).await?;
        Ok(many(body))
    }

    /// Asks the server whether `list` is usable as configured.
    pub async fn test_import_list(&self, list: &ImportList) -> Result<bool> {
        let body = to_body(list)?;
        validation_passed(self.client.post("importlist/test", &[], Some(&body)).await)
    }

    pub async fn test_all_import_lists(&self) -> Result<bool> {
        validation_passed(self.client.post("importlist/testall", &[], None).await)
    }

    pub async fn upd_import_list(&self, list: &ImportList) -> Result<ImportList> {
        let id = require_id(list.id, "An import list")?;
        let body = to_body(list)?;
        let body = self
            .client
            .put(&format!("importlist/{id}"), &[], Some(&body))
            .await?;
        Ok(one(body))
    }

    pub async fn del_import_list(&self, id: i64) -> Result<()> {
        info!("Deleting import list {id}");
        self.client
            .delete(&format!("importlist/{id}"), &[], None)
            .await?;
        Ok(())
    }
}

// TAGS #######################################################################

impl LidarrClient {
    pub async fn get_tag(&self, id: Option<i64>) -> Result<OneOrMany<Tag>> {
        let body = self.client.get(&path_with_id("tag", id), &[]).await?;
        Ok(one_or_many(body))
    }

    /// Tags along with everything that uses them.
    pub async fn get_tag_details(&self, id: Option<i64>) -> Result<OneOrMany<TagDetails>> {
        let body = self
            .client
            .get(&path_with_id("tag/detail", id), &[])
            .await?;
        Ok(one_or_many(body))
    }

    pub async fn create_tag(&self, label: &str) -> Result<Tag> {
        let label = require_label(label)?;
        let body = json!({ "label": label });
        let body = self.client.post("tag", &[], Some(&body)).await?;
        Ok(one(body))
    }

    pub async fn upd_tag(&self, id: i64, label: &str) -> Result<Tag> {
        let label = require_label(label)?;
        let body = json!({ "id": id, "label": label });
        let body = self
            .client
            .put(&format!("tag/{id}"), &[], Some(&body))
            .await?;
        Ok(one(body))
    }

    pub async fn del_tag(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("tag/{id}"), &[], None).await?;
        Ok(())
    }
}
