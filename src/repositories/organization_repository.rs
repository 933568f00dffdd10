use crate::{
    config::database::get_collection,
    models::organization_model::Organization,
    repositories::storage::{OrganizationStorage, StorageError, StorageResult},
};
use futures::future::BoxFuture;
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

/// MongoDB-backed organization table. Name uniqueness among live records is
/// enforced by the partial unique index from `create_unique_indexes`.
pub struct OrganizationRepository {
    collection: Collection<Organization>,
}

impl OrganizationRepository {
    pub async fn new(client: &Client, db_name: &str, collection_name: &str) -> Result<Self> {
        let collection = get_collection(client, db_name, collection_name).await?;
        Ok(Self { collection })
    }
}

impl OrganizationStorage for OrganizationRepository {
    fn find_all(&self) -> BoxFuture<'_, StorageResult<Vec<Organization>>> {
        Box::pin(async move {
            let cursor = self.collection.find(doc! {}).await?;
            let organizations: Vec<Organization> = cursor.try_collect().await?;
            Ok(organizations)
        })
    }

    fn find_by_name<'a>(
        &'a self,
        name: &'a str,
    ) -> BoxFuture<'a, StorageResult<Vec<Organization>>> {
        Box::pin(async move {
            let cursor = self
                .collection
                .find(doc! { "organization_name": name })
                .await?;
            let organizations: Vec<Organization> = cursor.try_collect().await?;
            Ok(organizations)
        })
    }

    fn insert(&self, organization: Organization) -> BoxFuture<'_, StorageResult<Organization>> {
        Box::pin(async move {
            self.collection
                .insert_one(&organization)
                .await
                .map_err(|err| StorageError::from_write_error(err, &organization.name))?;
            Ok(organization)
        })
    }

    fn replace(&self, organization: Organization) -> BoxFuture<'_, StorageResult<Organization>> {
        Box::pin(async move {
            let result = self
                .collection
                .replace_one(doc! { "id": organization.id.as_str() }, &organization)
                .await
                .map_err(|err| StorageError::from_write_error(err, &organization.name))?;

            if result.matched_count == 0 {
                return Err(StorageError::Missing(organization.id));
            }

            Ok(organization)
        })
    }

    fn remove<'a>(&'a self, id: &'a str) -> BoxFuture<'a, StorageResult<()>> {
        Box::pin(async move {
            self.collection.delete_one(doc! { "id": id }).await?;
            Ok(())
        })
    }
}
