use crate::{
    config::database::get_collection,
    models::admin_credential_model::AdminCredential,
    repositories::storage::{CredentialStorage, StorageError, StorageResult},
};
use futures::future::BoxFuture;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct AdminCredentialRepository {
    collection: Collection<AdminCredential>,
}

impl AdminCredentialRepository {
    pub async fn new(client: &Client, db_name: &str, collection_name: &str) -> Result<Self> {
        let collection = get_collection(client, db_name, collection_name).await?;
        Ok(Self { collection })
    }
}

impl CredentialStorage for AdminCredentialRepository {
    fn find_by_email<'a>(
        &'a self,
        email: &'a str,
    ) -> BoxFuture<'a, StorageResult<Option<AdminCredential>>> {
        Box::pin(async move { Ok(self.collection.find_one(doc! { "email": email }).await?) })
    }

    fn insert(&self, credential: AdminCredential) -> BoxFuture<'_, StorageResult<()>> {
        Box::pin(async move {
            self.collection
                .insert_one(&credential)
                .await
                .map_err(|err| StorageError::from_write_error(err, &credential.email))?;
            Ok(())
        })
    }

    fn reassign<'a>(
        &'a self,
        organization_id: &'a str,
        new_name: &'a str,
    ) -> BoxFuture<'a, StorageResult<u64>> {
        Box::pin(async move {
            let result = self
                .collection
                .update_many(
                    doc! { "organization_id": organization_id },
                    doc! { "$set": { "organization_name": new_name } },
                )
                .await?;
            Ok(result.modified_count)
        })
    }
}
