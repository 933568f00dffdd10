use crate::{
    config::database::get_collection,
    models::session_model::Session,
    repositories::storage::{SessionStorage, StorageError, StorageResult},
};
use futures::future::BoxFuture;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct SessionRepository {
    collection: Collection<Session>,
}

impl SessionRepository {
    pub async fn new(client: &Client, db_name: &str, collection_name: &str) -> Result<Self> {
        let collection = get_collection(client, db_name, collection_name).await?;
        Ok(Self { collection })
    }
}

impl SessionStorage for SessionRepository {
    fn insert(&self, session: Session) -> BoxFuture<'_, StorageResult<()>> {
        Box::pin(async move {
            self.collection
                .insert_one(&session)
                .await
                .map_err(|err| StorageError::from_write_error(err, "session token"))?;
            Ok(())
        })
    }

    fn find<'a>(&'a self, token: &'a str) -> BoxFuture<'a, StorageResult<Option<Session>>> {
        Box::pin(async move { Ok(self.collection.find_one(doc! { "token": token }).await?) })
    }

    fn remove<'a>(&'a self, token: &'a str) -> BoxFuture<'a, StorageResult<()>> {
        Box::pin(async move {
            self.collection.delete_one(doc! { "token": token }).await?;
            Ok(())
        })
    }
}
