use crate::{
    config::app_config::MongoSettings,
    models::{
        admin_credential_model::AdminCredential, organization_model::Organization,
        session_model::Session,
    },
    types::models::organization::organization_status::OrganizationStatus,
};
use mongodb::{
    Client, Collection, IndexModel,
    bson::{Document, doc},
    error::Error as MongoError,
    options::{ClientOptions, IndexOptions},
};

const APP_NAME: &str = "org_console_backend";

pub async fn connect_to_database(settings: &MongoSettings) -> Result<Client, MongoError> {
    let mut client_options = ClientOptions::parse(settings.uri.as_str()).await?;
    client_options.app_name = Some(APP_NAME.to_string());

    let client = Client::with_options(client_options)?;
    client.database("admin").run_command(doc! { "ping": 1 }).await?;
    Ok(client)
}

pub async fn get_collection<T>(
    client: &Client,
    db_name: &str,
    collection_name: &str,
) -> Result<Collection<T>, MongoError>
where
    T: serde::de::DeserializeOwned + serde::Serialize + Unpin + Send + Sync,
{
    Ok(client.database(db_name).collection::<T>(collection_name))
}

async fn create_unique_index<T>(
    collection: &Collection<T>,
    field: &str,
    partial_filter: Option<Document>,
) -> Result<(), MongoError>
where
    T: Send + Sync,
{
    let options = match partial_filter {
        Some(filter) => IndexOptions::builder()
            .unique(true)
            .partial_filter_expression(filter)
            .build(),
        None => IndexOptions::builder().unique(true).build(),
    };

    let index = IndexModel::builder()
        .keys(doc! { field: 1 })
        .options(options)
        .build();

    collection.create_index(index).await?;
    Ok(())
}

/// Name uniqueness only binds live organizations, so the organization index
/// is partial over the live statuses (needs MongoDB 6.0+ for `$in`).
pub async fn create_unique_indexes(
    client: &Client,
    settings: &MongoSettings,
) -> Result<(), MongoError> {
    let live_statuses: Vec<String> = OrganizationStatus::LIVE
        .iter()
        .map(ToString::to_string)
        .collect();

    let organizations = get_collection::<Organization>(
        client,
        &settings.db_name,
        &settings.organizations_collection,
    )
    .await?;
    create_unique_index(&organizations, "id", None).await?;
    create_unique_index(
        &organizations,
        "organization_name",
        Some(doc! { "status": { "$in": live_statuses } }),
    )
    .await?;

    let admins =
        get_collection::<AdminCredential>(client, &settings.db_name, &settings.admins_collection)
            .await?;
    create_unique_index(&admins, "email", None).await?;

    let sessions =
        get_collection::<Session>(client, &settings.db_name, &settings.sessions_collection)
            .await?;
    create_unique_index(&sessions, "token", None).await?;

    Ok(())
}
