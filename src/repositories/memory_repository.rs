use futures::future::BoxFuture;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::{
    models::{
        admin_credential_model::AdminCredential, organization_model::Organization,
        session_model::Session,
    },
    repositories::storage::{
        CredentialStorage, OrganizationStorage, SessionStorage, StorageError, StorageResult,
    },
};

fn holds_live_name(records: &[Organization], name: &str, except_id: Option<&str>) -> bool {
    records
        .iter()
        .filter(|record| Some(record.id.as_str()) != except_id)
        .any(|record| record.is_live() && record.name == name)
}

#[derive(Default)]
pub struct InMemoryOrganizationRepository {
    records: RwLock<Vec<Organization>>,
}

impl OrganizationStorage for InMemoryOrganizationRepository {
    fn find_all(&self) -> BoxFuture<'_, StorageResult<Vec<Organization>>> {
        Box::pin(async move { Ok(self.records.read().await.clone()) })
    }

    fn find_by_name<'a>(
        &'a self,
        name: &'a str,
    ) -> BoxFuture<'a, StorageResult<Vec<Organization>>> {
        Box::pin(async move {
            let records = self.records.read().await;
            Ok(records
                .iter()
                .filter(|record| record.name == name)
                .cloned()
                .collect())
        })
    }

    fn insert(&self, organization: Organization) -> BoxFuture<'_, StorageResult<Organization>> {
        Box::pin(async move {
            let mut records = self.records.write().await;

            if organization.is_live() && holds_live_name(&records, &organization.name, None) {
                return Err(StorageError::Duplicate(organization.name));
            }

            records.push(organization.clone());
            Ok(organization)
        })
    }

    fn replace(&self, organization: Organization) -> BoxFuture<'_, StorageResult<Organization>> {
        Box::pin(async move {
            let mut records = self.records.write().await;

            let Some(index) = records.iter().position(|record| record.id == organization.id)
            else {
                return Err(StorageError::Missing(organization.id));
            };

            if organization.is_live()
                && holds_live_name(&records, &organization.name, Some(organization.id.as_str()))
            {
                return Err(StorageError::Duplicate(organization.name));
            }

            records[index] = organization.clone();
            Ok(organization)
        })
    }

    fn remove<'a>(&'a self, id: &'a str) -> BoxFuture<'a, StorageResult<()>> {
        Box::pin(async move {
            self.records.write().await.retain(|record| record.id != id);
            Ok(())
        })
    }
}

#[derive(Default)]
pub struct InMemoryCredentialRepository {
    credentials: RwLock<HashMap<String, AdminCredential>>,
}

impl CredentialStorage for InMemoryCredentialRepository {
    fn find_by_email<'a>(
        &'a self,
        email: &'a str,
    ) -> BoxFuture<'a, StorageResult<Option<AdminCredential>>> {
        Box::pin(async move { Ok(self.credentials.read().await.get(email).cloned()) })
    }

    fn insert(&self, credential: AdminCredential) -> BoxFuture<'_, StorageResult<()>> {
        Box::pin(async move {
            let mut credentials = self.credentials.write().await;

            if credentials.contains_key(&credential.email) {
                return Err(StorageError::Duplicate(credential.email));
            }

            credentials.insert(credential.email.clone(), credential);
            Ok(())
        })
    }

    fn reassign<'a>(
        &'a self,
        organization_id: &'a str,
        new_name: &'a str,
    ) -> BoxFuture<'a, StorageResult<u64>> {
        Box::pin(async move {
            let mut moved = 0;
            for credential in self.credentials.write().await.values_mut() {
                if credential.organization_id == organization_id {
                    credential.organization_name = new_name.to_string();
                    moved += 1;
                }
            }
            Ok(moved)
        })
    }
}

#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStorage for InMemorySessionRepository {
    fn insert(&self, session: Session) -> BoxFuture<'_, StorageResult<()>> {
        Box::pin(async move {
            self.sessions
                .write()
                .await
                .insert(session.token.clone(), session);
            Ok(())
        })
    }

    fn find<'a>(&'a self, token: &'a str) -> BoxFuture<'a, StorageResult<Option<Session>>> {
        Box::pin(async move { Ok(self.sessions.read().await.get(token).cloned()) })
    }

    fn remove<'a>(&'a self, token: &'a str) -> BoxFuture<'a, StorageResult<()>> {
        Box::pin(async move {
            self.sessions.write().await.remove(token);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn insert_rejects_live_duplicate_but_not_deleted_one() {
        let repository = InMemoryOrganizationRepository::default();
        let now = Utc::now();

        let mut first = repository
            .insert(Organization::new("Acme Corp", now))
            .await
            .unwrap();

        let duplicate = repository.insert(Organization::new("Acme Corp", now)).await;
        assert!(matches!(duplicate, Err(StorageError::Duplicate(_))));

        first.soft_delete(Utc::now());
        repository.replace(first).await.unwrap();

        repository
            .insert(Organization::new("Acme Corp", now))
            .await
            .unwrap();
        assert_eq!(repository.find_by_name("Acme Corp").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn replace_enforces_uniqueness_against_other_records() {
        let repository = InMemoryOrganizationRepository::default();
        let now = Utc::now();

        repository
            .insert(Organization::new("Acme Corp", now))
            .await
            .unwrap();
        let mut globex = repository
            .insert(Organization::new("Globex", now))
            .await
            .unwrap();

        globex.rename("Acme Corp", Utc::now());
        let result = repository.replace(globex).await;
        assert!(matches!(result, Err(StorageError::Duplicate(_))));
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let repository = InMemoryOrganizationRepository::default();
        let now = Utc::now();

        for name in ["Zeta", "Alpha", "Mid"] {
            repository.insert(Organization::new(name, now)).await.unwrap();
        }

        let names: Vec<String> = repository
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|org| org.name)
            .collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[tokio::test]
    async fn reassign_only_touches_the_matching_organization() {
        let repository = InMemoryCredentialRepository::default();
        for (email, organization_id) in [("a@x.com", "org-1"), ("b@x.com", "org-2")] {
            repository
                .insert(AdminCredential {
                    email: email.into(),
                    password_hash: "hash".into(),
                    organization_id: organization_id.into(),
                    organization_name: "Acme Corp".into(),
                    created_at: Utc::now(),
                })
                .await
                .unwrap();
        }

        let moved = repository.reassign("org-1", "Acme Holdings").await.unwrap();
        assert_eq!(moved, 1);

        let renamed = repository.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(renamed.organization_name, "Acme Holdings");
        let untouched = repository.find_by_email("b@x.com").await.unwrap().unwrap();
        assert_eq!(untouched.organization_name, "Acme Corp");
    }
}
