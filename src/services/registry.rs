use std::sync::Arc;

use crate::error::RegistryError;
use crate::models::{Chain, ChainInfo, NewChain, NewRpcUrl, Records, RpcUrl, Table};
use crate::repo::storage::StorageRepo;
use crate::util::validate::{is_valid_api_class, is_valid_url};

/// Write gating and composite lookups on top of the storage primitives.
/// Validators run before any store mutation, so invalid input never reaches
/// persistence.
pub struct RegistryService {
    storage_repo: Arc<StorageRepo>,
}

impl RegistryService {
    pub fn new(storage_repo: Arc<StorageRepo>) -> Self {
        Self { storage_repo }
    }

    pub async fn create_chain(&self, new_chain: &NewChain) -> Result<(), RegistryError> {
        if new_chain.name.is_empty() {
            return Err(RegistryError::Validation(
                "chain name must not be empty".to_owned(),
            ));
        }
        if !is_valid_api_class(&new_chain.api_class) {
            return Err(RegistryError::Validation(format!(
                "invalid api_class '{}'",
                new_chain.api_class
            )));
        }
        self.storage_repo.create_chain(new_chain).await
    }

    pub async fn create_rpc_url(&self, new_rpc_url: &NewRpcUrl) -> Result<(), RegistryError> {
        if !is_valid_url(&new_rpc_url.url) {
            return Err(RegistryError::Validation(format!(
                "invalid url '{}'",
                new_rpc_url.url
            )));
        }
        self.storage_repo.create_rpc_url(new_rpc_url).await
    }

    pub async fn list(&self, table: Table) -> Result<Records, RegistryError> {
        self.storage_repo.list(table).await
    }

    pub async fn get_chain_by_name(&self, name: &str) -> Result<Chain, RegistryError> {
        self.storage_repo
            .get_chain_by_name(name)
            .await?
            .ok_or(RegistryError::NotFound)
    }

    /// Resolve a url to its chain. Succeeds only when both the url row and
    /// the chain it references exist; an orphaned url row is a miss.
    pub async fn get_chain_by_url(&self, url: &str) -> Result<Chain, RegistryError> {
        let url_record = self
            .storage_repo
            .get_rpc_url_by_url(url)
            .await?
            .ok_or(RegistryError::NotFound)?;
        self.get_chain_by_name(&url_record.chain_name).await
    }

    /// All url strings registered for a chain. An empty result reads as a
    /// missing chain here, unlike the embedded list in `get_chain_info`.
    pub async fn get_urls_for_chain(&self, chain_name: &str) -> Result<Vec<String>, RegistryError> {
        let urls = self.storage_repo.get_urls_for_chain(chain_name).await?;
        if urls.is_empty() {
            return Err(RegistryError::NotFound);
        }
        Ok(urls)
    }

    pub async fn update_rpc_url(
        &self,
        old_url: &str,
        update: &NewRpcUrl,
    ) -> Result<RpcUrl, RegistryError> {
        if !is_valid_url(&update.url) {
            return Err(RegistryError::Validation(format!(
                "invalid url '{}'",
                update.url
            )));
        }
        let affected = self
            .storage_repo
            .update_rpc_url(old_url, &update.url, &update.chain_name)
            .await?;
        if affected == 0 {
            return Err(RegistryError::NotFound);
        }
        Ok(RpcUrl {
            url: update.url.clone(),
            chain_name: update.chain_name.clone(),
        })
    }

    /// Chain deletion does not cascade: url rows keyed to the deleted chain
    /// stay behind.
    pub async fn delete_chain(&self, name: &str) -> Result<u64, RegistryError> {
        self.storage_repo.delete_chain(name).await
    }

    pub async fn delete_rpc_url(&self, url: &str) -> Result<(), RegistryError> {
        let affected = self.storage_repo.delete_rpc_url(url).await?;
        if affected == 0 {
            return Err(RegistryError::NotFound);
        }
        Ok(())
    }

    pub async fn delete_rpc_urls_by_chain(&self, chain_name: &str) -> Result<u64, RegistryError> {
        self.storage_repo.delete_rpc_urls_by_chain(chain_name).await
    }

    /// Single chain joined with all of its urls. The url list may be empty
    /// here; only the chain row itself must exist.
    pub async fn get_chain_info(&self, name: &str) -> Result<ChainInfo, RegistryError> {
        let chain = self.get_chain_by_name(name).await?;
        let urls = self.storage_repo.get_urls_for_chain(name).await?;
        Ok(ChainInfo {
            chain_name: chain.name,
            api_class: chain.api_class,
            urls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_service() -> RegistryService {
        let storage_repo = StorageRepo::new("sqlite::memory:", 1)
            .await
            .expect("in-memory store");
        RegistryService::new(Arc::new(storage_repo))
    }

    #[rocket::async_test]
    async fn rejects_invalid_api_class_before_storage() {
        let service = test_service().await;
        let err = service
            .create_chain(&NewChain {
                name: "btc".to_owned(),
                api_class: "bitcoin".to_owned(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));

        let err = service.get_chain_by_name("btc").await.unwrap_err();
        assert!(matches!(err, RegistryError::NotFound));
    }

    #[rocket::async_test]
    async fn rejects_invalid_url_before_storage() {
        let service = test_service().await;
        let err = service
            .create_rpc_url(&NewRpcUrl {
                url: "ftp://x".to_owned(),
                chain_name: "eth".to_owned(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));
    }

    #[rocket::async_test]
    async fn chain_by_url_misses_when_chain_was_deleted() {
        let service = test_service().await;
        service
            .create_chain(&NewChain {
                name: "eth".to_owned(),
                api_class: "ethereum".to_owned(),
            })
            .await
            .unwrap();
        service
            .create_rpc_url(&NewRpcUrl {
                url: "https://rpc.example".to_owned(),
                chain_name: "eth".to_owned(),
            })
            .await
            .unwrap();

        let chain = service.get_chain_by_url("https://rpc.example").await.unwrap();
        assert_eq!(chain.name, "eth");

        // The url row is orphaned by the chain deletion, so resolution fails
        // on the second hop.
        service.delete_chain("eth").await.unwrap();
        let err = service
            .get_chain_by_url("https://rpc.example")
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotFound));
    }

    #[rocket::async_test]
    async fn empty_url_list_is_not_found_but_chain_info_tolerates_it() {
        let service = test_service().await;
        service
            .create_chain(&NewChain {
                name: "apt".to_owned(),
                api_class: "aptos".to_owned(),
            })
            .await
            .unwrap();

        let err = service.get_urls_for_chain("apt").await.unwrap_err();
        assert!(matches!(err, RegistryError::NotFound));

        let info = service.get_chain_info("apt").await.unwrap();
        assert_eq!(info.chain_name, "apt");
        assert_eq!(info.api_class, "aptos");
        assert!(info.urls.is_empty());
    }

    #[rocket::async_test]
    async fn update_missing_url_is_not_found() {
        let service = test_service().await;
        let err = service
            .update_rpc_url(
                "https://missing.example",
                &NewRpcUrl {
                    url: "https://new.example".to_owned(),
                    chain_name: "eth".to_owned(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotFound));
    }
}
