use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

use crate::client::error::ClientError;
use crate::types::item::{Item, RItemBody};
use crate::types::response::MessageRes;
use crate::utils::webutils::encode_segment;

/// The four calls the client makes against the inventory API.
#[async_trait]
pub trait InventoryBackend: Send + Sync {
    async fn list_items(&self) -> Result<Vec<Item>, ClientError>;
    async fn create_item(&self, body: &RItemBody) -> Result<Item, ClientError>;
    /// `Ok(None)` when the server no longer has the item.
    async fn update_item(&self, id: &str, body: &RItemBody) -> Result<Option<Item>, ClientError>;
    async fn delete_item(&self, id: &str) -> Result<(), ClientError>;
}

pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = ClientBuilder::new()
            .user_agent(concat!("homeinv-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpBackend {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, encode_segment(id))
    }
}

async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, ClientError> {
    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(ClientError::Status { status: status.as_u16(), body });
    }
    Ok(res.json::<T>().await?)
}

#[async_trait]
impl InventoryBackend for HttpBackend {
    async fn list_items(&self) -> Result<Vec<Item>, ClientError> {
        let res = self.client.get(self.collection_url()).send().await?;
        read_json(res).await
    }

    async fn create_item(&self, body: &RItemBody) -> Result<Item, ClientError> {
        let res = self.client.post(self.collection_url()).json(body).send().await?;
        read_json(res).await
    }

    async fn update_item(&self, id: &str, body: &RItemBody) -> Result<Option<Item>, ClientError> {
        let res = self.client.put(self.item_url(id)).json(body).send().await?;
        read_json(res).await
    }

    async fn delete_item(&self, id: &str) -> Result<(), ClientError> {
        let res = self.client.delete(self.item_url(id)).send().await?;
        read_json::<MessageRes>(res).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_urls_without_double_slashes() {
        let backend = HttpBackend::new("http://localhost:8080/").unwrap();
        assert_eq!(backend.collection_url(), "http://localhost:8080/");
        assert_eq!(backend.item_url("abc"), "http://localhost:8080/abc");
    }
}
