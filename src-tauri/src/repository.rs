//! The single data-access seam every screen goes through.

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;

use crate::api::envelope::{unwrap_item, unwrap_list};
use crate::api::multipart::Payload;
use crate::api::{ApiClient, ApiError, Operation, Resource};
use crate::models::{
    AdminAccount, Brand, City, DeleteReceipt, GroupAccount, GroupBrand, RedeemedDiscount, Vendor,
    Venue,
};

pub trait Entity: DeserializeOwned + Serialize + Send + Sync + 'static {
    const RESOURCE: Resource;

    fn id(&self) -> &str;
}

macro_rules! entity {
    ($ty:ty, $path:literal, $singular:literal, $plural:literal) => {
        entity!($ty, $path, $singular, $plural, $singular);
    };
    ($ty:ty, $path:literal, $singular:literal, $plural:literal, $record:literal) => {
        impl Entity for $ty {
            const RESOURCE: Resource = Resource {
                path: $path,
                singular: $singular,
                plural: $plural,
                record: $record,
            };

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

entity!(AdminAccount, "admins", "admin", "admins");
entity!(City, "cities", "city", "cities");
entity!(Brand, "brands", "brand", "brands");
entity!(Venue, "venues", "venue", "venues");
entity!(GroupAccount, "groupAccount", "group account", "group accounts");
entity!(GroupBrand, "groupBrands", "group brand", "group brands", "brand");
entity!(Vendor, "H-Vender_Account", "vendor", "vendors");
entity!(RedeemedDiscount, "redeem", "redeemed coupon", "redeemed coupons");

#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    async fn list(&self) -> Result<Vec<E>, ApiError>;
    async fn get(&self, id: &str) -> Result<E, ApiError>;
    async fn create(&self, payload: Payload) -> Result<E, ApiError>;
    async fn update(&self, id: &str, payload: Payload) -> Result<E, ApiError>;
    async fn delete(&self, id: &str) -> Result<DeleteReceipt, ApiError>;
}

pub struct RestRepository<E> {
    api: ApiClient,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> RestRepository<E> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _entity: PhantomData,
        }
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", E::RESOURCE.path, id)
    }

    async fn call(
        &self,
        method: Method,
        path: &str,
        payload: Option<Payload>,
        op: Operation,
    ) -> Result<Value, ApiError> {
        let mut request = self.api.request(method, path);
        if let Some(payload) = payload {
            request = ApiClient::with_payload(request, payload);
        }
        self.api
            .send(request, &E::RESOURCE.fallback_message(op))
            .await
    }

    fn decode(value: Value) -> Result<E, ApiError> {
        serde_json::from_value(value)
            .map_err(|e| ApiError::Decode(format!("{}: {}", E::RESOURCE.singular, e)))
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for RestRepository<E> {
    async fn list(&self) -> Result<Vec<E>, ApiError> {
        let body = self
            .call(Method::GET, E::RESOURCE.path, None, Operation::List)
            .await?;

        let mut items = Vec::new();
        for raw in unwrap_list(body, E::RESOURCE.path) {
            match Self::decode(raw) {
                Ok(item) => items.push(item),
                Err(e) => {
                    let resource = E::RESOURCE.path;
                    tracing::warn!(resource, error = %e, "skipping unreadable record")
                }
            }
        }
        Ok(items)
    }

    async fn get(&self, id: &str) -> Result<E, ApiError> {
        let body = self
            .call(Method::GET, &Self::item_path(id), None, Operation::Get)
            .await?;
        Self::decode(unwrap_item(body))
    }

    async fn create(&self, payload: Payload) -> Result<E, ApiError> {
        let body = self
            .call(Method::POST, E::RESOURCE.path, Some(payload), Operation::Create)
            .await?;
        let item: E = Self::decode(unwrap_item(body))?;
        tracing::info!(resource = E::RESOURCE.path, id = item.id(), "created");
        Ok(item)
    }

    async fn update(&self, id: &str, payload: Payload) -> Result<E, ApiError> {
        let body = self
            .call(Method::PUT, &Self::item_path(id), Some(payload), Operation::Update)
            .await?;
        let item: E = Self::decode(unwrap_item(body))?;
        tracing::info!(resource = E::RESOURCE.path, id, "updated");
        Ok(item)
    }

    async fn delete(&self, id: &str) -> Result<DeleteReceipt, ApiError> {
        let body = self
            .call(Method::DELETE, &Self::item_path(id), None, Operation::Delete)
            .await?;
        tracing::info!(resource = E::RESOURCE.path, id, "deleted");

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(DeleteReceipt { message })
    }
}
