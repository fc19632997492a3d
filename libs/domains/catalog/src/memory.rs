//! In-process CatalogRepository for tests and database-less local runs.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::BTreeSet;
use tokio::sync::RwLock;

use crate::error::CatalogResult;
use crate::mongodb::{PRODUCT_COLLECTION, VENDOR_COLLECTION};
use crate::models::{EntityId, NewProduct, NewVendor, Product, Vendor};
use crate::query::{ProductFilter, VendorFilter};
use crate::repository::CatalogRepository;

/// Insertion-ordered vectors behind a lock. Ids are fresh ObjectId hex strings.
#[derive(Default)]
pub struct InMemoryCatalogRepository {
    vendors: RwLock<Vec<Vendor>>,
    products: RwLock<Vec<Product>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store records as-is, keeping their ids.
    pub fn with_records(vendors: Vec<Vendor>, products: Vec<Product>) -> Self {
        Self {
            vendors: RwLock::new(vendors),
            products: RwLock::new(products),
        }
    }
}

fn next_id() -> EntityId {
    EntityId::new(ObjectId::new().to_hex())
}

fn page<T: Clone>(items: impl Iterator<Item = T>, skip: u64, limit: u64) -> Vec<T> {
    let skip = usize::try_from(skip).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    items.skip(skip).take(limit).collect()
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn count_vendors(&self, filter: &VendorFilter) -> CatalogResult<u64> {
        let vendors = self.vendors.read().await;
        Ok(vendors.iter().filter(|v| filter.matches(v)).count() as u64)
    }

    async fn find_vendors(
        &self,
        filter: &VendorFilter,
        skip: u64,
        limit: u64,
    ) -> CatalogResult<Vec<Vendor>> {
        let vendors = self.vendors.read().await;
        Ok(page(
            vendors.iter().filter(|v| filter.matches(v)).cloned(),
            skip,
            limit,
        ))
    }

    async fn get_vendor(&self, id: &EntityId) -> CatalogResult<Option<Vendor>> {
        let vendors = self.vendors.read().await;
        Ok(vendors.iter().find(|v| &v.id == id).cloned())
    }

    async fn insert_vendors(&self, vendors: Vec<NewVendor>) -> CatalogResult<Vec<EntityId>> {
        let mut stored = self.vendors.write().await;
        let ids: Vec<EntityId> = vendors
            .into_iter()
            .map(|input| {
                let id = next_id();
                stored.push(input.into_vendor(id.clone()));
                id
            })
            .collect();
        Ok(ids)
    }

    async fn count_products(&self, filter: &ProductFilter) -> CatalogResult<u64> {
        let products = self.products.read().await;
        Ok(products.iter().filter(|p| filter.matches(p)).count() as u64)
    }

    async fn find_products(
        &self,
        filter: &ProductFilter,
        skip: u64,
        limit: u64,
    ) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(page(
            products.iter().filter(|p| filter.matches(p)).cloned(),
            skip,
            limit,
        ))
    }

    async fn get_product(&self, id: &EntityId) -> CatalogResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| &p.id == id).cloned())
    }

    async fn insert_products(&self, products: Vec<NewProduct>) -> CatalogResult<Vec<EntityId>> {
        let mut stored = self.products.write().await;
        let ids: Vec<EntityId> = products
            .into_iter()
            .map(|input| {
                let id = next_id();
                stored.push(input.into_product(id.clone()));
                id
            })
            .collect();
        Ok(ids)
    }

    async fn distinct_categories(&self) -> CatalogResult<Vec<String>> {
        let products = self.products.read().await;
        let categories: BTreeSet<String> = products.iter().map(|p| p.category.clone()).collect();
        Ok(categories.into_iter().collect())
    }

    /// Collections that hold at least one record, like a document store
    /// that creates collections on first insert.
    async fn collection_names(&self) -> CatalogResult<Vec<String>> {
        let mut names = Vec::new();
        if !self.products.read().await.is_empty() {
            names.push(PRODUCT_COLLECTION.to_string());
        }
        if !self.vendors.read().await.is_empty() {
            names.push(VENDOR_COLLECTION.to_string());
        }
        Ok(names)
    }

    async fn ping(&self) -> CatalogResult<()> {
        Ok(())
    }
}
