//! MongoDB implementation of CatalogRepository

use async_trait::async_trait;
use database::mongodb::check_health_detailed;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, Document, doc, to_document},
    options::{FindOptions, IndexOptions},
};
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{EntityId, NewProduct, NewVendor, Product, Vendor};
use crate::pagination::MAX_SKIP;
use crate::query::{ProductFilter, VendorFilter};
use crate::repository::CatalogRepository;
use crate::serialization::{decode, entity_id_from_bson, id_to_bson};

pub const VENDOR_COLLECTION: &str = "vendor";
pub const PRODUCT_COLLECTION: &str = "product";

/// MongoDB implementation of the CatalogRepository
///
/// Collections are untyped; every fetched document is normalized and decoded
/// into its record type, so shape errors surface here rather than in handlers.
#[derive(Clone)]
pub struct MongoCatalogRepository {
    db: Database,
    vendors: Collection<Document>,
    products: Collection<Document>,
}

impl MongoCatalogRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            db: db.clone(),
            vendors: db.collection(VENDOR_COLLECTION),
            products: db.collection(PRODUCT_COLLECTION),
        }
    }

    /// Initialize indexes backing the listing filters
    pub async fn init_indexes(&self) -> CatalogResult<()> {
        let product_indexes = vec![
            IndexModel::builder()
                .keys(doc! { "category": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "price": 1 })
                .options(IndexOptions::builder().name("idx_price".to_string()).build())
                .build(),
        ];

        let vendor_index = IndexModel::builder()
            .keys(doc! { "verified": 1 })
            .options(
                IndexOptions::builder()
                    .name("idx_verified".to_string())
                    .build(),
            )
            .build();

        self.products.create_indexes(product_indexes).await?;
        self.vendors.create_index(vendor_index).await?;
        tracing::info!("Catalog indexes created successfully");
        Ok(())
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Page through `collection` in `_id` order and decode each document.
    async fn find_page<T: DeserializeOwned>(
        collection: &Collection<Document>,
        filter: Document,
        skip: u64,
        limit: u64,
    ) -> CatalogResult<Vec<T>> {
        let options = FindOptions::builder()
            .sort(doc! { "_id": 1 })
            .skip(skip.min(MAX_SKIP))
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .build();

        let cursor = collection.find(filter).with_options(options).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        documents.into_iter().map(decode).collect()
    }

    async fn find_by_id<T: DeserializeOwned>(
        collection: &Collection<Document>,
        id: &EntityId,
    ) -> CatalogResult<Option<T>> {
        collection
            .find_one(doc! { "_id": id_to_bson(id) })
            .await?
            .map(decode)
            .transpose()
    }

    /// Insert and return ids ordered like `documents`.
    async fn insert_ordered(
        collection: &Collection<Document>,
        documents: Vec<Document>,
    ) -> CatalogResult<Vec<EntityId>> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let expected = documents.len();
        let result = collection.insert_many(documents).await?;

        let mut ids: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
        ids.sort_by_key(|(index, _)| *index);

        if ids.len() != expected {
            return Err(CatalogError::Database(format!(
                "expected {} inserted ids, got {}",
                expected,
                ids.len()
            )));
        }

        Ok(ids.iter().map(|(_, id)| entity_id_from_bson(id)).collect())
    }
}

fn product_document(input: &NewProduct) -> CatalogResult<Document> {
    let mut document = to_document(input)?;
    if let Some(ref vendor_id) = input.vendor_id {
        document.insert("vendor_id", id_to_bson(vendor_id));
    }
    Ok(document)
}

#[async_trait]
impl CatalogRepository for MongoCatalogRepository {
    #[instrument(skip(self))]
    async fn count_vendors(&self, filter: &VendorFilter) -> CatalogResult<u64> {
        Ok(self.vendors.count_documents(filter.to_document()).await?)
    }

    #[instrument(skip(self))]
    async fn find_vendors(
        &self,
        filter: &VendorFilter,
        skip: u64,
        limit: u64,
    ) -> CatalogResult<Vec<Vendor>> {
        Self::find_page(&self.vendors, filter.to_document(), skip, limit).await
    }

    #[instrument(skip(self))]
    async fn get_vendor(&self, id: &EntityId) -> CatalogResult<Option<Vendor>> {
        Self::find_by_id(&self.vendors, id).await
    }

    #[instrument(skip(self, vendors), fields(count = vendors.len()))]
    async fn insert_vendors(&self, vendors: Vec<NewVendor>) -> CatalogResult<Vec<EntityId>> {
        let documents = vendors
            .iter()
            .map(|v| to_document(v).map_err(CatalogError::from))
            .collect::<CatalogResult<Vec<_>>>()?;

        let ids = Self::insert_ordered(&self.vendors, documents).await?;
        tracing::info!(count = ids.len(), "Vendors inserted");
        Ok(ids)
    }

    #[instrument(skip(self))]
    async fn count_products(&self, filter: &ProductFilter) -> CatalogResult<u64> {
        Ok(self.products.count_documents(filter.to_document()).await?)
    }

    #[instrument(skip(self))]
    async fn find_products(
        &self,
        filter: &ProductFilter,
        skip: u64,
        limit: u64,
    ) -> CatalogResult<Vec<Product>> {
        Self::find_page(&self.products, filter.to_document(), skip, limit).await
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: &EntityId) -> CatalogResult<Option<Product>> {
        Self::find_by_id(&self.products, id).await
    }

    #[instrument(skip(self, products), fields(count = products.len()))]
    async fn insert_products(&self, products: Vec<NewProduct>) -> CatalogResult<Vec<EntityId>> {
        let documents = products
            .iter()
            .map(product_document)
            .collect::<CatalogResult<Vec<_>>>()?;

        let ids = Self::insert_ordered(&self.products, documents).await?;
        tracing::info!(count = ids.len(), "Products inserted");
        Ok(ids)
    }

    #[instrument(skip(self))]
    async fn distinct_categories(&self) -> CatalogResult<Vec<String>> {
        let values = self.products.distinct("category", doc! {}).await?;

        let mut categories: Vec<String> = values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(s) => Some(s),
                _ => None,
            })
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    #[instrument(skip(self))]
    async fn collection_names(&self) -> CatalogResult<Vec<String>> {
        Ok(self.db.list_collection_names().await?)
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> CatalogResult<()> {
        let status = check_health_detailed(&self.db).await;
        tracing::debug!(
            healthy = status.healthy,
            response_time_ms = status.response_time_ms,
            "MongoDB ping"
        );
        if status.healthy {
            Ok(())
        } else {
            Err(CatalogError::Database(
                status.message.unwrap_or_else(|| "ping failed".to_string()),
            ))
        }
    }
}
