//! Catalog Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{EntityId, Product, Vendor};
use crate::pagination::Page;
use crate::query::{ProductFilter, ProductQuery, VendorFilter, VendorQuery};
use crate::repository::CatalogRepository;
use crate::seed::{SeedOutcome, demo_products, demo_vendors};

/// Collection names reported by the status endpoint
pub const STATUS_COLLECTION_LIMIT: usize = 10;

/// Catalog service over a possibly-absent store.
///
/// Without a store every listing answers with an empty page, categories with
/// an empty list, detail lookups with not-found and seeding with
/// [`SeedOutcome::Unavailable`]. Nothing here fails because the store is
/// missing.
pub struct CatalogService<R: CatalogRepository> {
    repository: Option<Arc<R>>,
}

impl<R: CatalogRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Create a CatalogService backed by `repository`
    pub fn new(repository: R) -> Self {
        Self {
            repository: Some(Arc::new(repository)),
        }
    }

    /// Create a CatalogService with no store behind it
    pub fn unavailable() -> Self {
        Self { repository: None }
    }

    pub fn from_option(repository: Option<R>) -> Self {
        Self {
            repository: repository.map(Arc::new),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.repository.is_some()
    }

    /// List products matching the query, one page at a time
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: &ProductQuery) -> CatalogResult<Page<Product>> {
        query.validate()?;

        let Some(repository) = self.repository.as_deref() else {
            return Ok(Page::empty(query.page));
        };

        let pagination = query.pagination();
        let filter = query.filter();

        let total = repository.count_products(&filter).await?;
        let items = repository
            .find_products(&filter, pagination.skip(), pagination.limit)
            .await?;

        Ok(Page::new(items, pagination, total))
    }

    /// List vendors; verified vendors unless the query says otherwise
    #[instrument(skip(self))]
    pub async fn list_vendors(&self, query: &VendorQuery) -> CatalogResult<Page<Vendor>> {
        query.validate()?;

        let Some(repository) = self.repository.as_deref() else {
            return Ok(Page::empty(query.page));
        };

        let pagination = query.pagination();
        let filter = query.filter();

        let total = repository.count_vendors(&filter).await?;
        let items = repository
            .find_vendors(&filter, pagination.skip(), pagination.limit)
            .await?;

        Ok(Page::new(items, pagination, total))
    }

    /// Sorted distinct product categories
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> CatalogResult<Vec<String>> {
        match self.repository.as_deref() {
            Some(repository) => repository.distinct_categories().await,
            None => Ok(Vec::new()),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &EntityId) -> CatalogResult<Product> {
        let Some(repository) = self.repository.as_deref() else {
            return Err(CatalogError::product_not_found(id));
        };

        repository
            .get_product(id)
            .await?
            .ok_or_else(|| CatalogError::product_not_found(id))
    }

    #[instrument(skip(self))]
    pub async fn get_vendor(&self, id: &EntityId) -> CatalogResult<Vendor> {
        let Some(repository) = self.repository.as_deref() else {
            return Err(CatalogError::vendor_not_found(id));
        };

        repository
            .get_vendor(id)
            .await?
            .ok_or_else(|| CatalogError::vendor_not_found(id))
    }

    /// Insert the demo catalog into empty collections and report the counts.
    ///
    /// Each collection is checked separately, so a second call is a no-op.
    /// Two concurrent calls against empty collections can both insert.
    #[instrument(skip(self))]
    pub async fn seed(&self) -> CatalogResult<SeedOutcome> {
        let Some(repository) = self.repository.as_deref() else {
            tracing::warn!("Seed requested without a configured database");
            return Ok(SeedOutcome::unavailable());
        };

        let all_vendors = VendorFilter::default();
        let all_products = ProductFilter::default();

        if repository.count_vendors(&all_vendors).await? == 0 {
            let vendors = demo_vendors();
            for vendor in &vendors {
                vendor.validate()?;
            }
            let ids = repository.insert_vendors(vendors).await?;
            tracing::info!(count = ids.len(), "Seeded demo vendors");
        }

        if repository.count_products(&all_products).await? == 0 {
            let vendor_ids: Vec<EntityId> = repository
                .find_vendors(&all_vendors, 0, demo_vendors().len() as u64)
                .await?
                .into_iter()
                .map(|vendor| vendor.id)
                .collect();

            let products = demo_products(&vendor_ids);
            for product in &products {
                product.validate()?;
            }
            let ids = repository.insert_products(products).await?;
            tracing::info!(count = ids.len(), "Seeded demo products");
        }

        Ok(SeedOutcome::Seeded {
            vendors: repository.count_vendors(&all_vendors).await?,
            products: repository.count_products(&all_products).await?,
        })
    }

    /// Up to [`STATUS_COLLECTION_LIMIT`] collection names; `None` without a store.
    #[instrument(skip(self))]
    pub async fn collection_names(&self) -> Option<CatalogResult<Vec<String>>> {
        let repository = self.repository.as_deref()?;
        let result = repository.collection_names().await.map(|mut names| {
            names.truncate(STATUS_COLLECTION_LIMIT);
            names
        });
        Some(result)
    }

    /// Store round trip; `None` without a store.
    pub async fn ping(&self) -> Option<CatalogResult<()>> {
        let repository = self.repository.as_deref()?;
        Some(repository.ping().await)
    }
}
