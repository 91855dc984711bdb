//! In-memory record store shared by the request handlers.
//!
//! A `RecordStore` owns an ordered `Vec` of records (insertion order is the
//! listing order) together with the id generator that hands out keys for new
//! records. One store instance is created per API variant in `main.rs` and
//! injected into the Actix application as `web::Data`, so tests can build
//! their own isolated stores.
//!
//! Every operation takes the lock once and does its lookup and mutation under
//! that single guard, so a request never observes or overwrites another
//! request's half-finished change even though Actix runs several workers.
//!
//! Ids arriving from the outside world are raw path segments. They are turned
//! into the record's canonical id type by [`Record::parse_id`] before any
//! comparison, so `"17"` finds the item with numeric id `17`, and a segment
//! that cannot be an id simply finds nothing.

pub mod ids;
pub mod seed;

use common::messages;
use common::model::item::Item;
use common::model::product::Product;
use log::debug;
use thiserror::Error;
use tokio::sync::RwLock;

use ids::{IdGenerator, ShortIdGenerator, TimestampIdGenerator};

pub type ProductStore = RecordStore<Product, ShortIdGenerator>;
pub type ItemStore = RecordStore<Item, TimestampIdGenerator>;

/// A record that can live in a [`RecordStore`].
pub trait Record: Clone + Send + Sync + 'static {
    type Id: Clone + PartialEq + std::fmt::Debug + Send + Sync;

    fn id(&self) -> &Self::Id;

    /// Reads a raw path segment as an id. `None` means no record can match.
    fn parse_id(raw: &str) -> Option<Self::Id>;
}

impl Record for Product {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn parse_id(raw: &str) -> Option<String> {
        Some(raw.to_string())
    }
}

impl Record for Item {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }

    fn parse_id(raw: &str) -> Option<u64> {
        raw.trim().parse().ok()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record has the requested id. Carries the raw id for logging.
    #[error("{}", messages::PRODUCT_NOT_FOUND)]
    NotFound(String),
}

struct Inner<R, G> {
    records: Vec<R>,
    ids: G,
}

pub struct RecordStore<R, G> {
    inner: RwLock<Inner<R, G>>,
}

impl<R, G> RecordStore<R, G>
where
    R: Record,
    G: IdGenerator<Id = R::Id>,
{
    pub fn new(ids: G) -> Self {
        Self::with_records(ids, Vec::new())
    }

    /// Builds a store that already holds `records`, in the given order.
    pub fn with_records(ids: G, records: Vec<R>) -> Self {
        Self {
            inner: RwLock::new(Inner { records, ids }),
        }
    }

    /// Builds a store from record drafts, assigning each one a fresh id.
    pub fn seeded<D>(
        mut ids: G,
        drafts: impl IntoIterator<Item = D>,
        build: impl Fn(R::Id, D) -> R,
    ) -> Self {
        let mut records: Vec<R> = Vec::new();
        for draft in drafts {
            let id = ids.next_id(&|candidate| records.iter().any(|r| r.id() == candidate));
            records.push(build(id, draft));
        }
        Self::with_records(ids, records)
    }

    /// The full ordered sequence of records.
    pub async fn list(&self) -> Vec<R> {
        self.inner.read().await.records.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn get(&self, raw_id: &str) -> Result<R, StoreError> {
        let inner = self.inner.read().await;
        position(&inner.records, raw_id)
            .map(|idx| inner.records[idx].clone())
            .ok_or_else(|| not_found(raw_id))
    }

    /// Appends the record produced by `build` for a freshly generated id.
    pub async fn create(&self, build: impl FnOnce(R::Id) -> R) -> R {
        let mut inner = self.inner.write().await;
        let Inner { records, ids } = &mut *inner;
        let id = ids.next_id(&|candidate| records.iter().any(|r| r.id() == candidate));
        let record = build(id);
        records.push(record.clone());
        debug!("Created record {:?}, {} in store", record.id(), records.len());
        record
    }

    /// Merges a change into the record with the given id.
    ///
    /// `apply` runs only once the record has been found. If it fails, its
    /// error is returned and the stored record is left exactly as it was, as
    /// long as `apply` validates before it writes.
    pub async fn update<E>(
        &self,
        raw_id: &str,
        apply: impl FnOnce(&mut R) -> Result<(), E>,
    ) -> Result<R, E>
    where
        E: From<StoreError>,
    {
        let mut inner = self.inner.write().await;
        let idx = position(&inner.records, raw_id).ok_or_else(|| not_found(raw_id))?;
        let record = &mut inner.records[idx];
        apply(record)?;
        debug!("Updated record {:?}", record.id());
        Ok(record.clone())
    }

    /// Removes the record with the given id and returns it.
    pub async fn delete(&self, raw_id: &str) -> Result<R, StoreError> {
        let mut inner = self.inner.write().await;
        let idx = position(&inner.records, raw_id).ok_or_else(|| not_found(raw_id))?;
        let removed = inner.records.remove(idx);
        debug!(
            "Deleted record {:?}, {} left in store",
            removed.id(),
            inner.records.len()
        );
        Ok(removed)
    }
}

fn position<R: Record>(records: &[R], raw_id: &str) -> Option<usize> {
    let id = R::parse_id(raw_id)?;
    records.iter().position(|r| *r.id() == id)
}

fn not_found(raw_id: &str) -> StoreError {
    debug!("No record with id {raw_id:?}");
    StoreError::NotFound(raw_id.to_string())
}
