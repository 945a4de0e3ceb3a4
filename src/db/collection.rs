// db/collection.rs
use indexmap::IndexMap;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use super::storage::StorageError;

/// A persisted entity living in one named collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Storage key of the collection.
    const COLLECTION: &'static str;

    fn id(&self) -> Uuid;
}

/// Records keyed by id, iterated in insertion order.
///
/// Serializes as a plain JSON array so the persisted layout stays one array
/// per collection.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: IndexMap<Uuid, T>,
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Collection {
            records: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&T> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut T> {
        self.records.get_mut(id)
    }

    /// Inserts or replaces; a replaced record keeps its original position.
    pub fn insert(&mut self, record: T) -> Option<T> {
        self.records.insert(record.id(), record)
    }

    pub fn remove(&mut self, id: &Uuid) -> Option<T> {
        self.records.shift_remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.records.values_mut()
    }

    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|record| predicate(record))
    }

    /// Clones of every record matching `predicate`, in collection order.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|record| predicate(record)).cloned().collect()
    }

    /// Applies `change` to the record with `id` and returns the updated copy.
    pub fn update<F>(&mut self, id: Uuid, change: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut T),
    {
        let record = self
            .records
            .get_mut(&id)
            .ok_or(StorageError::RecordNotFound {
                collection: T::COLLECTION,
                id,
            })?;
        change(record);
        Ok(record.clone())
    }

    pub fn into_vec(self) -> Vec<T> {
        self.records.into_values().collect()
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for record in iter {
            collection.insert(record);
        }
        collection
    }
}

impl<T: Record> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records.values())
    }
}

impl<'de, T: Record> Deserialize<'de> for Collection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let records = Vec::<T>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}
