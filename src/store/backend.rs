use crate::error::Result;
use serde_json::Value;

/// Abstract interface for raw document storage.
/// This trait handles the "how" of persistence (filesystem vs memory),
/// while `DocumentService` handles the "what" (existence invariants,
/// timestamps, serialization).
///
/// Backends deal exclusively in serialized records; they never see the
/// typed `Record`. All methods take `&self`; implementations needing
/// mutation use interior mutability.
pub trait StorageBackend {
    /// Store a serialized record under `id`, replacing any existing value.
    fn put(&self, id: &str, record: &Value) -> Result<()>;

    /// Fetch the serialized record stored under `id`.
    /// Returns Ok(None) if no record is stored under that id.
    /// Returns Err only on actual storage failures.
    fn get(&self, id: &str) -> Result<Option<Value>>;

    /// Remove the record stored under `id`.
    /// Removing an absent id is not an error at this layer; existence
    /// checks live in the service.
    fn delete(&self, id: &str) -> Result<()>;

    /// All stored records. The order must be stable across calls; the
    /// shipped backends list in ascending id order.
    fn list(&self) -> Result<Vec<Value>>;
}
