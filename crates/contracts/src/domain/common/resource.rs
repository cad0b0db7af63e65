use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;

/// Remote collection record served under `/api/...`.
///
/// Every CRUD page talks to the backend through this trait: the list is read
/// from `collection_path()`, a single record lives at `element_path(id)`.
pub trait Resource: Clone + Serialize + DeserializeOwned + 'static {
    type Id: Display + Clone + PartialEq + 'static;

    fn id(&self) -> Self::Id;

    /// Index used for tab keys and DOM ids (`a002`, `a011`, ...).
    fn aggregate_index() -> &'static str;

    /// Collection path relative to the API base, e.g. `/api/buildings`.
    fn collection_path() -> &'static str;

    /// Human readable name of a single record.
    fn element_name() -> &'static str;

    fn element_path(id: &Self::Id) -> String {
        format!("{}/{}", Self::collection_path(), id)
    }
}
