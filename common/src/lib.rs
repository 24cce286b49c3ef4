//! Meshi Umatch Common Library
//!
//! CLIとWeb(WASM)で共有される店舗検索の型とロジック

pub mod types;
pub mod error;
pub mod catalog;
pub mod filter;
pub mod search;
pub mod submit;
pub mod rotator;
pub mod scope;
pub mod view;
pub mod reservation;

pub use types::{StoreRecord, normalize_image_path};
pub use error::{Error, Result};
pub use catalog::{StoreSource, MockStoreSource, mock_stores, parse_catalog, prepare_catalog, find_store};
pub use filter::{filter_stores, matches};
pub use search::{
    SearchClient, SearchService, SearchRequest, SearchResponse,
    LocalSearch, RemoteSearch, SEARCH_ENDPOINT, STORES_ENDPOINT,
};
pub use submit::{prepare_submission, submit_search, SubmitOutcome};
pub use rotator::{PlaceholderRotator, PLACEHOLDER_HINTS, PLACEHOLDER_ROTATION_MS, index_from_unit};
pub use scope::CancelScope;
pub use view::{ResultsView, EmptyMessage, StoreCard, LINK_TARGET, LINK_REL, EXAMPLE_HINT};
pub use reservation::{ReservationDesk, AcknowledgeOnly, Acknowledgement, reservation_message};
