// Persistence Adapter: user-scoped saved careers and roadmaps.
// Handlers see only the SaveStore trait; PgSaveStore and InMemorySaveStore implement it.

pub mod handlers;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use memory::InMemorySaveStore;
pub use postgres::PgSaveStore;
pub use store::SaveStore;
