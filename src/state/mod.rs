mod store;

pub use store::{JsonProfileStore, ProfileStore};
