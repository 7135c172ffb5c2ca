mod favorites;
mod persistence;

pub use favorites::Favorites;
pub use persistence::{load_catalog, load_favorites, load_profile_record, save_favorites};
