pub mod favorites;
pub mod seed;
pub mod verifier;

pub use favorites::JsonFavoritesStore;
pub use seed::SeedFile;
pub use verifier::DemoVerifier;
