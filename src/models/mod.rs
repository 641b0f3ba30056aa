pub mod catalog;
mod description;
pub mod preferences;

pub use catalog::{CatalogError, DescriptionCatalog};
pub use description::{Description, TriggerGesture};
pub use preferences::{
    Font, ParseFontError, PreferenceKind, PreferenceStore, PreferenceValue, Preferences,
};
