//! Preferences file infrastructure module

mod xdg;

pub use xdg::XdgPreferencesStore;
