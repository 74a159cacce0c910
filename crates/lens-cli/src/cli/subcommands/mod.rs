pub mod prefs;

pub use prefs::PrefsCommands;
