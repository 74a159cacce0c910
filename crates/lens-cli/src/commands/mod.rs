pub mod add;
pub mod dispatch;
pub mod prefs;
pub mod render;
pub mod search;
