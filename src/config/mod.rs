pub mod settings;

pub use settings::ActiveCollabSettings;
