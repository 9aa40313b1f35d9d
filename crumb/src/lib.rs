#[cfg(feature = "manager")]
pub use crumb_manager as manager;
pub use crumb_store as store;
