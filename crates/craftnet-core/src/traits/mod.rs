mod support_store;

pub use support_store::ISupportStore;
