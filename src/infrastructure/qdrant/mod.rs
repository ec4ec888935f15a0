pub mod store;
pub(crate) mod wire;
