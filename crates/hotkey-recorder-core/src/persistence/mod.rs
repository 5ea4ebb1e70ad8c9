mod gateway;
mod registry;

pub use {gateway::PersistenceGateway, registry::HotkeyRegistry};
