pub mod core;


// Re-export the primary type so `crate::resolver::CapabilityResolver` works directly.
pub use self::core::CapabilityResolver;
