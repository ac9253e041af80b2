pub mod bookings;
pub mod listings;

use roamstay_kernel::ModuleRegistry;

/// Register all project-specific modules with the registry.
///
/// Listings come first: the booking table references it.
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(listings::create_module());
    registry.register(bookings::create_module());
}

/// A registry holding every module of the application.
pub fn registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    register_all(&mut registry);
    registry
}
