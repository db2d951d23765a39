/// Logging port used by the cart session and the gateways.
///
/// Kept in the domain so the store and use cases never depend on a concrete
/// logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
