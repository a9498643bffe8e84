/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: filesystem access,
/// console progress and report rendering.
pub mod outbound;
