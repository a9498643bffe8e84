/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the CLI drives the application
/// layer directly through its use case.
pub mod outbound;
