pub mod discovery;
pub mod transport;
pub mod transport_mock;

pub use discovery::{scan, select_target, DiscoveryCandidate, SelectionPolicy};
pub use transport::{Advertisement, BleTransport};
