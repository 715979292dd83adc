pub mod placeholder;
pub mod remote;

pub use placeholder::PlaceholderStrategy;
pub use remote::RemoteStrategy;
