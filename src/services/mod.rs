// Service exports
pub mod azure;
pub mod store;
pub mod transport;

pub use azure::{AzureError, AzureOpenAiClient};
pub use store::{ProfileStore, StoreError};
pub use transport::{
    BridgeTransport, GenerationRequest, GenerationTransport, HttpTransport, TransportError,
};
