pub mod http;
pub mod mock;
pub mod transport;

pub use http::HttpTransport;
pub use mock::{MockReply, MockRoute, MockTransport};
pub use transport::{Method, RequestOptions, Transport, TransportError, TransportRequest, TransportResponse};
