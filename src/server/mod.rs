mod dispatch;
mod http_server;
mod response;
mod service;

pub use dispatch::{serve, start};
pub use http_server::{HttpServer, ServerHandle};
pub use service::DocService;
