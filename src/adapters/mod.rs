// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod mail;
pub mod mysql;

pub use http::ReqwestHttp;
pub use mail::CommandMailTransport;
pub use mysql::MySqlConnector;
