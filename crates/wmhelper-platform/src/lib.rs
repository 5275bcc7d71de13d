pub mod api;
pub mod auth;
pub mod redirect;

pub use api::HttpApiClient;
pub use auth::HostedAuthBridge;
pub use redirect::LocationRedirect;
