//! Portfolio API client
//!
//! Routes the site's API operations either to the live backend or to an
//! in-memory static mock, chosen once from [`ClientConfig`].

pub mod constants;
pub mod dispatch;
pub mod error;

pub use dispatch::{connect, ClientConfig, DeployMode, LatencyProfile, LiveApi, PortfolioApi, StaticApi};
pub use error::{DispatchError, DispatchResult};
