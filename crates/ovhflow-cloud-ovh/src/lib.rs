//! OVH provider for ovhflow
//!
//! This crate talks to the OVH REST API on behalf of the ovhflow CLI,
//! covering the dedicated server calls needed to check servers and
//! (re)install them from a template.
//!
//! # Features
//!
//! - Credential resolution from `OVH_*` env vars and `ovh.conf`
//! - Request signing and server time synchronisation
//! - Dedicated server state, install status, and install start
//!
//! # Example
//!
//! ```ignore
//! use ovhflow_cloud_ovh::{DedicatedServerApi, OvhClient};
//!
//! let client = OvhClient::from_env(None)?;
//! let server = client.server("ns123456.ip-1-2-3.eu").await?;
//! println!("{} {}", server.state, server.datacenter);
//! ```

pub mod client;
pub mod credentials;
pub mod dedicated;
pub mod endpoint;
pub mod error;

pub use client::OvhClient;
pub use credentials::Credentials;
pub use dedicated::{
    DedicatedServer, DedicatedServerApi, InstallDetails, InstallProgress, InstallRequest,
    InstallStatus,
};
pub use endpoint::{DEFAULT_ENDPOINT, Endpoint};
pub use error::{OvhError, Result};
