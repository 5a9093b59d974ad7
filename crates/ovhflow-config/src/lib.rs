//! ovhflow の設定ファイル
//!
//! ```yaml
//! servers:
//!   - name: ns123456.ip-1-2-3.eu
//!     image: mds
//!     options: ""
//! ```

pub mod error;
pub mod loader;
pub mod model;

pub use error::*;
pub use loader::{load_config, parse_config};
pub use model::{Config, MDS_TEMPLATE, MIS_TEMPLATE, ServerEntry, Template};
