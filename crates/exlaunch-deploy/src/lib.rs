//! Resource deployment for exlaunch
//!
//! The loader ships as a prebuilt set of files (`main.npdm`, `subsdk9`, ...)
//! under this crate's `deploy/` directory. Mod packaging copies them into the
//! exefs directory of the distribution being assembled.

mod deployer;

pub use deployer::{DeployReport, Deployer, VERSION_FILE, bundled_resources, include_depackager};
