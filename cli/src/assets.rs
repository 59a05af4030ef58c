use anyhow::{Context, Result};

use numvault_engine::Curriculum;

const CURRICULUM_RAW: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/curriculum.toml"));

/// The curriculum compiled into the binary.
pub fn builtin_curriculum() -> Result<Curriculum> {
    numvault_config::parse_curriculum(CURRICULUM_RAW).context("built-in curriculum is invalid")
}
