use crate::core::{render_value, ParamMap, RunArgs};
use anyhow::{anyhow, Result};

/// Path to the Spear executable, relative to the working directory the
/// caller launches runs from.
pub const SPEAR_BINARY: &str = "target_algorithm/spear-python/Spear-32_1.2.1";

/// Builds the argv token list for one Spear run. No process is spawned and
/// no I/O is performed; executing the returned command is the caller's
/// responsibility.
pub fn build_command(run_args: &RunArgs, params: &ParamMap) -> Result<Vec<String>> {
    let seed = run_args
        .seed
        .ok_or_else(|| anyhow!("Missing required run argument: seed"))?;
    let instance = run_args
        .instance
        .as_ref()
        .ok_or_else(|| anyhow!("Missing required run argument: instance"))?;

    let mut cmd = vec![
        SPEAR_BINARY.to_string(),
        "--seed".to_string(),
        seed.to_string(),
        "--model-stdout".to_string(),
        "--dimacs".to_string(),
        instance.clone(),
    ];
    for (name, value) in params {
        cmd.push(format!("-{}", name));
        cmd.push(render_value(value));
    }
    Ok(cmd)
}
