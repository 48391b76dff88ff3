//! Reading from an in-memory environment instead of the process one

use typenv::{Env, EnvError, InMemoryEnv};

fn main() -> anyhow::Result<()> {
    let env = Env::new(
        InMemoryEnv::new()
            .with("NAME", "worker")
            .with("RETRIES", "abc")
            .with("PORT", "70000"),
    );

    println!("NAME = {}", env.require_string("NAME")?);

    // Errors name the variable, the value and the rule that was broken
    for err in [
        env.require_i64("RETRIES").unwrap_err(),
        env.require_port("PORT").unwrap_err(),
        env.require_bool("VERBOSE").unwrap_err(),
    ] {
        let kind = match &err {
            EnvError::Missing { .. } => "missing",
            EnvError::InvalidValue { .. } => "invalid value",
            EnvError::InvalidPort { .. } => "invalid port",
        };
        println!("{} ({}): {}", err.name(), kind, err);
    }

    Ok(())
}
