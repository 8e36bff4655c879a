use anyhow::Context;
use bakup_editor::{
    Config, SimulatedBackend, init_logger_with_file, load_actions, run_script, setup_environment,
};
use bakup_shared::PractitionerProfile;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, then configuration
    setup_environment();
    let config = Config::from_env();

    // 2. Logging
    init_logger_with_file(Some(config.log_level.as_str()), config.log_dir.as_deref())?;

    // 3. Action script: first argument wins over ACTIONS_FILE
    let script = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.actions_file.clone());
    let actions = match script {
        Some(path) => load_actions(&path)
            .with_context(|| format!("reading action script {}", path.display()))?,
        None => {
            tracing::warn!("No action script given, submitting the default week");
            Vec::new()
        }
    };

    // 4. Replay and submit
    let backend = SimulatedBackend::new(config.submit_delay());
    let output = run_script(&config, &backend, PractitionerProfile::default(), &actions)
        .await
        .context("submitting practitioner profile")?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
