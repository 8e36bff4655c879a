//! Practitioner opening hours editor
//!
//! # Modules
//!
//! ```text
//! editor/src/
//! ├── core/       # configuration, script runner
//! ├── utils/      # logging
//! ├── session.rs  # ScheduleEditor (ordered dispatch, undo/redo)
//! └── submit.rs   # submission seam and simulated backend
//! ```

pub mod core;
pub mod session;
pub mod submit;
pub mod utils;

pub use crate::core::{Config, RunOutput, load_actions, run_script};
pub use session::ScheduleEditor;
pub use submit::{SimulatedBackend, SubmissionReceipt, SubmissionSink, submit_profile};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` if present; a missing file is not an error
pub fn setup_environment() {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {e}");
    }
}
