use crate::types::HealthRes;

/// Simple health service shared by every TheraBot front end.
///
/// Reports liveness only; the knowledge base is validated at startup, so a running process is
/// always able to answer.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "TheraBot is alive".into(),
        }
    }
}
