#[cfg(feature = "cli")]
use std::sync::Mutex;
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

#[derive(Debug, Clone)]
pub struct PhaseStats {
    pub phase: String,
    pub phase_elapsed: Duration,
    pub total_elapsed: Duration,
    pub memory_usage_mb: Option<u64>,
}

/// Per-phase timing for a single ingestion run. Memory figures need the
/// `cli` feature; without it only timings are reported.
pub struct RunMonitor {
    enabled: bool,
    start_time: Instant,
    last_mark: std::sync::Mutex<Instant>,
    #[cfg(feature = "cli")]
    system: Option<(Mutex<System>, Pid)>,
}

impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        let now = Instant::now();
        Self {
            enabled,
            start_time: now,
            last_mark: std::sync::Mutex::new(now),
            #[cfg(feature = "cli")]
            system: if enabled { Self::process_handle() } else { None },
        }
    }

    #[cfg(feature = "cli")]
    fn process_handle() -> Option<(Mutex<System>, Pid)> {
        let pid = sysinfo::get_current_pid().ok()?;
        let mut system = System::new_with_specifics(RefreshKind::everything());
        system.refresh_all();
        Some((Mutex::new(system), pid))
    }

    #[cfg(feature = "cli")]
    fn memory_usage_mb(&self) -> Option<u64> {
        let (system, pid) = self.system.as_ref()?;
        let mut system = system.lock().ok()?;
        system.refresh_all();
        system.process(*pid).map(|p| p.memory() / 1024 / 1024)
    }

    #[cfg(not(feature = "cli"))]
    fn memory_usage_mb(&self) -> Option<u64> {
        None
    }

    /// Closes the current phase and returns its stats, or `None` when disabled.
    pub fn mark(&self, phase: &str) -> Option<PhaseStats> {
        if !self.enabled {
            return None;
        }

        let now = Instant::now();
        let mut last = self.last_mark.lock().ok()?;
        let phase_elapsed = now.duration_since(*last);
        *last = now;

        Some(PhaseStats {
            phase: phase.to_string(),
            phase_elapsed,
            total_elapsed: now.duration_since(self.start_time),
            memory_usage_mb: self.memory_usage_mb(),
        })
    }

    pub fn log_phase(&self, phase: &str) {
        if let Some(stats) = self.mark(phase) {
            match stats.memory_usage_mb {
                Some(mb) => tracing::info!(
                    "📊 {} - took {:?}, memory: {}MB, total: {:?}",
                    stats.phase,
                    stats.phase_elapsed,
                    mb,
                    stats.total_elapsed
                ),
                None => tracing::info!(
                    "📊 {} - took {:?}, total: {:?}",
                    stats.phase,
                    stats.phase_elapsed,
                    stats.total_elapsed
                ),
            }
        }
    }

    pub fn log_final_stats(&self) {
        if self.enabled {
            tracing::info!("📊 Run finished in {:?}", self.start_time.elapsed());
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
