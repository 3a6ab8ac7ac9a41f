//! System statistics consumed by the `cpu`, `mem`, and `processes` commands.

/// Snapshot of physical memory, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryStats {
    pub total: u64,
    pub available: u64,
    pub used: u64,
}

impl MemoryStats {
    /// Share of memory that is not available, as a percentage.
    pub fn percent_used(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let unavailable = self.total.saturating_sub(self.available);
        unavailable as f64 / self.total as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
}

/// Opaque source of CPU, memory, and process data.
pub trait SystemProbe: Send {
    /// Global CPU usage, in percent.
    fn cpu_usage(&mut self) -> f32;
    fn memory(&mut self) -> MemoryStats;
    fn processes(&mut self) -> Vec<ProcessInfo>;
}

#[cfg(feature = "sysinfo-probe")]
pub use sysinfo_probe::SysinfoProbe;

#[cfg(feature = "sysinfo-probe")]
mod sysinfo_probe {
    use super::{MemoryStats, ProcessInfo, SystemProbe};
    use sysinfo::{MINIMUM_CPU_UPDATE_INTERVAL, ProcessesToUpdate, System};

    /// [`SystemProbe`] backed by the `sysinfo` crate.
    pub struct SysinfoProbe {
        system: System,
    }

    impl SysinfoProbe {
        pub fn new() -> Self {
            Self {
                system: System::new(),
            }
        }
    }

    impl Default for SysinfoProbe {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SystemProbe for SysinfoProbe {
        fn cpu_usage(&mut self) -> f32 {
            // Usage is a delta between two refreshes.
            self.system.refresh_cpu_usage();
            std::thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
            self.system.refresh_cpu_usage();
            self.system.global_cpu_usage()
        }

        fn memory(&mut self) -> MemoryStats {
            self.system.refresh_memory();
            MemoryStats {
                total: self.system.total_memory(),
                available: self.system.available_memory(),
                used: self.system.used_memory(),
            }
        }

        fn processes(&mut self) -> Vec<ProcessInfo> {
            self.system.refresh_processes(ProcessesToUpdate::All, true);
            let mut processes: Vec<ProcessInfo> = self
                .system
                .processes()
                .iter()
                .map(|(pid, process)| ProcessInfo {
                    pid: pid.as_u32(),
                    name: process.name().to_string_lossy().into_owned(),
                })
                .collect();
            processes.sort_by_key(|process| process.pid);
            processes
        }
    }
}
