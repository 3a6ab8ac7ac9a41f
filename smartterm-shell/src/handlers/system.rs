use crate::output::OutputSink;
use crate::probe::SystemProbe;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

pub fn cpu(probe: &mut dyn SystemProbe, sink: &mut dyn OutputSink) {
    let usage = probe.cpu_usage();
    sink.line(&format!("CPU Usage: {usage:.1}%"));
}

pub fn memory(probe: &mut dyn SystemProbe, sink: &mut dyn OutputSink) {
    let stats = probe.memory();
    sink.heading("Memory Usage");
    sink.line(&format!("{:<12}{}", "Total", gib(stats.total)));
    sink.line(&format!("{:<12}{}", "Available", gib(stats.available)));
    sink.line(&format!("{:<12}{}", "Used", gib(stats.used)));
    sink.line(&format!("{:<12}{:.1}%", "Percentage", stats.percent_used()));
}

pub fn processes(probe: &mut dyn SystemProbe, sink: &mut dyn OutputSink) {
    let processes = probe.processes();
    sink.heading("Running Processes");
    sink.line(&format!("{:>8}  {}", "PID", "Name"));
    for process in &processes {
        sink.line(&format!("{:>8}  {}", process.pid, process.name));
    }
}

fn gib(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / BYTES_PER_GIB)
}
