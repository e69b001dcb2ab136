// crates/engine/src/config.rs
use derive_builder::Builder;

/// Execution knobs for the in-process engine.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct EngineOptions {
    /// Worker threads computing partition tallies.
    #[builder(default = "num_cpus::get()")]
    pub threads: usize,

    /// Lines per batch shipped over the channel.
    #[builder(default = "4096")]
    pub batch_lines: usize,

    /// Bounded channel capacity, in batches. Backpressure against a reader
    /// that outruns the tokenizers.
    #[builder(default = "64")]
    pub channel_capacity: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { threads: num_cpus::get(), batch_lines: 4096, channel_capacity: 64 }
    }
}
