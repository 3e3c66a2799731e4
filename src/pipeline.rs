use crate::coe::{self, effective_count};
use crate::io::fs;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Pipeline for reading raw samples and assembling COE output.
#[derive(Default)]
pub struct Pipeline {
    samples: Vec<u8>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the full input file. Nothing is written before this succeeds.
    pub fn read_input(
        &mut self,
        path: &Path,
    ) -> Result<()> {
        self.samples = fs::read_samples(path)?;
        Ok(())
    }

    pub fn set_samples(
        &mut self,
        samples: Vec<u8>,
    ) {
        self.samples = samples;
    }

    pub fn input_len(&self) -> usize {
        self.samples.len()
    }

    /// Samples that will land in the vector after the cap is applied.
    pub fn sample_count(&self) -> usize {
        effective_count(self.samples.len())
    }

    /// Build the full COE text in memory.
    pub fn render(&self) -> Result<String> {
        Ok(coe::render_coe(&self.samples)?)
    }

    /// Write the COE text to `path`, returning the sample count written.
    pub fn write_output(
        &self,
        path: &Path,
    ) -> Result<usize> {
        let count = fs::write_coe_file(path, &self.samples)?;
        info!(
            "wrote {} of {} samples to {}",
            count,
            self.samples.len(),
            path.display()
        );
        Ok(count)
    }
}
