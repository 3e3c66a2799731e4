use crate::coe::write_coe;
use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};
use tracing::debug;

/// Reads the whole raw sample file into memory.
pub fn read_samples(path: &Path) -> Result<Vec<u8>> {
    let samples = fs::read(path).with_context(|| format!("could not read {}", path.display()))?;
    debug!("read {} bytes from {:?}", samples.len(), path);
    Ok(samples)
}

/// Creates (or truncates) `path` and streams the COE text into it.
/// Returns the number of samples written.
pub fn write_coe_file(
    path: &Path,
    samples: &[u8],
) -> Result<usize> {
    let file =
        File::create(path).with_context(|| format!("could not create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let count = write_coe(samples, &mut out)
        .with_context(|| format!("could not write {}", path.display()))?;
    out.flush()
        .with_context(|| format!("could not write {}", path.display()))?;
    debug!("wrote {} samples to {:?}", count, path);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_and_reads_back() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let raw = dir.path().join("clip.raw");
        let coe = dir.path().join("clip.coe");
        fs::write(&raw, [0x7fu8, 0x80])?;

        let samples = read_samples(&raw)?;
        let count = write_coe_file(&coe, &samples)?;

        assert_eq!(count, 2);
        assert_eq!(
            fs::read_to_string(&coe)?,
            "memory_initialization_radix=16;\nmemory_initialization_vector=\n7f,\n80,\n"
        );
        Ok(())
    }

    #[test]
    fn missing_input_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.raw");
        let err = read_samples(&missing).unwrap_err();
        assert!(format!("{err}").contains("nope.raw"), "{err}");
    }

    #[test]
    fn unwritable_output_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no_such_dir").join("out.coe");
        let err = write_coe_file(&target, &[1, 2, 3]).unwrap_err();
        assert!(format!("{err}").contains("out.coe"), "{err}");
    }
}
