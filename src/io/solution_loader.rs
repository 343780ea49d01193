//! Reading solution files picked in the Problems tab.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rdsviz::Language;

/// Solutions larger than this are almost certainly the wrong file.
const MAX_SOLUTION_BYTES: u64 = 1 << 20;

/// Reads a solution file and guesses its language from the extension.
pub fn read_solution(path: &Path) -> Result<(String, Option<Language>)> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    if metadata.len() > MAX_SOLUTION_BYTES {
        bail!(
            "{} is {} bytes; solutions are limited to {} bytes",
            path.display(),
            metadata.len(),
            MAX_SOLUTION_BYTES
        );
    }
    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} as UTF-8 text", path.display()))?;
    let language = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension);
    Ok((code, language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_and_detects_language() -> Result<()> {
        let path = std::env::temp_dir().join(format!("rdsviz-solution-{}.cpp", std::process::id()));
        {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "int main() {{ return 0; }}")?;
        }
        let (code, language) = read_solution(&path)?;
        fs::remove_file(&path)?;
        assert!(code.contains("int main"));
        assert_eq!(language, Some(Language::Cpp));
        Ok(())
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = read_solution(Path::new("/definitely/not/here.py")).unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}
