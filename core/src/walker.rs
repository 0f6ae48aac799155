use crate::config::ProcessOptions;
use crate::converter::convert_file;
use crate::error::ProcessingError;
use crate::io::{ensure_output_dir, list_inputs, output_path};
use crate::processor::Codec;
use crate::report::{BatchReport, FileResult};

/// Convert every eligible image directly inside `options.input_dir`.
///
/// Fails only when the options are invalid, the output directory cannot be
/// created or the input directory cannot be listed. Files are converted as
/// they are listed, so a listing error part way through stops the batch
/// after the earlier files are written. A failure on a single file is
/// logged and recorded in the report, and the batch moves on.
pub fn process_directory<C: Codec>(
    codec: &C,
    options: &ProcessOptions,
) -> Result<BatchReport, ProcessingError> {
    options.validate()?;
    ensure_output_dir(&options.output_dir)?;

    let mut report = BatchReport::new();
    for file in list_inputs(&options.input_dir)? {
        let file = file?;
        let output = output_path(&options.output_dir, &file.name, options.output_format);
        log::debug!(
            "{} ({}) -> {}",
            file.name,
            file.format.as_str(),
            output.display()
        );

        let outcome = convert_file(codec, &file.path, &output, options);
        let result = FileResult {
            name: file.name,
            input: file.path,
            output,
            outcome,
        };

        let line = outcome_line(&result);
        if result.is_success() {
            log::info!("{}", line);
        } else {
            log::error!("{}", line);
        }
        report.add(result);
    }

    log::debug!(
        "Attempted {} file(s) from {}",
        report.results.len(),
        options.input_dir.display()
    );
    Ok(report)
}

/// Console line reported for one file.
pub fn outcome_line(result: &FileResult) -> String {
    match &result.outcome {
        Ok(_) => format!("Processed: {}", result.name),
        Err(e) => format!("Error processing {}: {}", result.name, e),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;
    use crate::format::OutputFormat;
    use crate::processor::{MockCall, MockCodec};

    fn write_mock(dir: &Path, name: &str) {
        fs::write(dir.join(name), MockCodec::MAGIC).unwrap();
    }

    #[test]
    fn test_corrupt_file_is_isolated() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_mock(input.path(), "one.jpg");
        fs::write(input.path().join("corrupt.jpg"), b"\x00\x01").unwrap();
        write_mock(input.path(), "two.png");

        let codec = MockCodec::new(10, 10).with_jpeg_size(|_| 32);
        let options = ProcessOptions::new(input.path(), output.path());

        let report = process_directory(&codec, &options).unwrap();

        assert_eq!(report.results.len(), 3);
        assert_eq!(report.success_count(), 2);
        assert_eq!(report.error_count(), 1);

        let (failed, error) = report.failures().next().unwrap();
        assert_eq!(failed.name, "corrupt.jpg");
        assert!(matches!(error, ProcessingError::Decode(_)));

        assert_eq!(fs::read(output.path().join("one.jpg")).unwrap(), vec![80; 32]);
        assert_eq!(fs::read(output.path().join("two.jpg")).unwrap(), vec![80; 32]);
        assert!(!output.path().join("corrupt.jpg").exists());
    }

    #[test]
    fn test_outcome_lines() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_mock(input.path(), "good.png");
        fs::write(input.path().join("bad.jpg"), b"nope").unwrap();

        let options = ProcessOptions::new(input.path(), output.path());
        let report = process_directory(&MockCodec::new(10, 10), &options).unwrap();

        let mut lines: Vec<String> = report.results.iter().map(outcome_line).collect();
        lines.sort();
        assert_eq!(
            lines,
            vec![
                "Error processing bad.jpg: failed to decode image: unrecognised mock content"
                    .to_string(),
                "Processed: good.png".to_string(),
            ]
        );
        assert!(report.results.iter().any(|r| r.is_success()));
    }

    #[test]
    fn test_ineligible_entries_are_untouched() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_mock(input.path(), "keep.JPEG");
        write_mock(input.path(), "readme.txt");
        fs::create_dir(input.path().join("sub")).unwrap();
        write_mock(&input.path().join("sub"), "inner.png");

        let codec = MockCodec::new(10, 10);
        let options = ProcessOptions::new(input.path(), output.path());

        let report = process_directory(&codec, &options).unwrap();

        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].name, "keep.JPEG");
        // one decode: the txt and nested files are never read
        let decodes = codec
            .calls()
            .into_iter()
            .filter(|c| *c == MockCall::Decode)
            .count();
        assert_eq!(decodes, 1);

        let mut written: Vec<String> = fs::read_dir(output.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        written.sort();
        assert_eq!(written, vec!["keep.jpg"]);
    }

    #[test]
    fn test_output_name_truncates_at_first_dot() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_mock(input.path(), "photo.raw.png");

        let codec = MockCodec::new(10, 10);
        let options = ProcessOptions::new(input.path(), output.path());

        let report = process_directory(&codec, &options).unwrap();

        assert_eq!(report.results[0].output, output.path().join("photo.jpg"));
        assert!(output.path().join("photo.jpg").is_file());
    }

    #[test]
    fn test_png_output_extension() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_mock(input.path(), "shot.jpg");

        let codec = MockCodec::new(10, 10).with_png_size(7);
        let options = ProcessOptions::new(input.path(), output.path())
            .with_output_format(OutputFormat::Png);

        process_directory(&codec, &options).unwrap();

        assert_eq!(fs::read(output.path().join("shot.png")).unwrap(), vec![0x89; 7]);
    }

    #[test]
    fn test_empty_directory_is_not_an_error() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        let options = ProcessOptions::new(input.path(), output.path());
        let report = process_directory(&MockCodec::new(1, 1), &options).unwrap();

        assert!(report.is_empty());
    }

    #[test]
    fn test_creates_nested_output_dir() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write_mock(input.path(), "a.png");
        let nested = output.path().join("x").join("y");

        let options = ProcessOptions::new(input.path(), &nested);
        process_directory(&MockCodec::new(10, 10), &options).unwrap();

        assert!(nested.join("a.jpg").is_file());
    }

    #[test]
    fn test_output_dir_failure_is_fatal() {
        let input = TempDir::new().unwrap();
        write_mock(input.path(), "a.png");
        let blocker = input.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let codec = MockCodec::new(10, 10);
        let options = ProcessOptions::new(input.path(), blocker.join("out"));

        let result = process_directory(&codec, &options);

        assert!(matches!(result, Err(ProcessingError::CreateDir { .. })));
        assert!(codec.calls().is_empty());
    }

    #[test]
    fn test_missing_input_dir_is_fatal() {
        let root = TempDir::new().unwrap();
        let options = ProcessOptions::new(root.path().join("nope"), root.path().join("out"));

        let result = process_directory(&MockCodec::new(10, 10), &options);
        assert!(matches!(result, Err(ProcessingError::ReadDir { .. })));
    }

    #[test]
    fn test_invalid_options_are_fatal() {
        let root = TempDir::new().unwrap();
        let options = ProcessOptions::new(root.path(), root.path().join("out")).with_max_width(0);

        let result = process_directory(&MockCodec::new(10, 10), &options);
        assert!(matches!(result, Err(ProcessingError::InvalidOptions(_))));
        assert!(!root.path().join("out").exists());
    }
}
