//! End-to-end tests for the vocal suppression pipeline

use std::path::Path;

use devocal::{process_directory, process_file, ProcessingConfig, SeparationMethod};

/// Write a stereo 16-bit PCM WAV fixture
fn write_stereo_wav(path: &Path, left: &[f32], right: &[f32], sample_rate: u32) {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create fixture");
    for (&l, &r) in left.iter().zip(right) {
        writer.write_sample((l * 32767.0) as i16).unwrap();
        writer.write_sample((r * 32767.0) as i16).unwrap();
    }
    writer.finalize().unwrap();
}

/// Read a mono f32 WAV produced by the pipeline
fn read_mono_wav(path: &Path) -> (Vec<f32>, u32) {
    let mut reader = hound::WavReader::open(path).expect("Failed to open output");
    let spec = reader.spec();
    assert_eq!(spec.channels, 1, "Pipeline output must be mono");
    let samples: Vec<f32> = reader
        .samples::<f32>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    (samples, spec.sample_rate)
}

fn sine(freq: f32, length: usize, sample_rate: f32) -> Vec<f32> {
    (0..length)
        .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate).sin())
        .collect()
}

#[test]
fn test_identical_channels_yield_silence() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("center.wav");
    let signal: Vec<f32> = sine(440.0, 8192, 44100.0).iter().map(|s| s * 0.5).collect();
    write_stereo_wav(&input, &signal, &signal, 44100);

    let config = ProcessingConfig::default();
    let output = process_file(&input, None, &config).expect("Processing should succeed");

    let (samples, sample_rate) = read_mono_wav(&output);
    assert_eq!(sample_rate, 44100, "Sample rate must propagate unchanged");

    // Fully center-panned content cancels; enhancement skips normalization
    // for the silent result, so the output stays (near) zero.
    let peak = samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max);
    assert!(peak < 1e-3, "Expected near-silence, peak was {}", peak);
}

#[test]
fn test_side_panned_content_passes_through() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("side.wav");
    let left: Vec<f32> = sine(440.0, 8192, 44100.0).iter().map(|s| s * 0.5).collect();
    let right = vec![0.0f32; 8192];
    write_stereo_wav(&input, &left, &right, 44100);

    let config = ProcessingConfig {
        method: SeparationMethod::Center,
        enhance: false,
    };
    let output = process_file(&input, None, &config).expect("Processing should succeed");

    let (samples, _) = read_mono_wav(&output);
    assert_eq!(samples.len(), left.len());
    for (i, (&out, &expected)) in samples.iter().zip(&left).enumerate() {
        assert!(
            (out - expected).abs() < 1e-3,
            "Sample {} differs: {} vs {}",
            i,
            out,
            expected
        );
    }
}

#[test]
fn test_enhancement_normalizes_peak() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("quiet.wav");
    let left: Vec<f32> = sine(440.0, 8192, 44100.0).iter().map(|s| s * 0.3).collect();
    let right = vec![0.0f32; 8192];
    write_stereo_wav(&input, &left, &right, 44100);

    let config = ProcessingConfig::default();
    let output = process_file(&input, None, &config).expect("Processing should succeed");

    let (samples, _) = read_mono_wav(&output);
    let peak = samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max);
    assert!(
        peak > 0.9 && peak <= 1.01,
        "Enhanced peak should be near 1.0, got {}",
        peak
    );
}

#[test]
fn test_spectral_method_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("stereo.wav");
    let left: Vec<f32> = sine(440.0, 16384, 44100.0).iter().map(|s| s * 0.4).collect();
    let right: Vec<f32> = sine(523.25, 16384, 44100.0).iter().map(|s| s * 0.4).collect();
    write_stereo_wav(&input, &left, &right, 44100);

    let config = ProcessingConfig {
        method: SeparationMethod::Spectral,
        enhance: true,
    };
    let output = process_file(&input, None, &config).expect("Processing should succeed");
    assert!(output.exists());

    let (samples, sample_rate) = read_mono_wav(&output);
    assert_eq!(sample_rate, 44100);
    // The spectral path does not guarantee sample-exact length, only that it
    // produced a usable signal.
    assert!(!samples.is_empty());
}

#[test]
fn test_default_output_naming() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("song.wav");
    let signal = sine(440.0, 4096, 44100.0);
    write_stereo_wav(&input, &signal, &signal, 44100);

    let config = ProcessingConfig::default();
    let output = process_file(&input, None, &config).unwrap();
    assert_eq!(output, dir.path().join("song_no_vocal.wav"));
    assert!(output.exists());
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.wav");

    let config = ProcessingConfig::default();
    let err = process_file(&input, None, &config).unwrap_err();
    assert!(matches!(err, devocal::RemovalError::InputNotFound(_)));

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(entries.is_empty(), "Failure must not leave output files");
}

#[test]
fn test_batch_partial_failure_isolation() {
    let dir = tempfile::tempdir().unwrap();
    let signal = sine(440.0, 4096, 44100.0);

    write_stereo_wav(&dir.path().join("good.wav"), &signal, &signal, 44100);
    // Corrupt candidate: right extension, garbage content.
    std::fs::write(dir.path().join("broken.wav"), b"this is not audio").unwrap();
    // Wrong extension: never a candidate, never counted.
    std::fs::write(dir.path().join("readme.txt"), b"notes").unwrap();

    let config = ProcessingConfig::default();
    let result = process_directory(dir.path(), None, &config).expect("Batch should run");

    assert_eq!(result.successful, 1, "One valid file should succeed");
    assert_eq!(result.failed, 1, "The corrupt file should fail");
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].0, "broken.wav");

    let out_dir = dir.path().join("no_vocal");
    let outputs: Vec<_> = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(outputs.len(), 1, "Exactly one output file expected");
    assert_eq!(outputs[0], "good_no_vocal.wav");
}

#[test]
fn test_batch_all_valid() {
    let dir = tempfile::tempdir().unwrap();
    let signal = sine(440.0, 4096, 44100.0);

    for name in ["a.wav", "b.wav", "c.wav"] {
        write_stereo_wav(&dir.path().join(name), &signal, &signal, 44100);
    }

    let config = ProcessingConfig::default();
    let result = process_directory(dir.path(), None, &config).unwrap();

    assert_eq!(result.successful, 3);
    assert_eq!(result.failed, 0);
    assert!(result.failures.is_empty());
}

#[test]
fn test_batch_explicit_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let signal = sine(440.0, 4096, 44100.0);
    write_stereo_wav(&dir.path().join("track.wav"), &signal, &signal, 44100);

    let config = ProcessingConfig::default();
    let result = process_directory(dir.path(), Some(out.path()), &config).unwrap();

    assert_eq!(result.successful, 1);
    assert!(out.path().join("track_no_vocal.wav").exists());
    assert!(
        !dir.path().join("no_vocal").exists(),
        "Default output directory must not be created when one is supplied"
    );
}

#[test]
fn test_mono_input_passes_through() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("mono.wav");

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&input, spec).unwrap();
    for &s in &sine(440.0, 4096, 44100.0) {
        writer.write_sample((s * 0.5 * 32767.0) as i16).unwrap();
    }
    writer.finalize().unwrap();

    let config = ProcessingConfig {
        method: SeparationMethod::Center,
        enhance: false,
    };
    // Mono is a reported condition, not a failure; the file is written
    // through unchanged.
    let output = process_file(&input, None, &config).expect("Mono must not fail");
    let (samples, _) = read_mono_wav(&output);
    assert_eq!(samples.len(), 4096);
}
