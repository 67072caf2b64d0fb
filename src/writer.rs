use std::path::PathBuf;

use anyhow::{Context, Result};

/// Writes `<base>.rom` and `<base>.hex` for the exported window.
///
/// # Errors
/// Returns an error when either file cannot be written.
pub fn write_outputs(base: &str, window: &[u8]) -> Result<(PathBuf, PathBuf)> {
    let rom_path = output_path(base, "rom");
    let hex_path = output_path(base, "hex");

    std::fs::write(&rom_path, encode_rom(window))
        .with_context(|| format!("failed to write {}", rom_path.display()))?;
    std::fs::write(&hex_path, encode_hex(window))
        .with_context(|| format!("failed to write {}", hex_path.display()))?;
    Ok((rom_path, hex_path))
}

fn output_path(base: &str, ext: &str) -> PathBuf {
    // Appended rather than set, so "rom.v2" becomes "rom.v2.rom".
    PathBuf::from(format!("{base}.{ext}"))
}

/// Raw image for loading as-is.
#[must_use]
pub fn encode_rom(window: &[u8]) -> Vec<u8> {
    window.to_vec()
}

/// One lowercase two-digit byte per line, as memory initialisation files
/// for FPGA tooling expect.
#[must_use]
pub fn encode_hex(window: &[u8]) -> String {
    let mut out = String::with_capacity(window.len() * 3);
    for b in window {
        out.push_str(&format!("{b:02x}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use pretty_assertions::assert_eq;

    use super::{encode_hex, encode_rom, write_outputs};
    use crate::assembler::{assemble, Placement, WINDOW_SIZE};

    fn parse_hex(text: &str) -> Vec<u8> {
        text.lines()
            .map(|line| {
                assert_eq!(line.len(), 2, "line {line:?}");
                u8::from_str_radix(line, 16).expect("hex byte")
            })
            .collect()
    }

    #[test]
    fn hex_has_one_lowercase_byte_per_line() {
        assert_eq!(encode_hex(&[0x00, 0xab, 0x0f, 0xff]), "00\nab\n0f\nff\n");
        assert_eq!(encode_hex(&[]), "");
    }

    #[test]
    fn hex_round_trips_to_rom() {
        let asm = assemble(&[
            Placement::CursorOverride(0x9000),
            Placement::File {
                name: "mystery.bin".to_string(),
                data: (0..=255u8).collect(),
            },
        ])
        .expect("assemble");
        let window = asm.space.window();
        let rom = encode_rom(window);
        let hex = encode_hex(window);

        assert_eq!(rom.len(), WINDOW_SIZE);
        assert_eq!(hex.lines().count(), WINDOW_SIZE);
        assert_eq!(hex.len(), WINDOW_SIZE * 3);
        assert_eq!(parse_hex(&hex), rom);
    }

    #[test]
    fn writes_rom_and_hex_next_to_base() {
        let uniq = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("rommaker-writer-test-{uniq}"));
        fs::create_dir_all(&dir).expect("mkdir");

        let window = vec![0x12u8; WINDOW_SIZE];
        let base = dir.join("out.v2");
        let (rom, hex) = write_outputs(&base.to_string_lossy(), &window).expect("write");

        assert_eq!(rom, dir.join("out.v2.rom"));
        assert_eq!(hex, dir.join("out.v2.hex"));
        assert_eq!(fs::read(&rom).expect("read rom"), window);
        assert_eq!(parse_hex(&fs::read_to_string(&hex).expect("read hex")), window);

        let _ = fs::remove_file(rom);
        let _ = fs::remove_file(hex);
        let _ = fs::remove_dir(dir);
    }

    #[test]
    fn reports_unwritable_output() {
        let uniq = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        let base = std::env::temp_dir()
            .join(format!("rommaker-missing-dir-{uniq}"))
            .join("rom");
        let err = write_outputs(&base.to_string_lossy(), &[0u8; 4]).expect_err("must fail");
        assert!(err.to_string().starts_with("failed to write"));
    }
}
