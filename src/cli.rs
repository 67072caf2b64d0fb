use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "rommaker",
    version,
    about = "Create combined ROM files (32 KB) from separate ones"
)]
pub struct Args {
    /// Base name for the .rom and .hex files [default: preset name or "rom"]
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Start with the BASIC, editor and kernel files of a known machine
    #[arg(short = 'p', long = "preset")]
    pub preset: Option<String>,

    /// Directory holding the preset files
    #[arg(short = 'd', long = "rom-dir")]
    pub rom_dir: Option<String>,

    #[arg(long = "verbose", short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    #[arg(long = "quiet", short = 'q')]
    pub quiet: bool,

    /// ROM dumps, or 0x… addresses where the next unknown file should go
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,
}

impl Args {
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;

    #[test]
    fn parses_preset_and_inputs() {
        let args = Args::parse_from(["rommaker", "-p", "2001", "0x9000", "extra.bin"]);
        assert_eq!(args.preset.as_deref(), Some("2001"));
        assert_eq!(args.output, None);
        assert_eq!(args.inputs, vec!["0x9000", "extra.bin"]);
        assert_eq!(args.log_filter(), "info");
    }

    #[test]
    fn parses_long_options() {
        let args = Args::parse_from([
            "rommaker",
            "--output",
            "pet",
            "--rom-dir",
            "roms",
            "--verbose",
            "a.bin",
        ]);
        assert_eq!(args.output.as_deref(), Some("pet"));
        assert_eq!(args.rom_dir.as_deref(), Some("roms"));
        assert_eq!(args.log_filter(), "debug");
    }

    #[test]
    fn quiet_lowers_log_level() {
        let args = Args::parse_from(["rommaker", "-q", "a.bin"]);
        assert_eq!(args.log_filter(), "warn");
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["rommaker", "-v", "-q"]).is_err());
    }
}
