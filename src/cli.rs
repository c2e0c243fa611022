use crate::field::Bounds;
use clap::Parser;

/// CLI arguments for the car simulation
#[derive(Parser, Debug)]
#[command(
    name = "auto_driving_sim",
    about = "🚗 Interactive auto driving car simulation on a bounded grid"
)]
pub struct Args {
    /// Field width; skips the size prompt for the first session
    #[arg(long, requires = "height")]
    pub width: Option<u32>,

    /// Field height; skips the size prompt for the first session
    #[arg(long, requires = "width")]
    pub height: Option<u32>,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Field given on the command line, if both sides were supplied
    pub fn field(&self) -> Option<Bounds> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(Bounds::new(w, h)),
            _ => None,
        }
    }

    /// Default `env_logger` filter; `RUST_LOG` still wins
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["auto_driving_sim"]).unwrap();
        assert_eq!(args.field(), None);
        assert!(!args.no_color);
        assert_eq!(args.log_filter(), "warn");
    }

    #[test]
    fn test_preset_field() {
        let args =
            Args::try_parse_from(["auto_driving_sim", "--width", "10", "--height", "5"]).unwrap();
        assert_eq!(args.field(), Some(Bounds::new(10, 5)));
    }

    #[test]
    fn test_width_requires_height() {
        assert!(Args::try_parse_from(["auto_driving_sim", "--width", "10"]).is_err());
    }

    #[test]
    fn test_verbosity() {
        let args = Args::try_parse_from(["auto_driving_sim", "-vv"]).unwrap();
        assert_eq!(args.log_filter(), "debug");
    }
}
