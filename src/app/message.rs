// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use crate::error::Result;
use crate::resize::{Direction, StepDelta};
use iced::Size;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    ResizeStarted(StepDelta),
    ResizeStopped(StepDelta),
    ResizeStepped(StepDelta),
    Resized(Size),
    DirectionSelected(Direction),
    GhostResizeToggled(bool),
    LockAspectRatioToggled(bool),
    FullWidthToggled(bool),
    SaveSettings,
    ClearLog,
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_RESIZABLE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Overrides the configured resize direction.
    pub direction: Option<Direction>,
    /// Overrides the configured step.
    pub step: Option<f32>,
    /// Forces ghost resizing on.
    pub ghost: bool,
}

impl Flags {
    /// Parses `--config-dir <dir>`, `--direction <s|e|se>`, `--step <n>` and
    /// `--ghost`.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self> {
        let flags = Flags {
            config_dir: args.opt_value_from_str("--config-dir")?,
            direction: args.opt_value_from_str("--direction")?,
            step: args.opt_value_from_str("--step")?,
            ghost: args.contains("--ghost"),
        };

        let remaining = args.finish();
        if !remaining.is_empty() {
            log::warn!("ignoring unexpected arguments: {remaining:?}");
        }

        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn args(values: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(values.iter().map(|value| (*value).into()).collect())
    }

    #[test]
    fn no_arguments_gives_defaults() {
        let flags = Flags::from_args(args(&[])).expect("valid flags");
        assert_eq!(flags, Flags::default());
    }

    #[test]
    fn parses_all_flags() {
        let flags = Flags::from_args(args(&[
            "--config-dir",
            "/tmp/resizable",
            "--direction",
            "se",
            "--step",
            "10",
            "--ghost",
        ]))
        .expect("valid flags");

        assert_eq!(flags.config_dir.as_deref(), Some("/tmp/resizable"));
        assert_eq!(flags.direction, Some(Direction::SouthEast));
        assert_eq!(flags.step, Some(10.0));
        assert!(flags.ghost);
    }

    #[test]
    fn invalid_direction_is_a_cli_error() {
        let result = Flags::from_args(args(&["--direction", "north"]));
        assert!(matches!(result, Err(Error::Cli(_))));
    }
}
