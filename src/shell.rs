use std::io::{BufRead, Write};

use crate::catalog::{Catalog, EffectName};
use crate::controller::RingController;
use crate::demo::run_demo;
use crate::error::{RingError, RingResult};
use crate::framebuffer::Pixel;
use crate::output::LightOutput;
use crate::presets;

const PROMPT: &str = "ringlight> ";

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    All(Pixel),
    Set { index: i64, color: Pixel },
    Clear,
    Brightness(f32),
    Status,
    Preset(String),
    Effect { name: EffectName, color: Option<Pixel> },
    Effects,
    Demo,
    Help,
    Exit,
    Nothing,
}

fn parse_channel(word: &str) -> RingResult<u8> {
    word.parse::<u8>()
        .map_err(|_| RingError::InvalidColorValue(word.to_string()))
}

fn parse_color(words: &[&str]) -> RingResult<Pixel> {
    match words {
        [r, g, b] => Ok(Pixel::new(parse_channel(r)?, parse_channel(g)?, parse_channel(b)?)),
        _ => Err(RingError::Usage("<r> <g> <b>")),
    }
}

pub fn parse_command(line: &str) -> RingResult<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((first, args)) = words.split_first() else {
        return Ok(Command::Nothing);
    };
    let cmd = first.to_lowercase();

    match cmd.as_str() {
        "exit" | "quit" => Ok(Command::Exit),
        "help" => Ok(Command::Help),
        "clear" => Ok(Command::Clear),
        "status" => Ok(Command::Status),
        "effects" => Ok(Command::Effects),
        "demo" => Ok(Command::Demo),
        "all" => {
            if args.len() != 3 {
                return Err(RingError::Usage("all <r> <g> <b>"));
            }
            Ok(Command::All(parse_color(args)?))
        }
        "set" => {
            if args.len() != 4 {
                return Err(RingError::Usage("set <led> <r> <g> <b>"));
            }
            let index = args[0]
                .parse::<i64>()
                .map_err(|_| RingError::Usage("set <led> <r> <g> <b>"))?;
            Ok(Command::Set {
                index,
                color: parse_color(&args[1..])?,
            })
        }
        "brightness" => match args {
            [level] => match level.parse::<f32>() {
                Ok(value) if (0.0..=1.0).contains(&value) => Ok(Command::Brightness(value)),
                _ => Err(RingError::InvalidBrightness(level.to_string())),
            },
            _ => Err(RingError::Usage("brightness <0.0-1.0>")),
        },
        "preset" => match args {
            [name] => Ok(Command::Preset(name.to_string())),
            _ => Err(RingError::Usage("preset <name>")),
        },
        _ => {
            let Some(name) = EffectName::parse_from_str(&cmd) else {
                return Err(RingError::UnknownCommand(cmd));
            };
            let color = match (args.len(), name.takes_color()) {
                (0, _) => None,
                (3, true) => Some(parse_color(args)?),
                _ => return Err(RingError::Usage(name.usage())),
            };
            Ok(Command::Effect { name, color })
        }
    }
}

pub struct Shell<O: LightOutput, W: Write> {
    controller: RingController<O>,
    catalog: Catalog,
    out: W,
}

impl<O: LightOutput, W: Write> Shell<O, W> {
    pub fn new(controller: RingController<O>, catalog: Catalog, out: W) -> Self {
        Shell {
            controller,
            catalog,
            out,
        }
    }

    pub fn controller_mut(&mut self) -> &mut RingController<O> {
        &mut self.controller
    }

    /// Reads commands until `exit`, end of input or Ctrl-C at the prompt.
    /// Only fatal errors end the loop early; everything else is reported and
    /// the shell carries on.
    pub fn run<R: BufRead>(&mut self, input: R) -> RingResult<()> {
        self.print_help()?;
        let mut lines = input.lines();
        loop {
            write!(self.out, "{}", PROMPT)?;
            self.out.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    writeln!(self.out)?;
                    break;
                }
            };
            if self.controller.cancel_token().is_cancelled() {
                log::info!("Interrupted at the prompt");
                writeln!(self.out, "Interrupted")?;
                break;
            }
            if !self.execute_line(&line)? {
                break;
            }
            // Ctrl-C that stopped an effect ends the effect, not the shell.
            self.controller.cancel_token().reset();
        }
        Ok(())
    }

    /// Runs a single command line. Returns `false` once the user asked to exit.
    pub fn execute_line(&mut self, line: &str) -> RingResult<bool> {
        let result = parse_command(line).and_then(|command| self.execute(command));
        match result {
            Ok(keep_going) => Ok(keep_going),
            Err(err) if err.is_fatal() => Err(err),
            Err(RingError::Usage(usage)) => {
                writeln!(self.out, "Usage: {}", usage)?;
                Ok(true)
            }
            Err(RingError::UnknownCommand(cmd)) => {
                writeln!(self.out, "Unknown command: {}", cmd)?;
                writeln!(self.out, "Type 'help' for available commands")?;
                Ok(true)
            }
            Err(err @ RingError::UnknownPreset(_)) => {
                writeln!(self.out, "Error: {}", err)?;
                writeln!(self.out, "Available presets: {}", presets::preset_names().join(", "))?;
                Ok(true)
            }
            Err(err) => {
                writeln!(self.out, "Error: {}", err)?;
                Ok(true)
            }
        }
    }

    fn execute(&mut self, command: Command) -> RingResult<bool> {
        // A stale token must not cancel the next effect.
        self.controller.cancel_token().reset();

        match command {
            Command::Nothing => {}
            Command::Exit => return Ok(false),
            Command::Help => self.print_help()?,
            Command::Effects => self.print_effects()?,
            Command::Status => self.print_status()?,
            Command::Clear => {
                self.controller.clear()?;
                writeln!(self.out, "All LEDs cleared")?;
            }
            Command::All(color) => {
                self.controller.set_all(color)?;
                let (r, g, b) = color.into_components();
                writeln!(self.out, "All LEDs set to RGB({}, {}, {})", r, g, b)?;
            }
            Command::Set { index, color } => {
                self.controller.set_pixel(index, color)?;
                let (r, g, b) = color.into_components();
                writeln!(self.out, "LED {} set to RGB({}, {}, {})", index, r, g, b)?;
            }
            Command::Brightness(level) => {
                self.controller.set_brightness(level)?;
                writeln!(self.out, "Brightness set to {}", level)?;
            }
            Command::Preset(name) => {
                let color = presets::lookup(&name)?;
                self.controller.set_all(color)?;
                let (r, g, b) = color.into_components();
                writeln!(self.out, "Preset {} loaded: RGB({}, {}, {})", name, r, g, b)?;
            }
            Command::Effect { name, color } => {
                let mut effect = self.catalog.build(name, color);
                let outcome = self.controller.play(name.as_str(), effect.as_mut())?;
                if outcome.is_cancelled() {
                    writeln!(self.out, "{} interrupted", name.as_str())?;
                }
            }
            Command::Demo => {
                if run_demo(&mut self.controller, &self.catalog)?.is_cancelled() {
                    writeln!(self.out, "Demo interrupted")?;
                } else {
                    writeln!(self.out, "Demo complete!")?;
                }
            }
        }
        Ok(true)
    }

    fn print_status(&mut self) -> RingResult<()> {
        writeln!(self.out, "\n--- Ring Status ---")?;
        writeln!(self.out, "Total LEDs: {}", self.controller.pixel_count())?;
        writeln!(self.out, "Brightness: {}", self.controller.brightness())?;
        writeln!(self.out, "\nCurrent LED Colors:")?;
        for (i, pixel) in self.controller.pixels().iter().enumerate() {
            let (r, g, b) = pixel.into_components();
            writeln!(self.out, "  LED {:2}: RGB({}, {}, {})", i, r, g, b)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn print_effects(&mut self) -> RingResult<()> {
        writeln!(self.out, "Effects:")?;
        for name in EffectName::ALL {
            writeln!(self.out, "  {:28} - {}", name.usage(), name.description())?;
        }
        Ok(())
    }

    fn print_help(&mut self) -> RingResult<()> {
        let max = self.controller.pixel_count() - 1;
        writeln!(self.out, "\n=== Ring Manual Control ===")?;
        writeln!(self.out, "Commands:")?;
        writeln!(self.out, "  all <r> <g> <b>          - Set all LEDs to RGB color (0-255)")?;
        writeln!(self.out, "  set <led> <r> <g> <b>    - Set LED 0-{} to RGB color", max)?;
        writeln!(self.out, "  clear                    - Turn off all LEDs")?;
        writeln!(self.out, "  brightness <0.0-1.0>     - Set brightness level")?;
        writeln!(self.out, "  status                   - Show current LED status")?;
        writeln!(self.out, "  preset <name>            - Load color preset")?;
        writeln!(self.out, "  effects                  - List animation effects")?;
        writeln!(self.out, "  <effect> [<r> <g> <b>]   - Run an effect (Ctrl-C stops it)")?;
        writeln!(self.out, "  demo                     - Run the demo sequence")?;
        writeln!(self.out, "  help                     - Show this help message")?;
        writeln!(self.out, "  exit                     - Exit program (or Ctrl-D, Ctrl-C)")?;
        writeln!(self.out, "\nPresets:")?;
        writeln!(self.out, "  {}", presets::preset_names().join(", "))?;
        writeln!(self.out, "\nExamples:")?;
        writeln!(self.out, "  all 255 0 0              - All LEDs red")?;
        writeln!(self.out, "  set 0 0 255 0            - LED 0 green")?;
        writeln!(self.out, "  preset blue              - All LEDs blue")?;
        writeln!(self.out, "  comet 255 80 0           - Orange comet")?;
        writeln!(self.out, "  brightness 0.5           - Set 50% brightness")?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelToken;
    use crate::framebuffer::BLACK;
    use crate::output::testing::RecordingOutput;

    fn shell() -> Shell<RecordingOutput, Vec<u8>> {
        let controller = RingController::new(RecordingOutput::new(), 12, 0.3, CancelToken::new());
        Shell::new(controller, Catalog::new(12, Some(2), 0.0), Vec::new())
    }

    fn printed(shell: &Shell<RecordingOutput, Vec<u8>>) -> String {
        String::from_utf8_lossy(&shell.out).into_owned()
    }

    #[test]
    fn parses_manual_commands() {
        assert_eq!(parse_command("  ").unwrap(), Command::Nothing);
        assert_eq!(parse_command("ALL 255 0 0").unwrap(), Command::All(Pixel::new(255, 0, 0)));
        assert_eq!(
            parse_command("set 3 0 255 0").unwrap(),
            Command::Set {
                index: 3,
                color: Pixel::new(0, 255, 0)
            }
        );
        assert_eq!(parse_command("brightness 0.5").unwrap(), Command::Brightness(0.5));
        assert_eq!(parse_command("quit").unwrap(), Command::Exit);
        assert_eq!(parse_command("preset Blue").unwrap(), Command::Preset("Blue".to_string()));
    }

    #[test]
    fn parses_effects_against_their_contract() {
        assert_eq!(
            parse_command("comet 255 80 0").unwrap(),
            Command::Effect {
                name: EffectName::Comet,
                color: Some(Pixel::new(255, 80, 0))
            }
        );
        assert_eq!(
            parse_command("twinkle").unwrap(),
            Command::Effect {
                name: EffectName::Twinkle,
                color: None
            }
        );
        assert!(matches!(
            parse_command("rainbow_cycle 1 2 3"),
            Err(RingError::Usage("rainbow_cycle"))
        ));
        assert!(matches!(parse_command("pulse 1 2"), Err(RingError::Usage(_))));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            parse_command("all 256 0 0"),
            Err(RingError::InvalidColorValue(v)) if v == "256"
        ));
        assert!(matches!(parse_command("all -1 0 0"), Err(RingError::InvalidColorValue(_))));
        assert!(matches!(parse_command("all red 0 0"), Err(RingError::InvalidColorValue(_))));
        assert!(matches!(parse_command("brightness 2"), Err(RingError::InvalidBrightness(_))));
        assert!(matches!(parse_command("brightness high"), Err(RingError::InvalidBrightness(_))));
        assert!(matches!(parse_command("set x 1 2 3"), Err(RingError::Usage(_))));
        assert!(matches!(
            parse_command("dance"),
            Err(RingError::UnknownCommand(c)) if c == "dance"
        ));
    }

    #[test]
    fn errors_are_reported_and_the_shell_continues() {
        let mut shell = shell();
        shell.execute_line("set 0 10 20 30").unwrap();
        assert!(shell.execute_line("set 12 255 0 0").unwrap());
        assert!(shell.execute_line("all 300 0 0").unwrap());
        assert!(shell.execute_line("preset nope").unwrap());
        assert!(shell.execute_line("dance").unwrap());

        let text = printed(&shell);
        assert!(text.contains("LED index must be between 0 and 11"));
        assert!(text.contains("invalid color value '300'"));
        assert!(text.contains("Available presets: red, green"));
        assert!(text.contains("Unknown command: dance"));
        assert_eq!(shell.controller.pixels()[0], Pixel::new(10, 20, 30));
    }

    #[test]
    fn status_lists_every_led() {
        let mut shell = shell();
        shell.execute_line("preset cool").unwrap();
        shell.execute_line("status").unwrap();

        let text = printed(&shell);
        assert!(text.contains("Total LEDs: 12"));
        assert!(text.contains("LED 11: RGB(64, 156, 255)"));
    }

    #[test]
    fn effects_run_from_the_shell() {
        let mut shell = shell();
        assert!(shell.execute_line("spinner 0 0 255").unwrap());
        assert!(shell.controller.pixels().iter().all(|p| *p == BLACK));
        assert_eq!(shell.controller.output().frames.len(), 20 * 12 + 1);
    }

    #[test]
    fn stale_cancel_from_the_prompt_is_ignored() {
        let mut shell = shell();
        shell.controller.cancel_token().cancel();
        shell.execute_line("color_wipe").unwrap();
        assert!(shell
            .controller
            .pixels()
            .iter()
            .all(|p| *p == Pixel::new(255, 0, 0)));
    }

    #[test]
    fn ctrl_c_at_the_prompt_ends_the_session() {
        let mut shell = shell();
        shell.controller.cancel_token().cancel();
        shell.run("all 4 4 4\nstatus\n".as_bytes()).unwrap();

        assert_eq!(shell.controller.pixels()[0], BLACK);
        assert!(shell.controller.output().frames.is_empty());
        assert!(printed(&shell).contains("Interrupted"));
    }

    #[test]
    fn interrupted_effect_keeps_the_session_alive() {
        let token = CancelToken::new();
        let output = RecordingOutput::cancelling_after(2, token.clone());
        let controller = RingController::new(output, 12, 0.3, token);
        let mut shell = Shell::new(controller, Catalog::new(12, None, 0.0), Vec::new());

        shell.run("spinner\nall 4 4 4\n".as_bytes()).unwrap();

        let text = printed(&shell);
        assert!(text.contains("spinner interrupted"));
        assert!(!text.contains("Interrupted\n"));
        assert_eq!(shell.controller.pixels()[0], Pixel::new(4, 4, 4));
    }

    #[test]
    fn run_stops_at_exit_or_eof() {
        let mut shell = shell();
        shell.run("all 1 2 3\nexit\nall 9 9 9\n".as_bytes()).unwrap();
        assert_eq!(shell.controller.pixels()[0], Pixel::new(1, 2, 3));

        let mut shell = self::shell();
        shell.run("clear\n".as_bytes()).unwrap();
        assert!(printed(&shell).contains("All LEDs cleared"));
    }

    #[test]
    fn device_failures_end_the_shell() {
        let output = RecordingOutput::failing_after(0);
        let controller = RingController::new(output, 12, 0.3, CancelToken::new());
        let mut shell = Shell::new(controller, Catalog::new(12, None, 0.0), Vec::new());
        assert!(matches!(shell.execute_line("all 1 1 1"), Err(RingError::DeviceFailure(_))));
    }
}
