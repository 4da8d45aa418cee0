use std::io::{self, BufRead, Write};

use fillcalc_core::{parse_corner, Region};

use crate::prompt::Console;

const NUMBER_ERROR: &str = "\nError: you must enter a whole number.";
const HEIGHT_ERROR: &str = "\nError: you must enter a whole number of 1 or more.";

/// One selection at the main menu.
#[derive(Debug, PartialEq, Eq)]
enum MenuOption {
    Expand,
    Contract,
    PassThrough,
    Reset,
    Quit,
    Unknown(String),
}

impl From<&str> for MenuOption {
    fn from(text: &str) -> MenuOption {
        use self::MenuOption::*;

        match text.to_ascii_lowercase().as_str() {
            "e" => Expand,
            "c" => Contract,
            "n" => PassThrough,
            "r" => Reset,
            "q" => Quit,
            other => Unknown(other.to_string()),
        }
    }
}

/// Drive the interactive loop until the user quits or input ends.
///
/// Each iteration walks the pipeline: pick an option, adjust the X/Z
/// footprint, shift the height, optionally clamp the vertical span, show the
/// result, and optionally replace the active coordinates with it. End of
/// input anywhere behaves like quit.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    let Some(mut region) = read_region(console)? else {
        return goodbye(console);
    };

    loop {
        console.writeln(&format!("\nCoordinates: {}", region))?;

        let Some(line) =
            console.read_line("Expand(e), Contract(c), Neither(n), Reset(r), Quit(q): ")?
        else {
            return goodbye(console);
        };

        let mut result = match MenuOption::from(line.as_str()) {
            MenuOption::Expand => {
                let Some(margin) = console.read_i32("Blocks to adjust by: ", NUMBER_ERROR)? else {
                    return goodbye(console);
                };
                region.expanded(margin)
            }
            MenuOption::Contract => {
                let Some(margin) = console.read_i32("Blocks to adjust by: ", NUMBER_ERROR)? else {
                    return goodbye(console);
                };
                region.contracted(margin)
            }
            MenuOption::PassThrough => region,
            MenuOption::Reset => {
                let Some(fresh) = read_region(console)? else {
                    return goodbye(console);
                };
                region = fresh;
                continue;
            }
            MenuOption::Quit => return goodbye(console),
            MenuOption::Unknown(other) => {
                console.writeln(&format!(
                    "\nError: option \"{}\" is not a valid selection.",
                    other
                ))?;
                continue;
            }
        };

        let Some(dy) = console.read_i32("Adjust height by: ", NUMBER_ERROR)? else {
            return goodbye(console);
        };
        result = result.shifted(dy);

        let Some(want_range) = console.read_yes_no("Specify range for height? (y/n): ")? else {
            return goodbye(console);
        };
        if want_range {
            loop {
                console.writeln(&format!(
                    "\nBlocks begin at a height of {}",
                    result.first.y
                ))?;
                let Some(blocks) = console.read_i32("Blocks high: ", HEIGHT_ERROR)? else {
                    return goodbye(console);
                };
                match result.with_height(blocks) {
                    Ok(clamped) => {
                        result = clamped;
                        break;
                    }
                    Err(e) => console.writeln(&format!("\nError: {}.", e))?,
                }
            }
        }

        console.writeln(&format!("\nResults: {}", result))?;

        let Some(replace) = console.read_yes_no("Replace active coordinates? (y/n): ")? else {
            return goodbye(console);
        };
        if replace {
            region = result;
            console.writeln("Coordinates replaced.")?;
            log::debug!("active region replaced: {}", region);
        }
    }
}

/// Prompt for both corners. The pair is re-prompted together when either
/// line fails to parse, matching the reset flow.
fn read_region<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Option<Region>> {
    loop {
        let Some(first_text) = console.read_line("Starting coordinates (X,Y,Z): ")? else {
            return Ok(None);
        };
        let Some(second_text) = console.read_line("Ending coordinates (X,Y,Z): ")? else {
            return Ok(None);
        };
        match (parse_corner(&first_text), parse_corner(&second_text)) {
            (Ok(first), Ok(second)) => return Ok(Some(Region::new(first, second))),
            (Err(e), _) | (_, Err(e)) => console.writeln(&format!("\nError: {}.", e))?,
        }
    }
}

fn goodbye<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.writeln("\nGoodbye.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Run a scripted session and return everything printed to the console.
    fn run_script(input: &str) -> String {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run(&mut console).unwrap();
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn test_expand_session_matches_worked_example() {
        let out = run_script(
            "-75,92,-864\n-117,92,-900\n\
             e\n5\n0\nn\nn\n\
             q\n",
        );
        assert!(out.contains("Coordinates: -75 92 -864 -117 92 -900"));
        assert!(out.contains("Results: -70 92 -859 -122 92 -905"));
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn test_replace_chains_adjustments() {
        // Expand by 2, replace, then contract by 2: back where we started.
        let out = run_script(
            "0,10,0\n8,10,8\n\
             e\n2\n0\nn\ny\n\
             c\n2\n0\nn\ny\n\
             q\n",
        );
        assert!(out.contains("Results: -2 10 -2 10 10 10"));
        assert!(out.contains("Coordinates replaced."));
        assert!(out.contains("Coordinates: -2 10 -2 10 10 10"));
        assert!(out.contains("Results: 0 10 0 8 10 8"));
        assert!(out.contains("Coordinates: 0 10 0 8 10 8"));
    }

    #[test]
    fn test_decline_replace_keeps_active_region() {
        let out = run_script(
            "0,10,0\n8,10,8\n\
             e\n3\n0\nn\nn\n\
             q\n",
        );
        // Second menu header still shows the original region
        assert_eq!(out.matches("Coordinates: 0 10 0 8 10 8").count(), 2);
    }

    #[test]
    fn test_pass_through_with_height_range() {
        let out = run_script(
            "0,60,0\n10,75,10\n\
             n\n0\ny\n1\nn\n\
             q\n",
        );
        assert!(out.contains("Blocks begin at a height of 60"));
        assert!(out.contains("Results: 0 60 0 10 60 10"));
    }

    #[test]
    fn test_height_shift_applies_before_range_base() {
        let out = run_script(
            "0,60,0\n10,75,10\n\
             n\n5\ny\n4\nn\n\
             q\n",
        );
        assert!(out.contains("Blocks begin at a height of 65"));
        assert!(out.contains("Results: 0 65 0 10 68 10"));
    }

    #[test]
    fn test_height_range_rejects_zero_then_accepts() {
        let out = run_script(
            "0,60,0\n10,75,10\n\
             n\n0\ny\n0\n3\nn\n\
             q\n",
        );
        assert!(out.contains("Error: you must enter 1 or more blocks."));
        assert!(out.contains("Results: 0 60 0 10 62 10"));
    }

    #[test]
    fn test_invalid_menu_option_reprompts() {
        let out = run_script(
            "0,0,0\n1,1,1\n\
             x\n\
             q\n",
        );
        assert!(out.contains("Error: option \"x\" is not a valid selection."));
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn test_malformed_corners_reprompt_pair() {
        let out = run_script(
            "1,2\n0,0,0\n\
             a,b,c\n0,0,0\n\
             1,2,3\n4,5,6\n\
             q\n",
        );
        assert!(out.contains("Error: coordinates must have three values each."));
        assert!(out.contains("Error: you must enter whole numbers separated by commas."));
        assert!(out.contains("Coordinates: 1 2 3 4 5 6"));
    }

    #[test]
    fn test_malformed_adjust_amount_reprompts() {
        let out = run_script(
            "0,0,0\n4,0,4\n\
             e\nfive\n1\n0\nn\nn\n\
             q\n",
        );
        assert!(out.contains("Error: you must enter a whole number."));
        assert!(out.contains("Results: -1 0 -1 5 0 5"));
    }

    #[test]
    fn test_reset_swaps_active_region() {
        let out = run_script(
            "0,0,0\n1,1,1\n\
             r\n7,8,9\n10,11,12\n\
             q\n",
        );
        assert!(out.contains("Coordinates: 7 8 9 10 11 12"));
    }

    #[test]
    fn test_eof_terminates_like_quit() {
        let out = run_script("0,0,0\n1,1,1\n");
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn test_menu_option_parsing() {
        assert_eq!(MenuOption::from("E"), MenuOption::Expand);
        assert_eq!(MenuOption::from("c"), MenuOption::Contract);
        assert_eq!(MenuOption::from("n"), MenuOption::PassThrough);
        assert_eq!(MenuOption::from("r"), MenuOption::Reset);
        assert_eq!(MenuOption::from("Q"), MenuOption::Quit);
        assert_eq!(
            MenuOption::from("zap"),
            MenuOption::Unknown("zap".to_string())
        );
    }
}
