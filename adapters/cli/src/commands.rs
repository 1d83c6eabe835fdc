//! Prompt command parsing for the interactive session.

use std::{error::Error, fmt};

use tile_matrix_core::WorldCoord;

/// Commands accepted at the interactive prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PromptCommand {
    /// Leave the session.
    Exit,
    /// Probe a random coordinate sampled inside the world boundary.
    RandomValid,
    /// Probe a coordinate entered by the user.
    InputXy,
    /// Display the world boundary rectangle.
    ShowRect,
    /// Display the full tile grid.
    ShowGrid,
}

/// Menu line shown before each prompt.
pub(crate) const MENU: &str =
    "Options: (Enter) random valid (0) exit (1) input x,y (2) show rect (3) show grid";

/// Lookup table from prompt input to command.
const DISPATCH: [(&str, PromptCommand); 5] = [
    ("0", PromptCommand::Exit),
    ("", PromptCommand::RandomValid),
    ("1", PromptCommand::InputXy),
    ("2", PromptCommand::ShowRect),
    ("3", PromptCommand::ShowGrid),
];

impl PromptCommand {
    /// Matches a prompt line against the dispatch table.
    pub(crate) fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        DISPATCH
            .iter()
            .find(|(token, _)| *token == trimmed)
            .map(|(_, command)| *command)
    }
}

/// Failure to interpret user input as a world coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CoordinateInputError {
    axis: &'static str,
    input: String,
}

impl fmt::Display for CoordinateInputError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "input {:?} for axis {} could not be parsed as a number",
            self.input, self.axis
        )
    }
}

impl Error for CoordinateInputError {}

fn parse_axis(axis: &'static str, input: &str) -> Result<f32, CoordinateInputError> {
    input
        .trim()
        .parse()
        .map_err(|_| CoordinateInputError {
            axis,
            input: input.trim().to_owned(),
        })
}

/// Parses the two prompt lines of an `InputXy` command into a coordinate.
pub(crate) fn parse_coordinate(
    x_line: &str,
    y_line: &str,
) -> Result<WorldCoord, CoordinateInputError> {
    let x = parse_axis("x", x_line)?;
    let y = parse_axis("y", y_line)?;
    Ok(WorldCoord::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::{parse_coordinate, PromptCommand};
    use tile_matrix_core::WorldCoord;

    #[test]
    fn prompt_lines_dispatch_through_the_table() {
        assert_eq!(PromptCommand::parse("0"), Some(PromptCommand::Exit));
        assert_eq!(PromptCommand::parse(""), Some(PromptCommand::RandomValid));
        assert_eq!(PromptCommand::parse("\n"), Some(PromptCommand::RandomValid));
        assert_eq!(PromptCommand::parse(" 1 "), Some(PromptCommand::InputXy));
        assert_eq!(PromptCommand::parse("2"), Some(PromptCommand::ShowRect));
        assert_eq!(PromptCommand::parse("3"), Some(PromptCommand::ShowGrid));
        assert_eq!(PromptCommand::parse("bogus"), None);
    }

    #[test]
    fn coordinates_parse_from_prompt_lines() {
        assert_eq!(
            parse_coordinate("7.0\n", " -3 "),
            Ok(WorldCoord::new(7.0, -3.0))
        );
    }

    #[test]
    fn non_numeric_input_reports_the_offending_axis() {
        let error = parse_coordinate("7.0", "not a number").expect_err("parse failure");
        let message = error.to_string();
        assert!(message.contains("axis y"));
        assert!(message.contains("not a number"));
    }
}
