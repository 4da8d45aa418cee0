use crate::error::ParseCornerError;
use crate::types::Corner;

/// Parse user text like `-75, 92, -864` into a corner.
///
/// Spaces are stripped anywhere in the input, then the text is split on
/// commas. Exactly three components are required and each must be a valid
/// signed integer.
pub fn parse_corner(text: &str) -> Result<Corner, ParseCornerError> {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let parts: Vec<&str> = cleaned.split(',').collect();

    let values = parts
        .iter()
        .map(|p| p.parse::<i32>())
        .collect::<Result<Vec<i32>, _>>()
        .map_err(|_| ParseCornerError::NotAWholeNumber)?;

    if values.len() != 3 {
        return Err(ParseCornerError::WrongComponentCount(values.len()));
    }
    Ok(Corner::new(values[0], values[1], values[2]))
}
