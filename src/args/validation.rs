use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json in the
/// expected rounds format
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The scores json file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("Could not read '{file}': {e}"))?;
    let json: Value =
        serde_json::from_str(&contents).map_err(|e| format!("'{file}' is not valid json: {e}"))?;
    validate_rounds_format(&json)?;
    Ok(json)
}

/// Validate the rounds json format. The format we expect is this:
/// [{ "id": <int>, "gross_score": <int>, "date_played": "YYYY-MM-DD",
///    "holes_played": 9|18 (optional, default 18),
///    "course": { "name": "...", "course_rating": <float>,
///                "slope_rating": <int>, "par": <int> } }, ...]
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
fn validate_rounds_format(json: &Value) -> Result<(), String> {
    let Some(rounds) = json.as_array() else {
        return Err("The scores json must be an array of rounds.".to_string());
    };

    let required_keys = ["id", "gross_score", "date_played", "course"];
    for (i, round) in rounds.iter().enumerate() {
        let Some(obj) = round.as_object() else {
            return Err(format!("Round at position {i} is not a json object."));
        };
        for key in required_keys {
            if !obj.contains_key(key) {
                return Err(format!("Round at position {i} is missing '{key}'."));
            }
        }
        if !obj["course"].is_object() {
            return Err(format!("Round at position {i}: 'course' must be an object."));
        }
    }
    Ok(())
}
