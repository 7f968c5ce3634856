use std::io::{self, Write};

/// Ask a yes/no question, re-prompting until the answer is recognizable.
pub fn ask_yes_no(prompt: &str, default_value: bool) -> io::Result<bool> {
    let default_text = if default_value { "y" } else { "n" };
    loop {
        let input = read_line(&format!("{prompt} (y/n, default {default_text}): "))?;
        if input.is_empty() {
            return Ok(default_value);
        }
        match input.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please enter 'y' or 'n'"),
        }
    }
}

/// Ask for an integer within inclusive bounds, re-prompting until valid.
pub fn ask_number(prompt: &str, min: i64, max: i64, default: Option<i64>) -> io::Result<i64> {
    loop {
        let text = match default {
            Some(value) => format!("{prompt} (default {value}): "),
            None => format!("{prompt}: "),
        };
        let input = read_line(&text)?;
        match resolve_number(&input, min, max, default) {
            Ok(value) => return Ok(value),
            Err(message) => println!("{message}"),
        }
    }
}

/// Resolve one line of numeric input. Empty input falls back to the
/// default, clamped into the bounds so a default chosen before the caller
/// tightened the range cannot escape it.
fn resolve_number(input: &str, min: i64, max: i64, default: Option<i64>) -> Result<i64, String> {
    if input.is_empty() {
        if let Some(value) = default {
            return Ok(value.clamp(min, max));
        }
    }
    match input.parse::<i64>() {
        Ok(value) if value >= min && value <= max => Ok(value),
        Ok(_) => Err(format!("Value must be between {min} and {max}")),
        Err(_) => Err("Please enter a valid number".to_string()),
    }
}

/// Ask for a free-form string with an optional default.
pub fn ask_string(prompt: &str, default: &str) -> io::Result<String> {
    let text = if default.is_empty() {
        format!("{prompt}: ")
    } else {
        format!("{prompt} (default '{default}'): ")
    };
    let input = read_line(&text)?;
    Ok(if input.is_empty() && !default.is_empty() {
        default.to_string()
    } else {
        input
    })
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::resolve_number;

    #[test]
    fn explicit_value_within_bounds_is_accepted() {
        assert_eq!(resolve_number("7", 1, 10, Some(3)), Ok(7));
    }

    #[test]
    fn accepted_default_is_clamped_into_the_bounds() {
        // Default 10, but the caller raised the minimum to 12 first.
        assert_eq!(resolve_number("", 12, 16, Some(10)), Ok(12));
        // Default 9999 under a minimum of 50000.
        assert_eq!(resolve_number("", 50_000, 999_999, Some(9_999)), Ok(50_000));
        assert_eq!(resolve_number("", 1, 10, Some(3)), Ok(3));
    }

    #[test]
    fn out_of_range_and_unparsable_input_re_prompt() {
        assert!(resolve_number("11", 1, 10, None).is_err());
        assert!(resolve_number("ten", 1, 10, None).is_err());
        assert!(resolve_number("", 1, 10, None).is_err());
    }
}
