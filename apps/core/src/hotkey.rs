use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkey {
    pub modifiers: Vec<String>,
    pub key: String,
}

pub fn parse_hotkey(input: &str) -> Result<Hotkey, String> {
    let parts: Vec<&str> = input.split('+').collect();
    if parts.len() < 2 {
        return Err("invalid hotkey".into());
    }

    Ok(Hotkey {
        modifiers: parts[..parts.len() - 1]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        key: parts[parts.len() - 1].to_string(),
    })
}

/// Canonicalizes user input like " shift + ctrl + s " into "Ctrl+Shift+S".
pub fn validate_hotkey(input: &str) -> Result<String, String> {
    let raw_parts: Vec<&str> = input
        .split('+')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect();

    if raw_parts.len() < 2 {
        return Err("Hotkey must include at least one modifier and one key.".to_string());
    }

    let key = normalize_key(raw_parts[raw_parts.len() - 1])?;

    let mut modifiers: BTreeSet<&'static str> = BTreeSet::new();
    for part in &raw_parts[..raw_parts.len() - 1] {
        modifiers.insert(normalize_modifier(part)?);
    }

    let canonical = canonical_hotkey(&modifiers, &key);
    if is_reserved_hotkey(&canonical) {
        return Err(
            "This hotkey is commonly reserved by Windows. Choose a different one.".to_string(),
        );
    }

    Ok(canonical)
}

fn normalize_modifier(input: &str) -> Result<&'static str, String> {
    match input.to_ascii_lowercase().as_str() {
        "ctrl" | "control" => Ok("Ctrl"),
        "alt" => Ok("Alt"),
        "shift" => Ok("Shift"),
        "win" | "windows" | "meta" => Err("Win/Meta combinations are not supported.".to_string()),
        _ => Err(format!("Unsupported modifier '{input}'. Use Ctrl, Alt, or Shift.")),
    }
}

fn normalize_key(input: &str) -> Result<String, String> {
    let raw = input.trim();
    if raw.is_empty() {
        return Err("Hotkey key is required.".to_string());
    }

    let upper = raw.to_ascii_uppercase();
    if upper == "SPACE" {
        return Ok("Space".to_string());
    }

    if let Some(number) = upper.strip_prefix('F') {
        if let Ok(parsed) = number.parse::<u8>() {
            if (1..=24).contains(&parsed) {
                return Ok(format!("F{parsed}"));
            }
        }
        return Err("Function key must be between F1 and F24.".to_string());
    }

    if upper.len() == 1 {
        let c = upper.chars().next().unwrap_or_default();
        if c.is_ascii_alphanumeric() {
            return Ok(upper);
        }
    }

    Err("Key must be A-Z, 0-9, Space, or F1-F24.".to_string())
}

fn canonical_hotkey(modifiers: &BTreeSet<&'static str>, key: &str) -> String {
    let mut ordered = Vec::new();
    for modifier in ["Ctrl", "Alt", "Shift"] {
        if modifiers.contains(modifier) {
            ordered.push(modifier);
        }
    }
    ordered.push(key);
    ordered.join("+")
}

fn is_reserved_hotkey(canonical: &str) -> bool {
    matches!(
        canonical,
        "Alt+Tab" | "Alt+F4" | "Ctrl+Esc" | "Alt+Esc" | "Ctrl+Shift+Esc" | "Alt+Space"
    )
}
