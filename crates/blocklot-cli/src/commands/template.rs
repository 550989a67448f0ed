use blocklot_core::error::GuideError;
use blocklot_core::model::{Section, COLUMN_NAMES};
use blocklot_core::template;
use std::path::Path;

pub fn list() -> Result<(), GuideError> {
    println!("Available page templates:\n");
    for name in template::PRESETS {
        let t = template::load_preset(name)?;
        println!("  {:<12} {:?}", name, t.subtitle);
        if let Some(ref desc) = t.description {
            println!("               {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), GuideError> {
    let t = template::load_preset(preset)?;
    println!("{}", serde_json::to_string_pretty(&t)?);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), GuideError> {
    let t = template::load_template(file)?;

    println!("Template '{}' is valid.", t.name);
    println!("  Title:    {:?}", t.title);
    println!("  Subtitle: {:?}", t.subtitle);
    println!("  Forbidden sparse-row pattern: /{}/i", t.forbidden_pattern);
    println!("  Columns:  {}", COLUMN_NAMES.join(", "));
    println!("  Sections: {}", Section::ALL.map(|s| s.label()).join(", "));

    let mut warnings = Vec::new();
    if t.title.starts_with(char::is_whitespace) {
        warnings.push("title starts with whitespace".to_string());
    }
    if t.subtitle.trim() != t.subtitle {
        warnings.push("subtitle has surrounding whitespace".to_string());
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
        println!("Header lines are compared exactly, whitespace included.");
    }

    Ok(())
}
