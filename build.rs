use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct NameOrderData {
    eastern_name_order: BTreeMap<String, RuleData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum ShortData {
    GivenOnly,
    FamilyOnly,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum FullData {
    GivenThenFamily,
    FamilyThenGiven,
}

#[derive(Deserialize)]
struct RuleData {
    short: ShortData,
    full: FullData,
    separator: String,
    #[serde(default)]
    short_suffix: Option<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/name_order.json")?;
    let data: NameOrderData = serde_json::from_str(&json)?;
    write_map(
        &output.join("eastern_name_order.rs"),
        &data.eastern_name_order,
        rule_literal,
    )?;

    Ok(())
}

// Emits a `NameOrderRule` expression; the including module must have the
// rule types in scope.
fn rule_literal(rule: &RuleData) -> String {
    let short = match rule.short {
        ShortData::GivenOnly => "ShortForm::GivenOnly",
        ShortData::FamilyOnly => "ShortForm::FamilyOnly",
    };
    let full = match rule.full {
        FullData::GivenThenFamily => "FullForm::GivenThenFamily",
        FullData::FamilyThenGiven => "FullForm::FamilyThenGiven",
    };
    let short_suffix = match rule.short_suffix {
        Some(ref suffix) => format!("Some({:?})", suffix),
        None => "None".to_string(),
    };
    format!(
        "NameOrderRule {{ short: {}, full: {}, separator: {:?}, short_suffix: {} }}",
        short, full, rule.separator, short_suffix
    )
}

fn write_map<V, F>(output: &Path, map: &BTreeMap<String, V>, transform: F) -> Result<()>
where
    F: Fn(&V) -> String,
{
    let mut builder = phf_codegen::Map::new();
    for (k, v) in map {
        builder.entry(k.as_str(), &transform(v));
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
