use std::env;
use std::path::{Path, PathBuf};

use fixtura_core::Schema;
use fixtura_generate::{GenerateOptions, PayloadGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let mut schema_path: Option<PathBuf> = None;
    let mut seed: Option<u64> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                seed = args.next().map(|value| value.parse()).transpose()?;
            }
            _ => {
                if schema_path.is_none() {
                    schema_path = Some(PathBuf::from(arg));
                } else {
                    return Err("unexpected argument".into());
                }
            }
        }
    }

    let schema_path = schema_path.ok_or("missing schema path")?;
    let schema = load_schema(&schema_path)?;

    let mut generator = PayloadGenerator::with_options(GenerateOptions {
        seed,
        ..GenerateOptions::default()
    });
    let payload = generator.generate(&schema)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}

fn load_schema(path: &Path) -> Result<Schema, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let schema = serde_json::from_str(&contents)?;
    Ok(schema)
}
