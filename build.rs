use std::env;
use std::fs;
use std::path::Path;

const CONFIG_KEYS: &[&str] = &[
    "PACIFIC_API_BASE",
    "PACIFIC_API_KEY",
    "PACIFIC_DEFAULT_BRAND",
    "PACIFIC_AUTHOR",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={key}");
    }

    // A local .env feeds option_env! in src/config.rs; real env vars win.
    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=Could not read .env, using defaults");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if CONFIG_KEYS.contains(&key) && env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value.trim());
            }
        }
    }
}
