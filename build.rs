use std::env;
use std::fs;
use std::path::Path;

// Claves que AppConfig lee con option_env!
const CONFIG_KEYS: &[&str] = &[
    "API_BASE_URL",
    "API_BASE_URL_DEVELOPMENT",
    "API_BASE_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "NETWORK_TIMEOUT_SECONDS",
    "DELIVERY_FEE",
    "TAX_RATE_PERCENT",
    "CURRENCY",
];

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No se pudo leer .env");
        return;
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        // El entorno real tiene prioridad sobre .env
        if CONFIG_KEYS.contains(&key) && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
