use std::env;

const DOTENV_PATH_VAR: &str = "CONTRACTS_DOTENV";

/// Load `.env` from the working directory and, if set, the file named by
/// `CONTRACTS_DOTENV`. Returns the files that were loaded.
///
/// Runs before logging is initialized so that `LOG_LEVEL` may come from a
/// dotenv file; callers report the result once the logger is up.
pub fn load_dotenv() -> Vec<String> {
    let mut loaded = Vec::new();
    if dotenv::dotenv().is_ok() {
        loaded.push(".env".to_string());
    }
    if let Ok(path) = env::var(DOTENV_PATH_VAR) {
        if dotenv::from_path(&path).is_ok() {
            loaded.push(path);
        }
    }
    loaded
}
