use std::path::PathBuf;

pub struct ValidateArgs {
    pub kind: String,
    pub file: PathBuf,
}

pub struct ValueTypeArgs {
    pub token: String,
}

pub struct PingArgs {
    pub service: String,
}
