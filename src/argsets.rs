use std::path::PathBuf;

pub struct ConfigureArgs {
    pub device: String,
    pub ip: Option<String>,
    pub block: Option<String>,
    pub dmf: bool,
}

pub struct EraseArgs {
    pub device: String,
}

pub struct ApplyArgs {
    pub assets_file: PathBuf,
}

pub struct KvsGetArgs {
    pub key: String,
}

pub struct KvsSetArgs {
    pub key: String,
    pub value: String,
}
