/// Crate-wide result; every module's error enum converts into `anyhow::Error`
pub type Result<T = ()> = anyhow::Result<T>;
