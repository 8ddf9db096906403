use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ReadorderError {
    #[snafu(display("Decode `{}` response error: {}", provider, source))]
    Decode {
        source: serde_json::Error,
        provider: String,
    },
    #[snafu(display("Read `{}` error: {}", path, source))]
    IoRead {
        source: std::io::Error,
        path: String,
    },
}
