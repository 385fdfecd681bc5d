use std::convert::Infallible;

use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Version;

impl crate::cli::op::Op for Version {
    type Error = Infallible;
    type Output = String;

    fn execute(&self, _ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        Ok(format!(
            "{} {} ({})\nbuilt {} with {} for {} [{}]",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("REPO_VERSION"),
            env!("BUILD_TIMESTAMP"),
            env!("RUST_VERSION"),
            env!("BUILD_TARGET"),
            env!("BUILD_PROFILE"),
        ))
    }
}
