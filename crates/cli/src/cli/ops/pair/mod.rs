use clap::{Args, Subcommand};

pub mod generate;
pub mod show;

use crate::cli::op::Op;

crate::command_enum! {
    (Generate, generate::Generate),
    (Show, show::Show),
}

pub type PairCommand = Command;

/// Box key pair management
#[derive(Args, Debug, Clone)]
pub struct Pair {
    #[command(subcommand)]
    pub command: PairCommand,
}

impl Op for Pair {
    type Error = OpError;
    type Output = OpOutput;

    fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx)
    }
}
