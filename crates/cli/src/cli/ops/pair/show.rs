use clap::Args;
use ezcrypt::state::StateError;

#[derive(Args, Debug, Clone)]
pub struct Show;

#[derive(Debug, thiserror::Error)]
pub enum PairShowError {
    #[error("State error: {0}")]
    State(#[from] StateError),
}

impl crate::cli::op::Op for Show {
    type Error = PairShowError;
    type Output = String;

    fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let state = ctx.state()?;
        let pair = state.load_pair()?;
        let public = pair.public();

        Ok(format!(
            "Public key: {}\nFingerprint: {}",
            public.to_hex(),
            public.fingerprint()
        ))
    }
}
