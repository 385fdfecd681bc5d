pub mod init;
pub mod key;
pub mod open;
pub mod pair;
pub mod seal;
pub mod version;

pub use init::Init;
pub use key::Key;
pub use open::Open;
pub use pair::Pair;
pub use seal::Seal;
pub use version::Version;
