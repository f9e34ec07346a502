pub mod alphabet;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod strength;

pub use alphabet::{build_alphabet, CharacterClasses};
pub use entropy::{ByteSource, OsEntropy};
pub use error::{Error, InvalidRequest, Result};
pub use generator::generate_password;
pub use strength::{assess, classify, score, verdict, CharClass, Strength, Verdict};
