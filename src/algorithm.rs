use std::fmt;
use std::str::FromStr;

use crate::error::HashError;

/// Length of the longest digest, SHA-512's.
pub const MAX_DIGEST_LEN: usize = 64;

/// The compression engine an algorithm runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Five 32-bit words of state, 80 rounds.
    Sha1,
    /// Eight 32-bit words of state, 64 rounds. SHA-224 and SHA-256.
    Sha256,
    /// Eight 64-bit words of state, 80 rounds. SHA-384 and SHA-512.
    Sha512,
}

/// One of the five hash algorithms of FIPS 180-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    /// Digest length in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha224 => 28,
            Algorithm::Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
        }
    }

    /// Block length in bytes.
    pub const fn block_len(self) -> usize {
        match self.family() {
            Family::Sha1 | Family::Sha256 => 64,
            Family::Sha512 => 128,
        }
    }

    pub const fn family(self) -> Family {
        match self {
            Algorithm::Sha1 => Family::Sha1,
            Algorithm::Sha224 | Algorithm::Sha256 => Family::Sha256,
            Algorithm::Sha384 | Algorithm::Sha512 => Family::Sha512,
        }
    }

    /// The standard name, e.g. `SHA-256`.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha224 => "SHA-224",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha384 => "SHA-384",
            Algorithm::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses `sha256`, `SHA-256`, `Sha-256` and so on. Case is ignored and the
/// dash is optional.
impl FromStr for Algorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|&c| c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "sha1" => Ok(Algorithm::Sha1),
            "sha224" => Ok(Algorithm::Sha224),
            "sha256" => Ok(Algorithm::Sha256),
            "sha384" => Ok(Algorithm::Sha384),
            "sha512" => Ok(Algorithm::Sha512),
            _ => Err(HashError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_follow_the_family() {
        let lens: Vec<_> = Algorithm::ALL
            .iter()
            .map(|a| (a.digest_len(), a.block_len()))
            .collect();
        assert_eq!(lens, [(20, 64), (28, 64), (32, 64), (48, 128), (64, 128)]);

        assert_eq!(Algorithm::Sha224.family(), Algorithm::Sha256.family());
        assert_eq!(Algorithm::Sha384.family(), Family::Sha512);
        assert!(Algorithm::ALL.iter().all(|a| a.digest_len() <= MAX_DIGEST_LEN));
    }

    #[test]
    fn parse_accepts_common_spellings() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.name().parse::<Algorithm>(), Ok(alg));
            assert_eq!(alg.to_string().to_lowercase().parse::<Algorithm>(), Ok(alg));
        }
        assert_eq!("sha512".parse::<Algorithm>(), Ok(Algorithm::Sha512));
        assert_eq!(" Sha-384 ".parse::<Algorithm>(), Ok(Algorithm::Sha384));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(
            "md5".parse::<Algorithm>(),
            Err(HashError::UnknownAlgorithm("md5".to_owned()))
        );
        assert!("sha-3".parse::<Algorithm>().is_err());
        assert!("".parse::<Algorithm>().is_err());
    }
}
