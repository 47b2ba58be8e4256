//! Coercion of version-like values into [`Version`]
//!
//! Every operation that takes a version argument accepts text, numbers,
//! existing versions and `semver::Version` interchangeably. An existing
//! `Version` is reused as is; everything else goes through text parsing.

use crate::version::error::MalformedVersion;
use crate::version::types::Version;

/// A value that can be turned into a [`Version`]
pub trait IntoVersion {
    fn into_version(self) -> Result<Version, MalformedVersion>;
}

impl IntoVersion for Version {
    fn into_version(self) -> Result<Version, MalformedVersion> {
        Ok(self)
    }
}

impl IntoVersion for &Version {
    fn into_version(self) -> Result<Version, MalformedVersion> {
        Ok(self.clone())
    }
}

impl IntoVersion for &str {
    fn into_version(self) -> Result<Version, MalformedVersion> {
        Version::parse(self)
    }
}

impl IntoVersion for String {
    fn into_version(self) -> Result<Version, MalformedVersion> {
        Version::parse(&self)
    }
}

impl IntoVersion for &String {
    fn into_version(self) -> Result<Version, MalformedVersion> {
        Version::parse(self)
    }
}

/// An absent input is malformed rather than silently coerced.
impl<T: IntoVersion> IntoVersion for Option<T> {
    fn into_version(self) -> Result<Version, MalformedVersion> {
        match self {
            Some(value) => value.into_version(),
            None => Err(MalformedVersion::absent()),
        }
    }
}

macro_rules! impl_into_version_for_number {
    ($($ty:ty),*) => {
        $(
            impl IntoVersion for $ty {
                fn into_version(self) -> Result<Version, MalformedVersion> {
                    Version::parse(&self.to_string())
                }
            }
        )*
    };
}

impl_into_version_for_number!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Pre-release and build metadata are ignored; only major.minor.patch count.
impl IntoVersion for &semver::Version {
    fn into_version(self) -> Result<Version, MalformedVersion> {
        Version::from_components(vec![self.major, self.minor, self.patch])
    }
}

impl IntoVersion for semver::Version {
    fn into_version(self) -> Result<Version, MalformedVersion> {
        (&self).into_version()
    }
}
