//! Adler-32 runtime configuration (overrides + thresholds).
//!
//! This module centralizes the selection knobs:
//! - bytewise vs batched kernel threshold
//! - optional forced kernel
//! - read buffer size used by the stream/file adapters
//!
//! With `std`, overrides are read once from the environment:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `ADLER32_FORCE` | `auto`, `bytewise` (`scalar`, `reference`), `batched` (`nmax`) |
//! | `ADLER32_BATCH_THRESHOLD` | bytes |
//! | `ADLER32_READ_CHUNK_BYTES` | bytes, clamped to `[512, 16 MiB]` |

/// Forced kernel selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Adler32Force {
  /// Pick by input length.
  #[default]
  Auto,
  /// Always reduce after every byte.
  Bytewise,
  /// Always use the deferred-reduction kernel.
  Batched,
}

impl Adler32Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Bytewise => "bytewise",
      Self::Batched => "batched",
    }
  }

  /// Parse a force mode, case-insensitively. Unknown names yield `None`.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("bytewise")
      || value.eq_ignore_ascii_case("scalar")
      || value.eq_ignore_ascii_case("reference")
    {
      return Some(Self::Bytewise);
    }
    if value.eq_ignore_ascii_case("batched") || value.eq_ignore_ascii_case("nmax") {
      return Some(Self::Batched);
    }
    None
  }
}

/// Kernel thresholds and adapter buffer size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Adler32Tunables {
  /// Input length at which `Auto` switches from bytewise to batched.
  pub bytewise_to_batched: usize,
  /// Buffer size the reader/file adapters read into.
  pub read_chunk_bytes: usize,
}

impl Adler32Tunables {
  pub const DEFAULT: Self = Self {
    bytewise_to_batched: 32,
    read_chunk_bytes: 64 * 1024,
  };
}

impl Default for Adler32Tunables {
  fn default() -> Self {
    Self::DEFAULT
  }
}

/// Smallest adapter read buffer.
pub const MIN_READ_CHUNK_BYTES: usize = 512;
/// Largest adapter read buffer.
pub const MAX_READ_CHUNK_BYTES: usize = 16 * 1024 * 1024;

/// Full runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Adler32Config {
  pub force: Adler32Force,
  pub tunables: Adler32Tunables,
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: Adler32Force,
  bytewise_to_batched: Option<usize>,
  read_chunk_bytes: Option<usize>,
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn var(name: &str) -> Option<std::string::String> {
    let value = std::env::var(name).ok()?;
    if value.trim().is_empty() {
      return None;
    }
    Some(value)
  }

  fn parse_usize(name: &str) -> Option<usize> {
    let value = var(name)?;
    let parsed = value.trim().parse::<usize>().ok();
    if parsed.is_none() {
      log::warn!("ignoring {name}={value:?}: not a byte count");
    }
    parsed
  }

  fn parse_force(name: &str) -> Option<Adler32Force> {
    let value = var(name)?;
    let parsed = Adler32Force::parse(&value);
    if parsed.is_none() {
      log::warn!("ignoring {name}={value:?}: expected auto, bytewise or batched");
    }
    parsed
  }

  Overrides {
    force: parse_force("ADLER32_FORCE").unwrap_or_default(),
    bytewise_to_batched: parse_usize("ADLER32_BATCH_THRESHOLD"),
    read_chunk_bytes: parse_usize("ADLER32_READ_CHUNK_BYTES"),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

fn resolve(ov: Overrides) -> Adler32Config {
  let base = Adler32Tunables::DEFAULT;
  let read_chunk_bytes = ov
    .read_chunk_bytes
    .unwrap_or(base.read_chunk_bytes)
    .clamp(MIN_READ_CHUNK_BYTES, MAX_READ_CHUNK_BYTES);

  Adler32Config {
    force: ov.force,
    tunables: Adler32Tunables {
      bytewise_to_batched: ov.bytewise_to_batched.unwrap_or(base.bytewise_to_batched),
      read_chunk_bytes,
    },
  }
}

/// Get the effective Adler-32 configuration.
#[must_use]
pub fn get() -> Adler32Config {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CONFIG: OnceLock<Adler32Config> = OnceLock::new();
    *CONFIG.get_or_init(|| {
      let config = resolve(overrides());
      log::debug!(
        "adler32 config: force={} batch_threshold={} read_chunk_bytes={}",
        config.force.as_str(),
        config.tunables.bytewise_to_batched,
        config.tunables.read_chunk_bytes
      );
      config
    })
  }
  #[cfg(not(feature = "std"))]
  {
    resolve(overrides())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_force_aliases() {
    assert_eq!(Adler32Force::parse("AUTO"), Some(Adler32Force::Auto));
    assert_eq!(Adler32Force::parse(" scalar "), Some(Adler32Force::Bytewise));
    assert_eq!(Adler32Force::parse("reference"), Some(Adler32Force::Bytewise));
    assert_eq!(Adler32Force::parse("nmax"), Some(Adler32Force::Batched));
    assert_eq!(Adler32Force::parse("simd"), None);
  }

  #[test]
  fn force_names_round_trip() {
    for force in [Adler32Force::Auto, Adler32Force::Bytewise, Adler32Force::Batched] {
      assert_eq!(Adler32Force::parse(force.as_str()), Some(force));
    }
  }

  #[test]
  fn defaults_without_overrides() {
    let config = resolve(Overrides::default());
    assert_eq!(config, Adler32Config::default());
  }

  #[test]
  fn read_chunk_is_clamped() {
    let tiny = resolve(Overrides {
      read_chunk_bytes: Some(1),
      ..Overrides::default()
    });
    assert_eq!(tiny.tunables.read_chunk_bytes, MIN_READ_CHUNK_BYTES);

    let huge = resolve(Overrides {
      read_chunk_bytes: Some(usize::MAX),
      ..Overrides::default()
    });
    assert_eq!(huge.tunables.read_chunk_bytes, MAX_READ_CHUNK_BYTES);
  }

  #[test]
  fn threshold_override_applies() {
    let config = resolve(Overrides {
      force: Adler32Force::Batched,
      bytewise_to_batched: Some(4096),
      read_chunk_bytes: None,
    });
    assert_eq!(config.force, Adler32Force::Batched);
    assert_eq!(config.tunables.bytewise_to_batched, 4096);
  }
}
