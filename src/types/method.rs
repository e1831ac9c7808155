//! Transfer method configured per job, and the concrete operation applied per target

use std::fmt;

/// How a job delivers files to its targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferMethod {
    /// Every target receives a copy; source is left intact
    #[default]
    Copy,

    /// Non-last targets receive copies, the last target receives the file itself
    Move,
}

/// Outcome of normalizing a raw `method` value from the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMethod {
    pub method: TransferMethod,
    /// Set when the raw value was missing or unrecognized and `Copy` was assumed
    pub defaulted: bool,
}

impl TransferMethod {
    /// Normalize a raw configuration value.
    ///
    /// Surrounding whitespace and case are ignored. A missing, empty or
    /// unknown value resolves to [`TransferMethod::Copy`] with `defaulted`
    /// set.
    pub fn resolve(raw: Option<&str>) -> ResolvedMethod {
        let parsed = raw.and_then(|value| match value.trim().to_ascii_lowercase().as_str() {
            "copy" => Some(TransferMethod::Copy),
            "move" => Some(TransferMethod::Move),
            _ => None,
        });

        match parsed {
            Some(method) => ResolvedMethod {
                method,
                defaulted: false,
            },
            None => ResolvedMethod {
                method: TransferMethod::Copy,
                defaulted: true,
            },
        }
    }

    /// Operation applied to the target at `index` out of `target_count`.
    ///
    /// Only the last target of a `Move` job is moved; the order of
    /// `target_dirs` decides which one that is.
    pub fn kind_for_target(self, index: usize, target_count: usize) -> TransferKind {
        match self {
            TransferMethod::Move if index + 1 == target_count => TransferKind::Move,
            _ => TransferKind::Copy,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransferMethod::Copy => "copy",
            TransferMethod::Move => "move",
        }
    }
}

impl fmt::Display for TransferMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-file operation performed against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Copy,
    Move,
}

impl TransferKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransferKind::Copy => "copy",
            TransferKind::Move => "move",
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_methods() {
        assert_eq!(
            TransferMethod::resolve(Some("copy")),
            ResolvedMethod {
                method: TransferMethod::Copy,
                defaulted: false
            }
        );
        assert_eq!(
            TransferMethod::resolve(Some("move")),
            ResolvedMethod {
                method: TransferMethod::Move,
                defaulted: false
            }
        );
    }

    #[test]
    fn test_resolve_ignores_case_and_whitespace() {
        let resolved = TransferMethod::resolve(Some("  Move "));
        assert_eq!(resolved.method, TransferMethod::Move);
        assert!(!resolved.defaulted);
    }

    #[test]
    fn test_resolve_defaults_to_copy() {
        for raw in [None, Some(""), Some("sync"), Some("   ")] {
            let resolved = TransferMethod::resolve(raw);
            assert_eq!(resolved.method, TransferMethod::Copy, "raw: {raw:?}");
            assert!(resolved.defaulted, "raw: {raw:?}");
        }
    }

    #[test]
    fn test_copy_never_moves() {
        for index in 0..3 {
            assert_eq!(
                TransferMethod::Copy.kind_for_target(index, 3),
                TransferKind::Copy
            );
        }
    }

    #[test]
    fn test_move_only_moves_last_target() {
        assert_eq!(TransferMethod::Move.kind_for_target(0, 3), TransferKind::Copy);
        assert_eq!(TransferMethod::Move.kind_for_target(1, 3), TransferKind::Copy);
        assert_eq!(TransferMethod::Move.kind_for_target(2, 3), TransferKind::Move);
    }

    #[test]
    fn test_move_single_target_is_pure_move() {
        assert_eq!(TransferMethod::Move.kind_for_target(0, 1), TransferKind::Move);
    }

    #[test]
    fn test_display() {
        assert_eq!(TransferMethod::Move.to_string(), "move");
        assert_eq!(TransferKind::Copy.to_string(), "copy");
    }
}
