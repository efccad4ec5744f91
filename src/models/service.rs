//! Streaming service table
//!
//! Each supported provider has a fixed member capacity for group accounts and
//! an accent colour used when rendering its cards.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::account::AccountKind;

/// Supported streaming providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamingService {
    Netflix,
    Hbo,
    Paramount,
    Prime,
    Crunchyroll,
    Spotify,
}

/// Static per-service configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Member slots for a group account
    pub group_capacity: usize,
    /// Accent colour as RGB
    pub accent: (u8, u8, u8),
}

impl StreamingService {
    /// All services, in picker order
    pub const ALL: [StreamingService; 6] = [
        Self::Netflix,
        Self::Hbo,
        Self::Paramount,
        Self::Prime,
        Self::Crunchyroll,
        Self::Spotify,
    ];

    /// Look up the static configuration for this service
    pub fn config(self) -> ServiceConfig {
        match self {
            Self::Netflix => ServiceConfig {
                group_capacity: 5,
                accent: (220, 38, 38),
            },
            Self::Hbo => ServiceConfig {
                group_capacity: 5,
                accent: (147, 51, 234),
            },
            Self::Paramount => ServiceConfig {
                group_capacity: 6,
                accent: (37, 99, 235),
            },
            Self::Prime => ServiceConfig {
                group_capacity: 6,
                accent: (59, 130, 246),
            },
            Self::Crunchyroll => ServiceConfig {
                group_capacity: 5,
                accent: (249, 115, 22),
            },
            Self::Spotify => ServiceConfig {
                group_capacity: 6,
                accent: (34, 197, 94),
            },
        }
    }

    /// Number of member slots for an account of `kind` on this service
    pub fn member_capacity(self, kind: AccountKind) -> usize {
        match kind {
            AccountKind::Group => self.config().group_capacity,
            AccountKind::Personal => 1,
        }
    }

    /// Storage key (lowercase)
    pub fn key(self) -> &'static str {
        match self {
            Self::Netflix => "netflix",
            Self::Hbo => "hbo",
            Self::Paramount => "paramount",
            Self::Prime => "prime",
            Self::Crunchyroll => "crunchyroll",
            Self::Spotify => "spotify",
        }
    }

    /// Parse a service from its key, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|service| service.key() == s)
    }

    /// Position in `ALL`
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for StreamingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Netflix => write!(f, "Netflix"),
            Self::Hbo => write!(f, "HBO"),
            Self::Paramount => write!(f, "Paramount"),
            Self::Prime => write!(f, "Prime"),
            Self::Crunchyroll => write!(f, "Crunchyroll"),
            Self::Spotify => write!(f, "Spotify"),
        }
    }
}
