use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrKind, Error};

/// Closed set of uppercase wire tokens with `as_str`, `Display` and `FromStr`.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Error> {
                Self::ALL.iter().copied().find(|v| v.as_str() == s).ok_or_else(|| {
                    Error::new(
                        ErrKind::ContractInvalid,
                        format!("'{}' is not a valid {}", s, stringify!($name)),
                    )
                })
            }
        }
    };
}

string_enum!(AdminState {
    Locked => "LOCKED",
    Unlocked => "UNLOCKED",
});

string_enum!(OperatingState {
    Enabled => "ENABLED",
    Disabled => "DISABLED",
});

string_enum!(ReadWrite {
    Read => "R",
    Write => "W",
    ReadWrite => "RW",
    WriteRead => "WR",
});

string_enum!(Category {
    Security => "SECURITY",
    HwHealth => "HW_HEALTH",
    SwHealth => "SW_HEALTH",
});

string_enum!(Severity {
    Minor => "MINOR",
    Normal => "NORMAL",
    Critical => "CRITICAL",
});

string_enum!(NotificationStatus {
    New => "NEW",
    Processed => "PROCESSED",
    Escalated => "ESCALATED",
});

string_enum!(TransmissionStatus {
    Acknowledged => "ACKNOWLEDGED",
    Failed => "FAILED",
    Sent => "SENT",
    Escalated => "ESCALATED",
    Resending => "RESENDING",
});

string_enum!(HttpMethod {
    Get => "GET",
    Post => "POST",
    Put => "PUT",
    Patch => "PATCH",
    Delete => "DELETE",
});

impl Default for NotificationStatus {
    fn default() -> Self {
        NotificationStatus::New
    }
}

impl ReadWrite {
    pub fn is_readable(self) -> bool {
        !matches!(self, ReadWrite::Write)
    }

    pub fn is_writable(self) -> bool {
        !matches!(self, ReadWrite::Read)
    }
}
