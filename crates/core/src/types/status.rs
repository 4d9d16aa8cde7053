//! Order lifecycle status.

use serde::{Deserialize, Serialize};

/// Kitchen-side order status.
///
/// The admin order board moves orders through these states; the track page
/// renders whichever one the backend currently holds. Stored as the lowercase
/// wire strings the original documents use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Just placed, not yet picked up by the kitchen.
    #[default]
    Pending,
    /// Being cooked.
    Preparing,
    /// Ready for pickup or delivery.
    Ready,
    /// Handed over; terminal.
    Completed,
}

impl OrderStatus {
    /// Every status, in board order. The admin board renders one button per
    /// entry.
    pub const ALL: [Self; 4] = [Self::Pending, Self::Preparing, Self::Ready, Self::Completed];
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Preparing => write!(f, "preparing"),
            Self::Ready => write!(f, "ready"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "preparing" => Ok(Self::Preparing),
            "ready" => Ok(Self::Ready),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
