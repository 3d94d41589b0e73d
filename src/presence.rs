//! Presence data contract for collaborative editing.
//!
//! These are the plain shapes a host application broadcasts while users
//! edit together: cursor position, scroll offset, text selection, and the
//! untyped message envelope that carries them. This crate defines the
//! contract only; transport, queuing, and conflict resolution belong to the
//! host.
//!
//! Field names serialize in camelCase to match the client wire format.

use rand::RngExt;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

// ============================================================================
// POSITION AND POINTER
// ============================================================================

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Creates a position from coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A user's cursor, broadcast to other participants.
///
/// One canonical shape covers every broadcast variant: the scroll offset
/// and display color are optional and omitted from the wire when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    /// Identifier of the owning user.
    pub id: String,
    /// Cursor position.
    pub position: Position,
    /// Scroll offset of the owner's viewport, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll: Option<Position>,
    /// Display color as `#rrggbb`, when assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Pointer {
    /// Creates a pointer with no scroll offset or color.
    pub fn new(id: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            position,
            scroll: None,
            color: None,
        }
    }

    /// Sets the scroll offset.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_scroll(mut self, scroll: Position) -> Self {
        self.scroll = Some(scroll);
        self
    }

    /// Sets the display color.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Assigns a random `#rrggbb` display color.
    ///
    /// Used when the host has no stored color for the user. Uniformity of
    /// the distribution is not guaranteed.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_random_color(mut self) -> Self {
        let rgb: u32 = rand::rng().random_range(0..0x100_0000);
        self.color = Some(format!("#{rgb:06x}"));
        self
    }
}

// ============================================================================
// SELECTION AND USER
// ============================================================================

/// A text range highlighted by a user, in character offsets.
///
/// `start <= end` is expected but not enforced; hosts exchange selections
/// as-is and may normalize with [`Selection::normalized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub start: u64,
    pub end: u64,
}

impl Selection {
    /// Creates a selection from offsets.
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Returns true if `start <= end`.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Returns the selection with its offsets in ascending order.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.is_ordered() {
            self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }

    /// Returns true if the selection covers no characters.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// A participant's broadcast state: cursor plus selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub pointer: Pointer,
    pub selection: Selection,
}

// ============================================================================
// MESSAGE ENVELOPE
// ============================================================================

/// The untyped envelope hosts dispatch on.
///
/// The payload stays opaque until a handler that knows the `message_type`
/// decodes it with [`Message::decode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Discriminator the host dispatches on.
    pub message_type: String,
    /// Opaque payload, decoded lazily by type-specific handlers.
    pub raw_message: serde_json::Value,
}

impl Message {
    /// Wraps a payload in an envelope.
    pub fn new(
        message_type: impl Into<String>,
        payload: &impl Serialize,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            message_type: message_type.into(),
            raw_message: serde_json::to_value(payload)?,
        })
    }

    /// Decodes the payload as `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.raw_message.clone())
    }
}

// ============================================================================
// TESTS
// ============================================================================
