//! Wire models shared by the backend client and the core state machine.

use serde::{Deserialize, Serialize};

/// Authenticated user as reported by the auth service. The `id` is an
/// opaque backend-issued identifier and is never derived locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// A live session: the signed-in user plus the bearer token sent with
/// every row-store request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: User,
}

/// A single word/meaning row from the `words` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Row id assigned by the backend on insert.
    pub id: i64,
    pub word: String,
    pub meaning: String,
    /// Owning user's id; every row in a loaded list carries the same owner.
    pub user_id: String,
}

/// Insert payload for a new word row. The backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWord {
    pub word: String,
    pub meaning: String,
    pub user_id: String,
}
