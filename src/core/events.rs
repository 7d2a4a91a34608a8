use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::{debug, info};
use crate::core::{Player, MoveRejection};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    pub event_type: GameEventType,
    pub timestamp: DateTime<Utc>,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEventType {
    MoveMade,
    MoveRejected,
    GameWon,
    GameDrawn,
    GameReset,
}

impl GameEvent {
    pub fn new(event_type: GameEventType, data: serde_json::Value) -> Self {
        Self {
            event_type,
            timestamp: Utc::now(),
            data,
        }
    }

    pub fn move_made(player: Player, index: usize) -> Self {
        let data = serde_json::json!({
            "player": player,
            "cell": index
        });
        Self::new(GameEventType::MoveMade, data)
    }

    pub fn move_rejected(player: Player, index: usize, reason: MoveRejection) -> Self {
        let data = serde_json::json!({
            "player": player,
            "cell": index,
            "reason": reason.to_string()
        });
        Self::new(GameEventType::MoveRejected, data)
    }

    pub fn game_won(winner: Player) -> Self {
        let data = serde_json::json!({
            "winner": winner
        });
        Self::new(GameEventType::GameWon, data)
    }

    pub fn game_drawn() -> Self {
        Self::new(GameEventType::GameDrawn, serde_json::Value::Null)
    }

    pub fn game_reset() -> Self {
        Self::new(GameEventType::GameReset, serde_json::Value::Null)
    }
}

pub trait GameEventHandler {
    fn handle_event(&mut self, event: &GameEvent);
}

/// Traces every event and counts them by type.
#[derive(Debug, Default)]
pub struct EventLogger {
    counts: HashMap<GameEventType, usize>,
}

impl EventLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_event_count(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn get_event_count_by_type(&self, event_type: GameEventType) -> usize {
        self.counts.get(&event_type).copied().unwrap_or(0)
    }
}

impl GameEventHandler for EventLogger {
    fn handle_event(&mut self, event: &GameEvent) {
        *self.counts.entry(event.event_type).or_insert(0) += 1;

        match event.event_type {
            GameEventType::MoveMade | GameEventType::MoveRejected => {
                debug!(event = ?event.event_type, data = %event.data, "game event");
            }
            GameEventType::GameWon | GameEventType::GameDrawn | GameEventType::GameReset => {
                info!(event = ?event.event_type, data = %event.data, "game event");
            }
        }
    }
}
