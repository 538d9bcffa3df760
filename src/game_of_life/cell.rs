//! Two-valued cell state

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> Self {
        state as u8
    }
}

impl TryFrom<u8> for CellState {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::Alive),
            other => Err(format!("cell state must be 0 or 1, got {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_values() {
        assert_eq!(u8::from(CellState::Dead), 0);
        assert_eq!(u8::from(CellState::Alive), 1);
        assert_eq!(CellState::try_from(1).unwrap(), CellState::Alive);
        assert!(CellState::try_from(2).is_err());
    }

    #[test]
    fn test_serde_as_digit() {
        let json = serde_json::to_string(&vec![CellState::Alive, CellState::Dead]).unwrap();
        assert_eq!(json, "[1,0]");

        let parsed: Vec<CellState> = serde_json::from_str("[0,1,1]").unwrap();
        assert_eq!(parsed, vec![CellState::Dead, CellState::Alive, CellState::Alive]);
        assert!(serde_json::from_str::<Vec<CellState>>("[3]").is_err());
    }
}
