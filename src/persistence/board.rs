use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize)]
pub struct SavedBoard {
    pub name: String,
    pub timestamp: String,
    pub points: Vec<SavedPoint>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SavedPoint {
    pub re: Option<f64>,
    pub im: Option<f64>,
}

/// Get or create the boards directory.
pub fn boards_dir() -> Option<PathBuf> {
    let dir = super::data_dir()?.join("boards");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// List available boards, sorted by timestamp (newest first).
pub fn list_boards() -> Vec<(String, String)> {
    let dir = match boards_dir() {
        Some(d) => d,
        None => return Vec::new(),
    };
    let mut boards: Vec<(String, String)> = Vec::new();
    if let Ok(entries) = std::fs::read_dir(&dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map_or(false, |e| e == "json") {
                if let Ok(content) = std::fs::read_to_string(&path) {
                    if let Ok(board) = serde_json::from_str::<SavedBoard>(&content) {
                        boards.push((board.name, board.timestamp));
                    }
                }
            }
        }
    }
    boards.sort_by(|a, b| b.1.cmp(&a.1));
    boards
}

/// Save a board to disk.
pub fn save_board(board: &SavedBoard) -> Result<(), String> {
    let dir = boards_dir().ok_or("cannot determine boards directory")?;
    let filename = format!("{}.json", sanitize_filename(&board.name));
    let path = dir.join(filename);
    let json =
        serde_json::to_string_pretty(board).map_err(|e| format!("serialize error: {}", e))?;
    std::fs::write(&path, json.as_bytes()).map_err(|e| format!("write error: {}", e))?;
    Ok(())
}

/// Load a board from disk by name.
pub fn load_board(name: &str) -> Result<SavedBoard, String> {
    let dir = boards_dir().ok_or("cannot determine boards directory")?;
    let filename = format!("{}.json", sanitize_filename(name));
    let path = dir.join(filename);
    let content = std::fs::read_to_string(&path).map_err(|e| format!("read error: {}", e))?;
    serde_json::from_str(&content).map_err(|e| format!("parse error: {}", e))
}

/// Sanitize a name for use as a filename.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

/// Generate a timestamp string for board naming.
pub fn timestamp_name() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("board_{}", secs)
}

/// Epoch-seconds timestamp for ordering.
pub fn timestamp_iso() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{}", secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("my board #2"), "my_board__2");
        assert_eq!(sanitize_filename("plain-name_3"), "plain-name_3");
    }

    #[test]
    fn test_board_round_trips_through_json() {
        let board = SavedBoard {
            name: "demo".to_string(),
            timestamp: "1700000000".to_string(),
            points: vec![
                SavedPoint { re: Some(5.0), im: Some(2.5) },
                SavedPoint { re: None, im: Some(-1.0) },
            ],
        };
        let json = serde_json::to_string_pretty(&board).unwrap();
        let back: SavedBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "demo");
        assert_eq!(back.points, board.points);
    }

    #[test]
    fn test_timestamp_name_shape() {
        assert!(timestamp_name().starts_with("board_"));
    }
}
