use tour_core::{RotateDirection, ViewerCommand};

/// Keyboard shortcut for `key` (a `KeyboardEvent.key` value).
#[inline]
pub fn command_for_key(key: &str) -> Option<ViewerCommand> {
    let command = match key {
        "ArrowLeft" => ViewerCommand::Rotate(RotateDirection::Left),
        "ArrowRight" => ViewerCommand::Rotate(RotateDirection::Right),
        "ArrowUp" => ViewerCommand::Rotate(RotateDirection::Up),
        "ArrowDown" => ViewerCommand::Rotate(RotateDirection::Down),
        "+" | "=" => ViewerCommand::ZoomIn,
        "-" | "_" => ViewerCommand::ZoomOut,
        "0" | "r" | "R" => ViewerCommand::Reset,
        "f" | "F" | "Enter" => ViewerCommand::ToggleFullscreen,
        "Escape" => ViewerCommand::CloseInfo,
        _ => return None,
    };
    Some(command)
}
