use crate::app::App;
use crate::input::InputAction;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::MoveUp => app.move_cursor(false),
        InputAction::MoveDown => app.move_cursor(true),
        InputAction::Activate => app.confirm(),
        InputAction::Roll => app.roll(),
        InputAction::Hold => app.hold(),
        InputAction::QuickPick(index) => app.quick_pick(index),
    }
}
