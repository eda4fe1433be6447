use crate::app::model::Model;
use crate::components::common::Msg;
use catalog::SelectionChange;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Components read the selection while drawing, so a redraw is all a
    /// switch needs.
    pub fn update_selection_changed(&mut self, change: SelectionChange) -> Option<Msg> {
        match change {
            SelectionChange::Theme { previous, current } => {
                log::info!("Theme changed: {previous} -> {current}");
            }
            SelectionChange::Locale { previous, current } => {
                log::info!("Language changed: {previous} -> {current}");
            }
        }
        self.set_redraw(true);
        None
    }
}
