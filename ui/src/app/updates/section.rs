use crate::app::model::Model;
use crate::components::common::{ComponentId, Msg, SectionActivityMsg};
use crate::components::sections::{ATTR_SECTION, Section};
use crate::error::{AppError, AppResult};
use tuirealm::terminal::TerminalAdapter;
use tuirealm::{AttrValue, Attribute};

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_section(&mut self, msg: SectionActivityMsg) -> Option<Msg> {
        let current = self.state_manager.current_section;
        let target = match msg {
            SectionActivityMsg::Next => current.next(),
            SectionActivityMsg::Previous => current.prev(),
        };

        if let Err(e) = self.show_section(target) {
            return Some(Msg::Error(e));
        }
        None
    }

    /// Point the header tabs and the section pane at `section`.
    pub fn show_section(&mut self, section: Section) -> AppResult<()> {
        let value = AttrValue::Number(section.index() as isize);
        for id in [ComponentId::Header, ComponentId::SectionView] {
            self.app
                .attr(&id, Attribute::Custom(ATTR_SECTION), value.clone())
                .map_err(|e| AppError::Component(e.to_string()))?;
        }

        log::debug!(
            "Section: {:?} -> {:?}",
            self.state_manager.current_section,
            section
        );
        self.state_manager.current_section = section;
        self.set_redraw(true);
        Ok(())
    }
}
