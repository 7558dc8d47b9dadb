use crate::model::{Creative, GeneratorOptions};
use crate::notify::NotificationKind;
use crate::providers::DataSource;
use crate::tui::state::{ListNavigation, ListState};
use crate::tui::traits::{EventResult, PageContext, PageState};
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug)]
pub struct CreativePage {
    pub creatives: Vec<Creative>,
    pub options: GeneratorOptions,
    pub list: ListState,
}

impl CreativePage {
    pub fn mount(data: &dyn DataSource) -> Self {
        let creatives = data.creatives();
        let list = ListState::with_total(creatives.len());
        Self {
            creatives,
            options: data.generator_options(),
            list,
        }
    }

    pub fn selected(&self) -> Option<&Creative> {
        self.creatives.get(self.list.selected)
    }
}

impl PageState for CreativePage {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut PageContext<'_>) -> EventResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(),
            KeyCode::Char('x') => {
                if let Some(creative) = self.selected() {
                    ctx.notifications.notify(
                        NotificationKind::Success,
                        "Exporting to Adobe AEM",
                        format!("{} creative will be published", creative.language),
                    );
                }
            }
            KeyCode::Char('p') => {
                ctx.notifications.notify(
                    NotificationKind::Info,
                    "Preview Mode",
                    "Opening creative preview...",
                );
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationCenter;
    use crate::providers::DemoData;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_export_and_preview() {
        let mut page = CreativePage::mount(&DemoData::new());
        let mut center = NotificationCenter::default();
        let mut ctx = PageContext {
            notifications: &mut center,
        };
        page.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), &mut ctx);
        page.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), &mut ctx);
        page.handle_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE), &mut ctx);

        let toasts: Vec<_> = center.visible().collect();
        assert_eq!(toasts[0].kind, NotificationKind::Info);
        assert_eq!(toasts[0].title, "Preview Mode");
        assert_eq!(toasts[1].kind, NotificationKind::Success);
        assert_eq!(
            toasts[1].description,
            format!("{} creative will be published", page.creatives[1].language)
        );
    }
}
