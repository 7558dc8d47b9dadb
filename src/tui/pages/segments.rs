use crate::model::{Segment, SegmentSummary};
use crate::notify::NotificationKind;
use crate::providers::DataSource;
use crate::tui::state::{ListNavigation, ListState};
use crate::tui::traits::{EventResult, PageContext, PageState};
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug)]
pub struct SegmentsPage {
    pub segments: Vec<Segment>,
    pub summary: SegmentSummary,
    pub list: ListState,
    /// Id of the card showing its action side
    pub flipped: Option<u32>,
}

impl SegmentsPage {
    pub fn mount(data: &dyn DataSource) -> Self {
        let segments = data.segments();
        let summary = SegmentSummary::from_segments(&segments);
        let list = ListState::with_total(segments.len());
        Self {
            segments,
            summary,
            list,
            flipped: None,
        }
    }

    pub fn selected(&self) -> Option<&Segment> {
        self.segments.get(self.list.selected)
    }

    pub fn is_flipped(&self, segment: &Segment) -> bool {
        self.flipped == Some(segment.id)
    }

    /// Flip the selected card; flipping it again shows the front.
    pub fn toggle_flip(&mut self) {
        let Some(id) = self.selected().map(|s| s.id) else {
            return;
        };
        self.flipped = if self.flipped == Some(id) {
            None
        } else {
            Some(id)
        };
    }
}

impl PageState for SegmentsPage {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut PageContext<'_>) -> EventResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_flip(),
            KeyCode::Char('s') => {
                if let Some(segment) = self.selected() {
                    let title = format!("Campaign initiated for {}", segment.name);
                    ctx.notifications.notify(
                        NotificationKind::Success,
                        title,
                        "LifeBOT is generating personalized content...",
                    );
                }
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

    fn press(page: &mut SegmentsPage, center: &mut NotificationCenter, code: KeyCode) {
        let mut ctx = PageContext {
            notifications: center,
        };
        page.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &mut ctx);
    }

    #[test]
    fn test_flip_toggles_selected_card() {
        let mut page = SegmentsPage::mount(&DemoData::new());
        let mut center = NotificationCenter::default();
        press(&mut page, &mut center, KeyCode::Enter);
        let first = page.segments[0].id;
        assert_eq!(page.flipped, Some(first));

        press(&mut page, &mut center, KeyCode::Down);
        press(&mut page, &mut center, KeyCode::Enter);
        assert_eq!(page.flipped, Some(page.segments[1].id));

        press(&mut page, &mut center, KeyCode::Enter);
        assert_eq!(page.flipped, None);
    }

    #[test]
    fn test_send_campaign_notifies() {
        let mut page = SegmentsPage::mount(&DemoData::new());
        let mut center = NotificationCenter::default();
        press(&mut page, &mut center, KeyCode::Char('s'));
        let latest = center.latest().expect("toast");
        assert_eq!(
            latest.title,
            format!("Campaign initiated for {}", page.segments[0].name)
        );
        assert_eq!(latest.description, "LifeBOT is generating personalized content...");
    }
}
