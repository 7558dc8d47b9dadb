use crate::model::{Dealer, LeadBucket, SeriesChart};
use crate::notify::NotificationKind;
use crate::providers::DataSource;
use crate::tui::state::{ListNavigation, ListState};
use crate::tui::traits::{EventResult, PageContext, PageState};
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug)]
pub struct LeadsPage {
    pub dealers: Vec<Dealer>,
    pub distribution: Vec<LeadBucket>,
    pub performance: SeriesChart,
    pub list: ListState,
}

impl LeadsPage {
    pub fn mount(data: &dyn DataSource) -> Self {
        let dealers = data.dealers();
        let list = ListState::with_total(dealers.len());
        Self {
            dealers,
            distribution: data.lead_distribution(),
            performance: data.dealer_performance(),
            list,
        }
    }

    pub fn selected(&self) -> Option<&Dealer> {
        self.dealers.get(self.list.selected)
    }

    pub fn total_leads(&self) -> u32 {
        self.distribution.iter().map(|b| b.value).sum()
    }
}

impl PageState for LeadsPage {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut PageContext<'_>) -> EventResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(),
            KeyCode::Char('a') | KeyCode::Enter => {
                if let Some(dealer) = self.selected() {
                    ctx.notifications.notify(
                        NotificationKind::Success,
                        format!("Lead assigned to {}", dealer.name),
                        "AI has routed the lead based on performance metrics",
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

    #[test]
    fn test_assign_hot_lead_to_selected_dealer() {
        let mut page = LeadsPage::mount(&DemoData::new());
        let mut center = NotificationCenter::default();
        let mut ctx = PageContext {
            notifications: &mut center,
        };
        page.handle_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE), &mut ctx);
        page.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE), &mut ctx);
        let toast = center.latest().expect("toast");
        assert_eq!(toast.title, format!("Lead assigned to {}", page.dealers[1].name));
    }

    #[test]
    fn test_selection_clamps_at_last_dealer() {
        let mut page = LeadsPage::mount(&DemoData::new());
        let mut center = NotificationCenter::default();
        let mut ctx = PageContext {
            notifications: &mut center,
        };
        for _ in 0..10 {
            page.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), &mut ctx);
        }
        assert_eq!(page.list.selected, page.dealers.len() - 1);
    }
}
